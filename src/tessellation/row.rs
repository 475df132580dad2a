use rand::Rng;

use super::grid::BASE;
use super::point::Point;

/// 一行网格顶点
///
/// 每张图只分配两个 `Row`（奇数行、偶数行），扫描时原地重定位，不会重新分配。
#[derive(Debug, Clone)]
pub struct Row {
    start_x: f64,
    points: Vec<Point>,
}

impl Row {
    /// 创建长度固定为 `len` 的行，起始 x 为 `start_x`
    pub fn new(start_x: f64, len: usize) -> Self {
        Self {
            start_x,
            points: vec![Point::default(); len],
        }
    }

    /// 把整行移到 `y`：每个点先回到理想网格位置，再加上新的随机抖动
    pub fn reposition<R: Rng + ?Sized>(&mut self, y: f64, rng: &mut R) {
        let mut x = self.start_x;
        for p in self.points.iter_mut() {
            p.x = x;
            p.y = y;
            p.jitter(rng);
            x += BASE;
        }
    }
}

impl std::ops::Index<usize> for Row {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellation::grid::JITTER_RADIUS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reposition_keeps_length_and_capacity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut row = Row::new(-50.0, 8);
        let capacity = row.points.capacity();

        for i in 0..20 {
            row.reposition(i as f64 * 10.0, &mut rng);
            assert_eq!(row.points.len(), 8);
            assert_eq!(row.points.capacity(), capacity);
        }
    }

    #[test]
    fn reposition_places_points_near_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut row = Row::new(-100.0, 6);
        row.reposition(173.2, &mut rng);

        for (i, p) in row.points.iter().enumerate() {
            let ideal = Point::new(row.start_x + i as f64 * BASE, 173.2);
            assert!(p.distance(ideal) < JITTER_RADIUS);
        }
    }

    #[test]
    fn reposition_overwrites_previous_values() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut row = Row::new(0.0, 3);
        row.reposition(0.0, &mut rng);
        row.reposition(1000.0, &mut rng);

        // 旧坐标不会累积到新位置上
        for p in &row.points {
            assert!((p.y - 1000.0).abs() < JITTER_RADIUS);
        }
    }
}
