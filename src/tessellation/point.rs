use rand::Rng;

use super::grid::JITTER_RADIUS;

/// 二维坐标点
///
/// 只承载几何数据，不负责任何输出格式（格式化见 `svg::format_point`）。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 与另一点之间的欧氏距离
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// 在原地加上随机抖动
    ///
    /// 偏移量 = `JITTER_RADIUS * u1 * (cos(2π·u2), sin(2π·u2))`，u1、u2 ∈ [0, 1)。
    /// 半径与 u1 线性相关（而非 sqrt），因此点更集中在理想位置附近。
    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let hypot = JITTER_RADIUS * rng.random::<f64>();
        let theta = std::f64::consts::TAU * rng.random::<f64>();
        self.x += hypot * theta.cos();
        self.y += hypot * theta.sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_stays_inside_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let ideal = Point::new(250.0, -86.0);

        for _ in 0..10_000 {
            let mut p = ideal;
            p.jitter(&mut rng);
            assert!(
                p.distance(ideal) < JITTER_RADIUS,
                "jittered point {:?} drifted too far",
                p
            );
        }
    }

    #[test]
    fn jitter_favours_the_ideal_position() {
        // 线性半径：一半的点应落在半径一半以内（面积均匀分布时只有四分之一）
        let mut rng = StdRng::seed_from_u64(11);
        let ideal = Point::default();
        let samples = 20_000;

        let inner = (0..samples)
            .filter(|_| {
                let mut p = ideal;
                p.jitter(&mut rng);
                p.distance(ideal) < JITTER_RADIUS * 0.5
            })
            .count();

        let ratio = inner as f64 / samples as f64;
        assert!((0.45..0.55).contains(&ratio), "inner ratio {}", ratio);
    }
}
