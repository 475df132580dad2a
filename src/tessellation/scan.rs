use std::io;

use rand::Rng;

use super::grid::{TriangleGrid, EVEN_START_X, MAX_OPACITY, ODD_START_X, ROW_HEIGHT, SEED_ROW_Y};
use super::point::Point;
use super::row::Row;

/// 接收扫描输出的三角形
///
/// 三角形不会被保存，每算出一个就立即交给 sink。
pub trait TriangleSink {
    fn triangle(&mut self, vertices: [Point; 3], opacity: f64) -> io::Result<()>;
}

/// 逐行扫描网格，把三角形依次写入 `sink`
///
/// 奇偶两行缓冲在整张图的生命周期内只分配一次，轮流重定位：
/// 刚重定位的一行与上一轮保留下来的另一行组成一条三角形带。
/// sink 写入失败时立即返回错误，不做恢复。
pub fn scan<R, S>(grid: &TriangleGrid, rng: &mut R, sink: &mut S) -> io::Result<()>
where
    R: Rng + ?Sized,
    S: TriangleSink + ?Sized,
{
    let mut odd = Row::new(ODD_START_X, grid.odd_len);
    let mut even = Row::new(EVEN_START_X, grid.even_len);
    odd.reposition(SEED_ROW_Y, rng);

    let n = grid.even_len;
    let mut y = 0.0;
    for i in 1..grid.row_count {
        if i % 2 == 0 {
            odd.reposition(y, rng);
            for j in 0..n {
                // 朝上
                emit(sink, rng, [even[j], odd[j], odd[j + 1]])?;
            }
            for j in 0..n.saturating_sub(1) {
                // 朝下
                emit(sink, rng, [even[j], even[j + 1], odd[j + 1]])?;
            }
        } else {
            even.reposition(y, rng);
            for j in 0..n {
                // 朝下
                emit(sink, rng, [odd[j], odd[j + 1], even[j]])?;
            }
            for j in 0..n.saturating_sub(1) {
                // 朝上
                emit(sink, rng, [odd[j + 1], even[j], even[j + 1]])?;
            }
        }
        y += ROW_HEIGHT;
    }

    Ok(())
}

/// 每个三角形独立抽取一次不透明度
fn emit<R, S>(sink: &mut S, rng: &mut R, vertices: [Point; 3]) -> io::Result<()>
where
    R: Rng + ?Sized,
    S: TriangleSink + ?Sized,
{
    let opacity = MAX_OPACITY * rng.random::<f64>();
    sink.triangle(vertices, opacity)
}
