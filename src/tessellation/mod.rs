//! 三角形镶嵌背景生成模块
//!
//! 给定画布尺寸，逐行生成等边三角形网格顶点，对每个顶点施加随机抖动，
//! 并为每个三角形随机选取较低的不透明度，直接以流的方式写出 SVG。
//!
//! # 架构概览
//!
//! ```text
//! Rect (width × height)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ TriangleGrid::new │  ── 行数 / 每行点数
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │      scan()      │  ── 奇偶两行缓冲轮流重定位
//! └────────┬─────────┘
//!          │ 每个三角形
//!          ▼
//!   TriangleSink (SvgWriter / 测试收集器)
//! ```
//!
//! # 使用示例
//!
//! ```ignore
//! use tessellated::tessellation::{generate, Rect};
//!
//! let mut out = Vec::new();
//! generate(Rect::new(300.0, 200.0), &mut out, &mut rand::rng())?;
//! ```
//!
//! # 模块结构
//!
//! - `grid`: 几何常量与行列数量
//! - `point`: 顶点与抖动
//! - `row`: 可复用的行缓冲
//! - `scan`: 扫描算法与 `TriangleSink`

mod grid;
mod point;
mod row;
mod scan;


use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::svg::SvgWriter;

// ============================================================================
// 公开 API
// ============================================================================

pub use grid::{
    Rect, TriangleGrid, BASE, EVEN_START_X, JITTER_RADIUS, MAX_OPACITY, ODD_START_X, ROW_HEIGHT,
    SEED_ROW_Y,
};
pub use point::Point;
pub use row::Row;
pub use scan::{scan, TriangleSink};

/// 生成一张完整的 SVG 并写入 `sink`
///
/// 调用方负责保证 `width > 0`、`height > 0`。随机源由调用方传入，
/// 因此每次调用可以独立设定种子，也可以安全地并发调用。
/// 唯一的失败来源是 `sink` 写入失败，此时已写出的文档是不完整的。
pub fn generate<W, R>(rect: Rect, sink: W, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let grid = TriangleGrid::new(rect);
    log::debug!(
        "tessellating {}x{}: {} rows, {} triangles",
        rect.width,
        rect.height,
        grid.row_count,
        grid.triangle_count()
    );

    let mut writer = SvgWriter::new(sink, rect)?;
    scan(&grid, rng, &mut writer)?;
    writer.finish()?;
    Ok(())
}

/// 使用固定种子生成，相同的参数总是得到相同的输出
pub fn generate_with_seed<W: Write>(rect: Rect, sink: W, seed: u64) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(rect, sink, &mut rng)
}
