use serde::{Deserialize, Serialize};

/// 三角形底边长度
pub const BASE: f64 = 100.0;

/// 相邻两行之间的垂直距离，即边长为 `BASE` 的等边三角形的高
pub const ROW_HEIGHT: f64 = BASE * 1.732_050_807_568_877_2 * 0.5;

/// 顶点抖动半径，必须严格小于 `BASE / 2`
pub const JITTER_RADIUS: f64 = BASE * 0.35;

/// 每个三角形不透明度的上限（不含）
pub const MAX_OPACITY: f64 = 0.15;

/// 奇数行起始 x
pub const ODD_START_X: f64 = -BASE;

/// 偶数行起始 x，与奇数行错开半个底边
pub const EVEN_START_X: f64 = -BASE * 0.5;

/// 种子行所在的 y，位于画布顶部上方一行
pub const SEED_ROW_Y: f64 = -ROW_HEIGHT;

/// 请求的画布尺寸
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 三角网格的行列布局
///
/// 所有数量只由画布尺寸决定，与随机抖动无关。
/// 行数和每行点数都向上取整并额外加边距，保证网格覆盖到画布边缘之外。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleGrid {
    /// 总行数（包含种子行）
    pub row_count: usize,
    /// 奇数行的点数
    pub odd_len: usize,
    /// 偶数行的点数
    pub even_len: usize,
}

impl TriangleGrid {
    pub fn new(rect: Rect) -> Self {
        let rows = (rect.height / ROW_HEIGHT).ceil();
        let columns = (rect.width / BASE).ceil();

        // 尺寸不做校验：非正数和 NaN 记为 0，过大或无穷的值饱和而不是溢出
        let rows = if rows > 0.0 { rows as usize } else { 0 };
        let columns = if columns > 0.0 { columns as usize } else { 0 };

        Self {
            row_count: rows.saturating_add(3),
            odd_len: columns.saturating_add(3),
            even_len: columns.saturating_add(2),
        }
    }

    /// 扫描过程中会输出的三角形总数
    ///
    /// 每一行（种子行除外）输出 `even_len` 个一种朝向的三角形和 `even_len - 1` 个另一朝向的三角形。
    pub fn triangle_count(&self) -> usize {
        (self.row_count - 1).saturating_mul(self.even_len.saturating_mul(2) - 1)
    }

    /// 理想网格最右侧顶点的 x（两种行中较小者）
    pub fn covered_width(&self) -> f64 {
        let odd_end = ODD_START_X + (self.odd_len - 1) as f64 * BASE;
        let even_end = EVEN_START_X + (self.even_len - 1) as f64 * BASE;
        odd_end.min(even_end)
    }

    /// 理想网格最后一行的 y
    pub fn covered_height(&self) -> f64 {
        SEED_ROW_Y + (self.row_count - 1) as f64 * ROW_HEIGHT
    }
}
