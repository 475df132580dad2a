//! SVG serialization of a tessellation.
//!
//! Nothing is buffered here: the header goes out when the writer is created,
//! every triangle is written as soon as it is received, and `finish` closes the document.

use std::fmt;
use std::io::{self, Write};

use crate::tessellation::{Point, Rect, TriangleSink, MAX_OPACITY};

/// Polygon fill color shared by every triangle.
pub const FILL_COLOR: &str = "#090909";

/// Largest opacity written out. Raw values are below `MAX_OPACITY`, but `{:.3}`
/// would round the top of that range up to `MAX_OPACITY` itself.
const MAX_WRITTEN_OPACITY: f64 = MAX_OPACITY - 0.001;

/// Streams one `<polygon>` per triangle into `W`.
pub struct SvgWriter<W: Write> {
    inner: W,
}

impl<W: Write> SvgWriter<W> {
    /// Writes the opening `<svg>` tag for `rect` and returns the writer.
    ///
    /// The frame matches the requested size exactly even though the geometry overshoots it.
    pub fn new(mut inner: W, rect: Rect) -> io::Result<Self> {
        write!(
            inner,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w:.0}px" height="{h:.0}px" viewBox="0 0 {w:.0} {h:.0}" zoomAndPan="disable"><defs><style type="text/css">polygon {{ fill: {FILL_COLOR} }}</style></defs>"#,
            w = rect.width,
            h = rect.height,
        )?;
        Ok(Self { inner })
    }

    /// Writes the closing tag and hands back the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.write_all(b"</svg>")?;
        Ok(self.inner)
    }
}

impl<W: Write> TriangleSink for SvgWriter<W> {
    fn triangle(&mut self, vertices: [Point; 3], opacity: f64) -> io::Result<()> {
        let [a, b, c] = vertices;
        write!(
            self.inner,
            r#"<polygon points="{} {} {}" opacity="{:.3}" />"#,
            format_point(a),
            format_point(b),
            format_point(c),
            opacity.min(MAX_WRITTEN_OPACITY),
        )
    }
}

/// Formats a point as `x,y` with two decimal places.
pub fn format_point(p: Point) -> impl fmt::Display {
    PointDisplay(p)
}

struct PointDisplay(Point);

impl fmt::Display for PointDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2},{:.2}", self.0.x, self.0.y)
    }
}
