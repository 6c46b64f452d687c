//! The 2-D paint capability the chart renderer draws onto.

/// An RGBA color. `a` is an opacity in 0.0-1.0; the bar drop shadow is
/// the only translucent paint the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Text sizes the renderer distinguishes: the value labels above the bars
/// and the category captions under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Bar value labels ("74/100"). 14px in the reference rendering.
    Value,
    /// Category captions under the bars. 12px in the reference rendering.
    Caption,
}

/// Abstract 2-D drawing surface with a fixed pixel size.
///
/// The renderer's whole vocabulary is axis-aligned fills, straight
/// strokes, and centered text. Text is centered horizontally on `x`,
/// with `y` as its baseline.
pub trait PaintSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, line_width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, size: TextSize);
}

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        line_width: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        color: Color,
        size: TextSize,
    },
}

/// A surface that records every command instead of painting, so tests can
/// assert on the exact draw sequence.
#[derive(Debug)]
pub struct Recorder {
    width: f64,
    height: f64,
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl PaintSurface for Recorder {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, line_width: f64) {
        self.ops.push(DrawOp::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, size: TextSize) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            color,
            size,
        });
    }
}
