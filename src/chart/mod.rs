pub mod renderer;
pub mod surface;
pub mod text;

pub use renderer::{improved_score, render_comparison};
pub use surface::{Color, DrawOp, PaintSurface, Recorder, TextSize};
pub use text::TextCanvas;
