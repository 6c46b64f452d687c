//! Character-cell rasterizer for the comparison chart.
//!
//! Backs both the plain CLI chart output (as truecolor ANSI) and the TUI
//! chart panel (which restyles the cell grid as ratatui spans).

use owo_colors::OwoColorize;

use super::surface::{Color, PaintSurface, TextSize};

/// One character cell of the raster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Overlaid text glyph, if any.
    pub ch: Option<char>,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// A `PaintSurface` that rasterizes into a terminal character grid.
///
/// Pixel coordinates are scaled onto `columns x rows` cells; `new`
/// derives the row count from the pixel aspect ratio at the ~2:1
/// height:width shape of a terminal cell. Paint outside the grid is
/// clipped.
pub struct TextCanvas {
    px_width: f64,
    px_height: f64,
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl TextCanvas {
    pub fn new(px_width: f64, px_height: f64, columns: usize) -> Self {
        let columns = columns.max(16);
        let rows = ((px_height / px_width) * columns as f64 / 2.0).round().max(4.0) as usize;
        Self::with_grid(px_width, px_height, columns, rows)
    }

    /// Rasterize onto an explicit cell grid, e.g. to fill a TUI pane.
    pub fn with_grid(px_width: f64, px_height: f64, columns: usize, rows: usize) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            px_width,
            px_height,
            columns,
            rows,
            cells: vec![Cell::default(); columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, column: usize, row: usize) -> &Cell {
        &self.cells[row * self.columns + column]
    }

    fn column_at(&self, x: f64) -> isize {
        (x / self.px_width * self.columns as f64).floor() as isize
    }

    fn row_at(&self, y: f64) -> isize {
        (y / self.px_height * self.rows as f64).floor() as isize
    }

    fn paint(&mut self, column: isize, row: isize, apply: impl FnOnce(&mut Cell)) {
        if column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
        {
            apply(&mut self.cells[row as usize * self.columns + column as usize]);
        }
    }

    /// Render the grid as ANSI text, one line per row. With colors off,
    /// backgrounds degrade to luminance shade characters.
    pub fn render_ansi(&self, use_colors: bool) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = self.cell(column, row);
                if use_colors {
                    out.push_str(&styled_cell(cell));
                } else {
                    out.push(plain_cell(cell));
                }
            }
            out.push('\n');
        }
        out
    }
}

fn styled_cell(cell: &Cell) -> String {
    let ch = cell.ch.unwrap_or(' ');
    match (cell.fg, cell.bg) {
        (Some(fg), Some(bg)) => format!(
            "{}",
            ch.truecolor(fg.r, fg.g, fg.b).on_truecolor(bg.r, bg.g, bg.b)
        ),
        (Some(fg), None) => format!("{}", ch.truecolor(fg.r, fg.g, fg.b)),
        (None, Some(bg)) => format!("{}", ch.on_truecolor(bg.r, bg.g, bg.b)),
        (None, None) => ch.to_string(),
    }
}

fn plain_cell(cell: &Cell) -> char {
    if let Some(ch) = cell.ch {
        ch
    } else if let Some(bg) = cell.bg {
        shade(bg)
    } else {
        ' '
    }
}

/// Map a background color to a shade character by relative luminance, so
/// monochrome output still shows the bars against the backdrop.
fn shade(color: Color) -> char {
    let luma =
        0.2126 * f64::from(color.r) + 0.7152 * f64::from(color.g) + 0.0722 * f64::from(color.b);
    if luma < 48.0 {
        ' '
    } else if luma < 112.0 {
        '░'
    } else if luma < 176.0 {
        '▒'
    } else {
        '▓'
    }
}

fn blend(under: Option<Color>, over: Color) -> Color {
    if over.a >= 1.0 {
        return over;
    }
    let under = under.unwrap_or(Color::rgb(0, 0, 0));
    let mix = |o: u8, u: u8| {
        (f64::from(o) * over.a + f64::from(u) * (1.0 - over.a)).round() as u8
    };
    Color::rgb(
        mix(over.r, under.r),
        mix(over.g, under.g),
        mix(over.b, under.b),
    )
}

impl PaintSurface for TextCanvas {
    fn width(&self) -> f64 {
        self.px_width
    }

    fn height(&self) -> f64 {
        self.px_height
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        for row in 0..self.rows {
            let cy = (row as f64 + 0.5) / self.rows as f64 * self.px_height;
            if cy < y || cy >= y + h {
                continue;
            }
            for column in 0..self.columns {
                let cx = (column as f64 + 0.5) / self.columns as f64 * self.px_width;
                if cx >= x && cx < x + w {
                    let cell = &mut self.cells[row * self.columns + column];
                    cell.bg = Some(blend(cell.bg, color));
                    // a fill covers any glyph beneath it
                    cell.ch = None;
                }
            }
        }
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, _line_width: f64) {
        if y1 == y2 {
            let row = self.row_at(y1);
            let (from, to) = (self.column_at(x1.min(x2)), self.column_at(x1.max(x2)));
            for column in from..=to {
                self.paint(column, row, |cell| {
                    cell.ch = Some('─');
                    cell.fg = Some(color);
                });
            }
        } else if x1 == x2 {
            let column = self.column_at(x1);
            let (from, to) = (self.row_at(y1.min(y2)), self.row_at(y1.max(y2)));
            for row in from..=to {
                self.paint(column, row, |cell| {
                    cell.ch = Some('│');
                    cell.fg = Some(color);
                });
            }
        }
        // Diagonals are not part of the renderer's vocabulary.
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color, _size: TextSize) {
        let row = self.row_at(y);
        let chars: Vec<char> = text.chars().collect();
        let start = self.column_at(x) - (chars.len() as isize) / 2;
        for (i, ch) in chars.into_iter().enumerate() {
            self.paint(start + i as isize, row, |cell| {
                cell.ch = Some(ch);
                cell.fg = Some(color);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::renderer::{self, render_comparison};

    #[test]
    fn test_rows_follow_pixel_aspect() {
        let canvas = TextCanvas::new(600.0, 300.0, 60);
        assert_eq!(canvas.columns(), 60);
        assert_eq!(canvas.rows(), 15);
    }

    #[test]
    fn test_fill_rect_paints_cell_backgrounds() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        let red = Color::rgb(200, 0, 0);
        canvas.fill_rect(0.0, 0.0, 50.0, 50.0, red);

        assert_eq!(canvas.cell(0, 0).bg, Some(red));
        assert_eq!(canvas.cell(4, 4).bg, Some(red));
        assert_eq!(canvas.cell(5, 5).bg, None);
    }

    #[test]
    fn test_fill_rect_out_of_bounds_is_clipped() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        canvas.fill_rect(-50.0, -50.0, 500.0, 500.0, Color::rgb(1, 2, 3));
        canvas.fill_rect(90.0, 90.0, 0.0, -10.0, Color::rgb(9, 9, 9));
        assert_eq!(canvas.cell(9, 9).bg, Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_translucent_fill_blends_with_background() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        canvas.fill_rect(0.0, 0.0, 100.0, 100.0, Color::rgb(100, 100, 100));
        canvas.fill_rect(0.0, 0.0, 100.0, 100.0, Color::rgba(0, 0, 0, 0.3));
        assert_eq!(canvas.cell(0, 0).bg, Some(Color::rgb(70, 70, 70)));
    }

    #[test]
    fn test_horizontal_stroke_draws_line_glyphs() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        canvas.stroke_line(0.0, 55.0, 99.0, 55.0, Color::rgb(7, 7, 7), 1.0);
        assert_eq!(canvas.cell(0, 5).ch, Some('─'));
        assert_eq!(canvas.cell(9, 5).ch, Some('─'));
        assert_eq!(canvas.cell(0, 4).ch, None);
    }

    #[test]
    fn test_text_is_centered_on_x() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        canvas.fill_text("abc", 50.0, 15.0, Color::rgb(1, 1, 1), TextSize::Value);
        assert_eq!(canvas.cell(4, 1).ch, Some('a'));
        assert_eq!(canvas.cell(5, 1).ch, Some('b'));
        assert_eq!(canvas.cell(6, 1).ch, Some('c'));
    }

    #[test]
    fn test_text_clips_at_grid_edge() {
        let mut canvas = TextCanvas::with_grid(100.0, 100.0, 10, 10);
        canvas.fill_text("wide label", 0.0, 15.0, Color::rgb(1, 1, 1), TextSize::Caption);
        // Only the tail that lands inside the grid is kept.
        assert!(canvas.cell(0, 1).ch.is_some());
    }

    #[test]
    fn test_comparison_chart_rasterizes_labels_and_bars() {
        let mut canvas = TextCanvas::new(600.0, 300.0, 72);
        render_comparison(&mut canvas, 70);
        let plain = canvas.render_ansi(false);

        assert!(plain.contains("70/100"));
        assert!(plain.contains("81/100"));
        assert!(plain.contains(renderer::CURRENT_CAPTION));
        assert!(plain.contains('─'));
        // Both bars shade as mid-luminance blocks in monochrome output.
        assert!(plain.contains('▒'));
    }

    #[test]
    fn test_colored_output_carries_ansi_escapes() {
        let mut canvas = TextCanvas::new(600.0, 300.0, 72);
        render_comparison(&mut canvas, 70);
        let colored = canvas.render_ansi(true);
        assert!(colored.contains("\x1b["));
    }
}
