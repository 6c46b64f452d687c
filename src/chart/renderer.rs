//! The before/after comparison chart.

use super::surface::{Color, PaintSurface, TextSize};

pub const BACKGROUND: Color = Color::rgb(0x1a, 0x2d, 0x30);
pub const GRIDLINE: Color = Color::rgb(0xa8, 0xb5, 0xb3);
pub const CURRENT_BAR: Color = Color::rgb(0x5d, 0x8c, 0x87);
pub const IMPROVED_BAR: Color = Color::rgb(0x71, 0x8c, 0x56);
pub const VALUE_TEXT: Color = Color::rgb(0xf0, 0xf2, 0xf0);
pub const SHADOW: Color = Color::rgba(0, 0, 0, 0.3);

pub const CURRENT_CAPTION: &str = "Current";
pub const IMPROVED_CAPTION: &str = "After improvements";

const MARGIN: f64 = 40.0;
const BAR_WIDTH: f64 = 80.0;
const BAR_GAP: f64 = 20.0; // distance from the center line to each bar
const GRIDLINES: u32 = 5;
const LABEL_OFFSET: f64 = 8.0;

/// Projected score after improvements: the current score plus 35% of the
/// remaining gap to 100, rounded half-away-from-zero (`f64::round`) and
/// capped at 100. Purely illustrative.
pub fn improved_score(current: i64) -> i64 {
    let projected = current as f64 + (100.0 - current as f64) * 0.35;
    (projected.round() as i64).min(100)
}

/// Repaint the current-vs-improved comparison onto `surface`.
///
/// Pure with respect to `current_score`: the only effect is the command
/// sequence issued to the surface, and every call repaints from scratch.
/// Out-of-range scores draw as-is; the surface clips whatever falls
/// outside its bounds.
pub fn render_comparison(surface: &mut dyn PaintSurface, current_score: i64) {
    let width = surface.width();
    let height = surface.height();
    let plot_height = height - MARGIN * 2.0;
    let x1 = width / 2.0 - BAR_WIDTH - BAR_GAP;
    let x2 = width / 2.0 + BAR_GAP;
    let improved = improved_score(current_score);

    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, BACKGROUND);

    for i in 0..GRIDLINES {
        let y = MARGIN + (f64::from(i) / f64::from(GRIDLINES - 1)) * plot_height;
        surface.stroke_line(MARGIN, y, width - MARGIN, y, GRIDLINE, 1.0);
    }

    draw_bar(surface, x1, current_score, CURRENT_BAR, plot_height);
    draw_bar(surface, x2, improved, IMPROVED_BAR, plot_height);

    surface.fill_text(
        CURRENT_CAPTION,
        x1 + BAR_WIDTH / 2.0,
        height - LABEL_OFFSET,
        GRIDLINE,
        TextSize::Caption,
    );
    surface.fill_text(
        IMPROVED_CAPTION,
        x2 + BAR_WIDTH / 2.0,
        height - LABEL_OFFSET,
        GRIDLINE,
        TextSize::Caption,
    );
}

fn draw_bar(surface: &mut dyn PaintSurface, x: f64, value: i64, color: Color, plot_height: f64) {
    let height = surface.height();
    let bar_height = value as f64 / 100.0 * plot_height;
    let y = height - MARGIN - bar_height;

    surface.fill_rect(x + 2.0, y + 2.0, BAR_WIDTH, bar_height, SHADOW);
    surface.fill_rect(x, y, BAR_WIDTH, bar_height, color);
    surface.fill_text(
        &format!("{}/100", value),
        x + BAR_WIDTH / 2.0,
        y - LABEL_OFFSET,
        VALUE_TEXT,
        TextSize::Value,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{DrawOp, Recorder};

    #[test]
    fn test_improved_score_boundary_rounds_away_from_zero() {
        // 70 + 30 * 0.35 = 80.5 rounds to 81, not 80.
        assert_eq!(improved_score(70), 81);
    }

    #[test]
    fn test_improved_score_examples() {
        assert_eq!(improved_score(0), 35);
        assert_eq!(improved_score(100), 100);
        assert_eq!(improved_score(99), 99); // 99.35 rounds down
        assert_eq!(improved_score(95), 97); // 96.75 rounds up
    }

    #[test]
    fn test_improved_score_caps_at_100_for_out_of_range_input() {
        // An unclamped current score above 100 projects downward but
        // still caps at 100.
        assert_eq!(improved_score(120), 100);
    }

    #[test]
    fn test_render_clears_then_fills_background() {
        let mut surface = Recorder::new(600.0, 300.0);
        render_comparison(&mut surface, 70);

        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(
            surface.ops[1],
            DrawOp::FillRect {
                x: 0.0,
                y: 0.0,
                w: 600.0,
                h: 300.0,
                color: BACKGROUND,
            }
        );
    }

    #[test]
    fn test_render_draws_five_gridlines_between_margins() {
        let mut surface = Recorder::new(600.0, 300.0);
        render_comparison(&mut surface, 70);

        let gridlines: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeLine { x1, x2, y1, y2, .. } => Some((*x1, *x2, *y1, *y2)),
                _ => None,
            })
            .collect();
        assert_eq!(gridlines.len(), 5);
        for (x1, x2, y1, y2) in &gridlines {
            assert_eq!(*x1, 40.0);
            assert_eq!(*x2, 560.0);
            assert_eq!(y1, y2);
        }
        // Evenly spaced across the 220px plot area: 40, 95, 150, 205, 260.
        let ys: Vec<f64> = gridlines.iter().map(|g| g.2).collect();
        assert_eq!(ys, vec![40.0, 95.0, 150.0, 205.0, 260.0]);
    }

    #[test]
    fn test_render_draws_both_bars_with_shadows() {
        let mut surface = Recorder::new(600.0, 300.0);
        render_comparison(&mut surface, 70);

        let fills: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { x, color, .. } => Some((*x, *color)),
                _ => None,
            })
            .collect();
        // Background + 2 shadows + 2 bars.
        assert_eq!(fills.len(), 5);
        // Bars sit at w/2 - 100 and w/2 + 20, shadows offset by +2.
        assert!(fills.contains(&(200.0, CURRENT_BAR)));
        assert!(fills.contains(&(320.0, IMPROVED_BAR)));
        assert!(fills.contains(&(202.0, SHADOW)));
        assert!(fills.contains(&(322.0, SHADOW)));
    }

    #[test]
    fn test_render_labels_both_values_and_captions() {
        let mut surface = Recorder::new(600.0, 300.0);
        render_comparison(&mut surface, 70);

        let texts: Vec<&str> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec!["70/100", "81/100", CURRENT_CAPTION, IMPROVED_CAPTION]
        );
    }

    #[test]
    fn test_bar_geometry_scales_with_value() {
        let mut surface = Recorder::new(600.0, 300.0);
        render_comparison(&mut surface, 50);

        // plot height is 220; a score of 50 gives a 110px bar starting at
        // y = 300 - 40 - 110 = 150.
        let bar = surface.ops.iter().find_map(|op| match op {
            DrawOp::FillRect { y, h, color, .. } if *color == CURRENT_BAR => Some((*y, *h)),
            _ => None,
        });
        assert_eq!(bar, Some((150.0, 110.0)));
    }

    #[test]
    fn test_render_repaints_identically() {
        let mut a = Recorder::new(600.0, 300.0);
        let mut b = Recorder::new(600.0, 300.0);
        render_comparison(&mut a, 42);
        render_comparison(&mut b, 42);
        assert_eq!(a.ops, b.ops);
    }
}
