//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }
}

/// Detect the terminal background and pick a palette.
/// Falls back to dark when detection fails (pipes, unsupported terminals).
pub fn resolve_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score-based colors (traffic light pattern; high wellness is good)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,

    // Field bar colors
    pub bar_filled: Color,
    pub bar_empty: Color,

    // Styles
    pub title_style: Style,
    pub header_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_color: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            bar_filled: Color::Cyan,
            bar_empty: Color::DarkGray,
            title_style: Style::new().bold(),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_color: Color::Green,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    /// Light theme palette
    pub fn light() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Indexed(130),
            score_low: Color::Red,
            bar_filled: Color::Blue,
            bar_empty: Color::Indexed(250),
            title_style: Style::new().bold(),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_color: Color::Indexed(28),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    /// Returns the appropriate color for a 0-100 wellness score.
    pub fn score_color(&self, score: i64) -> Color {
        if score >= 70 {
            self.score_high
        } else if score >= 40 {
            self.score_mid
        } else {
            self.score_low
        }
    }
}
