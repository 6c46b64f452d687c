use std::time::{Duration, Instant};

use crate::chart::improved_score;
use crate::config::Config;
use crate::readings::Readings;
use crate::scoring::{
    build_recommendations, calculate_score, ScoreResult, ScoringConfig, Thresholds,
};

const FLASH_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Light,
    Air,
    Plants,
    Materials,
    Noise,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Light,
        Field::Air,
        Field::Plants,
        Field::Materials,
        Field::Noise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Light => "Light",
            Field::Air => "Air",
            Field::Plants => "Plants",
            Field::Materials => "Materials",
            Field::Noise => "Noise",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    Breakdown,
}

pub struct App {
    pub readings: Readings,
    pub selected: usize,
    pub score: ScoreResult,
    pub recommendations: Vec<String>,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub config: Config,
    scoring: ScoringConfig,
    thresholds: Thresholds,
}

impl App {
    pub fn new(readings: Readings, config: Config) -> Self {
        let scoring = config.effective_scoring();
        let thresholds = scoring.effective_thresholds();
        let score = calculate_score(&readings, &scoring);
        let recommendations = build_recommendations(&readings, &thresholds);
        Self {
            readings,
            selected: 0,
            score,
            recommendations,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            config,
            scoring,
            thresholds,
        }
    }

    /// Rebuild score and recommendations from the readings. Called after
    /// every edit; the whole result is recomputed, nothing is cached.
    fn recompute(&mut self) {
        self.score = calculate_score(&self.readings, &self.scoring);
        self.recommendations = build_recommendations(&self.readings, &self.thresholds);
    }

    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    pub fn previous_field(&mut self) {
        self.selected = if self.selected == 0 {
            Field::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn field_value(&self, field: Field) -> f64 {
        match field {
            Field::Light => self.readings.light,
            Field::Air => self.readings.air,
            Field::Plants => self.readings.plants,
            Field::Materials => self.readings.materials,
            Field::Noise => self.readings.noise,
        }
    }

    fn set_field(&mut self, field: Field, value: f64) {
        match field {
            Field::Light => self.readings.light = value,
            Field::Air => self.readings.air = value,
            Field::Plants => self.readings.plants = value,
            Field::Materials => self.readings.materials = value,
            Field::Noise => self.readings.noise = value,
        }
        self.recompute();
    }

    /// Adjust the selected field by `delta`, clamping to its domain:
    /// the four scale readings stay within 0-100, plants stays
    /// non-negative with no upper bound.
    pub fn adjust_selected(&mut self, delta: f64) {
        let field = self.selected_field();
        let value = self.field_value(field) + delta;
        let value = match field {
            Field::Plants => value.max(0.0),
            _ => value.clamp(0.0, 100.0),
        };
        self.set_field(field, value);
    }

    pub fn reset_selected(&mut self) {
        self.set_field(self.selected_field(), 0.0);
    }

    pub fn reset_all(&mut self) {
        self.readings = Readings::default();
        self.recompute();
    }

    pub fn improved(&self) -> i64 {
        improved_score(self.score.score)
    }

    pub fn show_flash(&mut self, message: String) {
        self.flash_message = Some((message, Instant::now()));
    }

    /// Expire the flash message after its display duration.
    pub fn update_flash(&mut self) {
        if let Some((_, shown_at)) = &self.flash_message {
            if shown_at.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_breakdown(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Breakdown => InputMode::Normal,
            _ => InputMode::Breakdown,
        };
    }
}
