use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Top-level configuration file schema.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub chart: Option<ChartConfig>,
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_chart(&self) -> ChartConfig {
        self.chart.clone().unwrap_or_default()
    }
}

/// Pixel dimensions of the chart drawing surface.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
        }
    }
}
