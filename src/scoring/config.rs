use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Controls the factor weights of the weighted sum and the thresholds of
/// the recommendation rules. Both sections are optional and fall back to
/// the built-in defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     light: 0.28
///     air: 0.26
///     plants: 0.18
///     materials: 0.14
///     noise: 0.14
///   thresholds:
///     low_light: 60
///     high_noise: 40
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Factor weights. Must be non-negative and sum to 1.0.
    #[serde(default)]
    pub weights: Option<Weights>,

    /// Thresholds for the recommendation rules.
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

impl ScoringConfig {
    pub fn effective_weights(&self) -> Weights {
        self.weights.clone().unwrap_or_default()
    }

    pub fn effective_thresholds(&self) -> Thresholds {
        self.thresholds.clone().unwrap_or_default()
    }
}

/// Factor weights for the weighted sum.
///
/// The defaults follow the biophilic-design weighting of the five
/// readings and sum to exactly 1.0. Partial overrides inherit the
/// remaining defaults, so a partial set that breaks the sum is caught by
/// validation rather than silently renormalized.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Weights {
    pub light: f64,
    pub air: f64,
    pub plants: f64,
    pub materials: f64,
    pub noise: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            light: 0.28,
            air: 0.26,
            plants: 0.18,
            materials: 0.14,
            noise: 0.14,
        }
    }
}

/// Thresholds for the recommendation rules.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Thresholds {
    /// A light reading below this suggests more natural light.
    pub low_light: f64,

    /// An air reading below this suggests better ventilation.
    pub low_air: f64,

    /// A plant count below this suggests adding plants.
    pub min_plants: f64,

    /// A materials reading below this suggests natural materials.
    pub low_materials: f64,

    /// A noise reading above this suggests acoustic treatment.
    pub high_noise: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_light: 60.0,
            low_air: 60.0,
            min_plants: 6.0,
            low_materials: 50.0,
            high_noise: 40.0,
        }
    }
}
