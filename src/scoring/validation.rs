use super::config::ScoringConfig;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        let named = [
            ("light", weights.light),
            ("air", weights.air),
            ("plants", weights.plants),
            ("materials", weights.materials),
            ("noise", weights.noise),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "scoring.weights.{}: must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
        let sum: f64 = named.iter().map(|(_, v)| v).sum();
        if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("scoring.weights: must sum to 1.0, got {}", sum));
        }
    }

    if let Some(ref thresholds) = config.thresholds {
        let scales = [
            ("low_light", thresholds.low_light),
            ("low_air", thresholds.low_air),
            ("low_materials", thresholds.low_materials),
            ("high_noise", thresholds.high_noise),
        ];
        for (name, value) in scales {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!(
                    "scoring.thresholds.{}: must be within 0-100, got {}",
                    name, value
                ));
            }
        }
        if !thresholds.min_plants.is_finite() || thresholds.min_plants < 0.0 {
            errors.push(format!(
                "scoring.thresholds.min_plants: must be non-negative, got {}",
                thresholds.min_plants
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::{Thresholds, Weights};

    #[test]
    fn test_empty_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_default_sections_are_valid() {
        let config = ScoringConfig {
            weights: Some(Weights::default()),
            thresholds: Some(Thresholds::default()),
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            weights: Some(Weights {
                light: 0.5,
                air: 0.26,
                plants: 0.18,
                materials: 0.14,
                noise: 0.14,
            }),
            thresholds: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must sum to 1.0"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = ScoringConfig {
            weights: Some(Weights {
                light: -0.28,
                air: 0.82,
                plants: 0.18,
                materials: 0.14,
                noise: 0.14,
            }),
            thresholds: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.weights.light"));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = ScoringConfig {
            weights: None,
            thresholds: Some(Thresholds {
                low_light: 150.0,
                ..Thresholds::default()
            }),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.thresholds.low_light"));
    }

    #[test]
    fn test_negative_min_plants_rejected() {
        let config = ScoringConfig {
            weights: None,
            thresholds: Some(Thresholds {
                min_plants: -1.0,
                ..Thresholds::default()
            }),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("min_plants"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            weights: Some(Weights {
                light: 0.5, // breaks the sum
                air: 0.26,
                plants: 0.18,
                materials: 0.14,
                noise: 0.14,
            }),
            thresholds: Some(Thresholds {
                high_noise: 200.0,
                ..Thresholds::default()
            }),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
