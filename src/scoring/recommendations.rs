use super::config::Thresholds;
use crate::readings::Readings;

/// Build the ordered recommendation list for a set of readings.
///
/// Rules are independent and evaluated in a fixed order (light, air,
/// plants, materials, noise); several can fire at once. When none fires,
/// the single fallback message is returned, so the list is never empty.
pub fn build_recommendations(readings: &Readings, thresholds: &Thresholds) -> Vec<String> {
    let mut recs = Vec::new();

    if readings.light < thresholds.low_light {
        recs.push(
            "Increase natural light: make use of windows, skylights, or reflective surfaces."
                .to_string(),
        );
    }
    if readings.air < thresholds.low_air {
        recs.push(
            "Improve ventilation: cross-airflow, exhaust fans, or air-purifying plants."
                .to_string(),
        );
    }
    if readings.plants.max(0.0) < thresholds.min_plants {
        recs.push(
            "Add more plants spread around the space to reduce stress and soften noise."
                .to_string(),
        );
    }
    if readings.materials < thresholds.low_materials {
        recs.push(
            "Bring in natural materials: exposed wood, stone, fibers, and textured fabrics."
                .to_string(),
        );
    }
    if readings.noise > thresholds.high_noise {
        recs.push("Treat the noise: acoustic panels, rugs, curtains, and door seals.".to_string());
    }

    if recs.is_empty() {
        recs.push("Well-balanced space. Keep up the maintenance and re-check seasonally.".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recs(light: f64, air: f64, plants: f64, materials: f64, noise: f64) -> Vec<String> {
        let readings = Readings::new(light, air, plants, materials, noise);
        build_recommendations(&readings, &Thresholds::default())
    }

    #[test]
    fn test_balanced_space_gets_only_fallback() {
        let list = recs(70.0, 70.0, 6.0, 60.0, 30.0);
        assert_eq!(list.len(), 1);
        assert!(list[0].contains("Well-balanced"));
    }

    #[test]
    fn test_worst_case_fires_all_five_rules() {
        let list = recs(0.0, 0.0, 0.0, 0.0, 100.0);
        assert_eq!(list.len(), 5);
        assert!(!list.iter().any(|r| r.contains("Well-balanced")));
    }

    #[test]
    fn test_rules_fire_in_fixed_order() {
        // Only light and noise are out of range; light's message comes first.
        let list = recs(10.0, 70.0, 8.0, 60.0, 90.0);
        assert_eq!(list.len(), 2);
        assert!(list[0].contains("natural light"));
        assert!(list[1].contains("noise"));
    }

    #[test]
    fn test_thresholds_are_strict_comparisons() {
        // Values sitting exactly on a threshold do not fire the rule.
        assert_eq!(recs(60.0, 60.0, 6.0, 50.0, 40.0).len(), 1);
        // One step past each threshold fires all five.
        assert_eq!(recs(59.9, 59.9, 5.9, 49.9, 40.1).len(), 5);
    }

    #[test]
    fn test_negative_plants_counted_as_zero() {
        let readings = Readings {
            light: 70.0,
            air: 70.0,
            plants: -2.0,
            materials: 60.0,
            noise: 30.0,
        };
        let list = build_recommendations(&readings, &Thresholds::default());
        assert_eq!(list.len(), 1);
        assert!(list[0].contains("plants"));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            low_light: 90.0,
            ..Thresholds::default()
        };
        let readings = Readings::new(80.0, 70.0, 8.0, 60.0, 30.0);
        let list = build_recommendations(&readings, &thresholds);
        assert_eq!(list.len(), 1);
        assert!(list[0].contains("natural light"));
    }
}
