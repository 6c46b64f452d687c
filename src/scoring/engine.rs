use serde::Serialize;

use super::config::ScoringConfig;
use crate::readings::Readings;

/// One factor's contribution to the weighted sum.
#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Light", "Plants"
    pub normalized: f64,     // the factor on its 0-100 contribution scale
    pub weight: f64,
    pub contribution: f64, // normalized * weight
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    /// The unrounded weighted sum.
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: i64,
    pub breakdown: ScoreBreakdown,
}

/// Normalized plant contribution: each plant is worth 8 points,
/// saturating at 100 (12.5 plants). Negative counts clamp to zero.
fn plants_pct(plants: f64) -> f64 {
    (plants.max(0.0) * 8.0).min(100.0)
}

/// Inverted noise contribution: a quieter space scores higher.
fn noise_inv(noise: f64) -> f64 {
    100.0 - noise
}

/// Compute the wellness score for a set of readings.
///
/// The score is the weighted sum of the five normalized readings, rounded
/// half-away-from-zero (`f64::round`). It is a pure function of its
/// inputs: identical readings and config always yield identical results.
///
/// The result is NOT clamped to 0-100. Readings outside their documented
/// ranges push the score out of range rather than being masked; display
/// layers clamp for presentation only.
pub fn calculate_score(readings: &Readings, config: &ScoringConfig) -> ScoreResult {
    let weights = config.effective_weights();

    let rows = [
        ("Light", readings.light, weights.light),
        ("Air", readings.air, weights.air),
        ("Plants", plants_pct(readings.plants), weights.plants),
        ("Materials", readings.materials, weights.materials),
        ("Noise", noise_inv(readings.noise), weights.noise),
    ];

    let mut factors = Vec::with_capacity(rows.len());
    let mut total = 0.0;
    for (label, normalized, weight) in rows {
        let contribution = normalized * weight;
        total += contribution;
        factors.push(FactorContribution {
            label,
            normalized,
            weight,
            contribution,
        });
    }

    ScoreResult {
        score: total.round() as i64,
        breakdown: ScoreBreakdown { factors, total },
    }
}
