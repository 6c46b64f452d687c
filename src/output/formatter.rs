use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::chart::improved_score;
use crate::readings::Readings;
use crate::scoring::{ScoreBreakdown, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Default chart width in columns: the terminal width minus a small
/// margin, bounded so the bar captions never collide; 72 for pipes.
pub fn default_chart_columns() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).saturating_sub(2).clamp(66, 100),
        None => 72,
    }
}

/// Proportional score bar of `width` cells.
/// The fill is clamped to 0-100 for display; the numeric score is not.
pub fn score_bar(score: i64, width: usize) -> String {
    let clamped = score.clamp(0, 100) as usize;
    let filled = (clamped * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

fn score_band(score: i64) -> u8 {
    if score >= 70 {
        2
    } else if score >= 40 {
        1
    } else {
        0
    }
}

/// Format the score, its bar, the readings line, and the numbered
/// recommendation list.
pub fn format_score_summary(
    readings: &Readings,
    result: &ScoreResult,
    recommendations: &[String],
    use_colors: bool,
) -> String {
    let bar = score_bar(result.score, 24);
    let improved = improved_score(result.score);
    let mut lines = Vec::new();

    if use_colors {
        let score_str = format!("{}/100", result.score);
        let colored_score = match score_band(result.score) {
            2 => score_str.green().bold().to_string(),
            1 => score_str.yellow().bold().to_string(),
            _ => score_str.red().bold().to_string(),
        };
        lines.push(format!("Wellness score: {}  {}", colored_score, bar.dimmed()));
        lines.push(format!(
            "Projected after improvements: {}",
            format!("{}/100", improved).bold()
        ));
        lines.push(String::new());
        lines.push(format!(
            "Readings: light {} · air {} · plants {} · materials {} · noise {}",
            readings.light.cyan(),
            readings.air.cyan(),
            readings.plants.cyan(),
            readings.materials.cyan(),
            readings.noise.cyan()
        ));
        lines.push(String::new());
        lines.push("Recommendations:".bold().to_string());
        for (i, rec) in recommendations.iter().enumerate() {
            lines.push(format!("  {} {}", format!("{}.", i + 1).dimmed(), rec));
        }
    } else {
        lines.push(format!("Wellness score: {}/100  {}", result.score, bar));
        lines.push(format!("Projected after improvements: {}/100", improved));
        lines.push(String::new());
        lines.push(format!(
            "Readings: light {} · air {} · plants {} · materials {} · noise {}",
            readings.light, readings.air, readings.plants, readings.materials, readings.noise
        ));
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        for (i, rec) in recommendations.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, rec));
        }
    }

    lines.join("\n")
}

/// Format the per-factor breakdown table (verbose mode).
pub fn format_breakdown(breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let mut lines = vec!["Breakdown:".to_string()];
    for factor in &breakdown.factors {
        let line = format!(
            "  {:<10} {:>6.1} x {:.2} = {:>6.2}",
            factor.label, factor.normalized, factor.weight, factor.contribution
        );
        if use_colors {
            lines.push(line.dimmed().to_string());
        } else {
            lines.push(line);
        }
    }
    lines.push(format!(
        "  {:<10} {:>24.2}",
        "Total", breakdown.total
    ));
    lines.join("\n")
}

/// Machine-readable report for `--json`.
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub readings: &'a Readings,
    pub score: i64,
    pub improved_score: i64,
    pub breakdown: &'a ScoreBreakdown,
    pub recommendations: &'a [String],
}

impl<'a> ScoreReport<'a> {
    pub fn new(
        readings: &'a Readings,
        result: &'a ScoreResult,
        recommendations: &'a [String],
    ) -> Self {
        Self {
            readings,
            score: result.score,
            improved_score: improved_score(result.score),
            breakdown: &result.breakdown,
            recommendations,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{build_recommendations, calculate_score, ScoringConfig, Thresholds};

    fn sample() -> (Readings, ScoreResult, Vec<String>) {
        let readings = Readings::new(70.0, 80.0, 4.0, 60.0, 30.0);
        let result = calculate_score(&readings, &ScoringConfig::default());
        let recs = build_recommendations(&readings, &Thresholds::default());
        (readings, result, recs)
    }

    #[test]
    fn test_score_bar_extremes() {
        assert_eq!(score_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(score_bar(100, 10), "██████████");
        assert_eq!(score_bar(50, 10), "█████░░░░░");
    }

    #[test]
    fn test_score_bar_clamps_display_only() {
        assert_eq!(score_bar(140, 10), score_bar(100, 10));
        assert_eq!(score_bar(-20, 10), score_bar(0, 10));
    }

    #[test]
    fn test_summary_contains_score_and_recommendations() {
        let (readings, result, recs) = sample();
        let out = format_score_summary(&readings, &result, &recs, false);
        assert!(out.contains(&format!("Wellness score: {}/100", result.score)));
        assert!(out.contains("Recommendations:"));
        assert!(out.contains("1."));
        assert!(out.contains(&recs[0]));
    }

    #[test]
    fn test_summary_lists_every_recommendation() {
        let readings = Readings::new(0.0, 0.0, 0.0, 0.0, 100.0);
        let result = calculate_score(&readings, &ScoringConfig::default());
        let recs = build_recommendations(&readings, &Thresholds::default());
        let out = format_score_summary(&readings, &result, &recs, false);
        for rec in &recs {
            assert!(out.contains(rec));
        }
        assert!(out.contains("5."));
    }

    #[test]
    fn test_breakdown_lists_factors_and_total() {
        let (_, result, _) = sample();
        let out = format_breakdown(&result.breakdown, false);
        assert!(out.contains("Light"));
        assert!(out.contains("Noise"));
        assert!(out.contains("Total"));
    }

    #[test]
    fn test_json_report_shape() {
        let (readings, result, recs) = sample();
        let report = ScoreReport::new(&readings, &result, &recs);
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], serde_json::json!(result.score));
        assert_eq!(value["readings"]["light"], serde_json::json!(70.0));
        assert_eq!(value["breakdown"]["factors"].as_array().unwrap().len(), 5);
        assert!(value["recommendations"].as_array().unwrap().len() >= 1);
        assert_eq!(
            value["improved_score"],
            serde_json::json!(improved_score(result.score))
        );
    }
}
