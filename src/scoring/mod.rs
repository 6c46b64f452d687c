pub mod config;
pub mod engine;
pub mod recommendations;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult};
pub use recommendations::build_recommendations;
pub use validation::validate_scoring;
