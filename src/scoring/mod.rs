pub mod cache;
pub mod config;
pub mod engine;
pub mod factors;
pub mod values;

pub use cache::ScoreCache;
pub use config::{Weights, WEIGHTS};
pub use engine::{
    compare, factor_scores, overall_score, round1, Category, Direction, FactorScore, ImpactEntry,
    ScenarioResult,
};
pub use factors::{normalize, Factor, NEUTRAL_SCORE};
pub use values::FactorValues;
