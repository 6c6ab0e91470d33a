//! Credit scoring core: input sanitization, the scoring engine, and the two tool projections.

mod classification;
mod engine;
pub mod inputs;
mod model;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use classification::{Classification, ClassificationPolicy};
pub use engine::{
    round_half_even, ComputationResult, FactorBreakdown, ScoreComponents, ScoringEngine,
};
pub use inputs::{sanitize, CreditInputs, InvalidInputError};
pub use model::{
    ModelError, ScoreCaps, ScoreFactor, ScoreWeights, ScoringModel, ASSET_CAP, BASE_SCORE,
    BONUS_POOL, EXPERIENCE_CAP, SALARY_CAP,
};
pub use router::scoring_router;
pub use service::{CreditScoringService, ScoringTool, ToolDescriptor};
pub use views::{ClassifyCustomerView, ScoreBreakdownView, ToolError, ToolResponse};
