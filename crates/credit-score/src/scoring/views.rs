use serde::Serialize;

use super::classification::Classification;
use super::engine::{ComputationResult, ScoreComponents};
use super::inputs::InvalidInputError;
use super::model::{ScoreCaps, ScoreWeights, ScoringModel};

pub const INVALID_INPUT: &str = "invalid_input";

/// Tool reply: either the success payload or the error shape, never a transport fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResponse<T> {
    Success(T),
    Error(ToolError),
}

impl<T> ToolResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResponse::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolError {
    pub error: &'static str,
    pub details: String,
}

impl From<&InvalidInputError> for ToolError {
    fn from(err: &InvalidInputError) -> Self {
        Self {
            error: INVALID_INPUT,
            details: err.to_string(),
        }
    }
}

/// `classify_customer` success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifyCustomerView {
    pub credit_score: i64,
    pub classification: Classification,
    pub reasons: ClassificationReasons,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReasons {
    pub credit_scoring: CreditScoringReasons,
    pub classification: ClassificationRationale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditScoringReasons {
    pub base: f64,
    pub components: ComponentScores,
    pub normalization: NormalizationView,
    pub weights: ScoreWeights,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub asset_score: f64,
    pub salary_score: f64,
    pub experience_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizationView {
    pub asset_norm: f64,
    pub salary_norm: f64,
    pub experience_norm: f64,
    pub caps: ScoreCaps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationRationale {
    pub rule: String,
    pub age: u64,
    pub reason: &'static str,
}

impl ClassifyCustomerView {
    pub fn project(result: &ComputationResult, model: &ScoringModel) -> Self {
        let components = &result.components;

        Self {
            credit_score: result.credit_score,
            classification: result.classification,
            reasons: ClassificationReasons {
                credit_scoring: CreditScoringReasons {
                    base: model.base_score,
                    components: ComponentScores {
                        asset_score: components.asset.points,
                        salary_score: components.salary.points,
                        experience_score: components.experience.points,
                    },
                    normalization: NormalizationView {
                        asset_norm: components.asset.norm,
                        salary_norm: components.salary.norm,
                        experience_norm: components.experience.norm,
                        caps: model.caps,
                    },
                    weights: model.weights,
                    explanation: scoring_explanation(model),
                },
                classification: ClassificationRationale {
                    rule: model.classification.rule_description(),
                    age: result.age,
                    reason: result.classification.reason(),
                },
            },
        }
    }
}

/// `score_breakdown` success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdownView {
    pub credit_score: i64,
    pub raw_score: f64,
    pub components: ScoreComponents,
    pub weights: ScoreWeights,
    pub base: f64,
    pub bonus_pool: f64,
}

impl ScoreBreakdownView {
    pub fn project(result: &ComputationResult, model: &ScoringModel) -> Self {
        Self {
            credit_score: result.credit_score,
            raw_score: result.raw_score,
            components: result.components,
            weights: model.weights,
            base: model.base_score,
            bonus_pool: model.bonus_pool,
        }
    }
}

/// One-line formula summary, e.g.
/// `Điểm = 500.0 + (tài sản 50% + lương 30% + kinh nghiệm 20%) của 300.0 điểm bonus.`
pub fn scoring_explanation(model: &ScoringModel) -> String {
    let percent = |weight: f64| (weight * 100.0).trunc() as i64;

    format!(
        "Điểm = {:?} + (tài sản {}% + lương {}% + kinh nghiệm {}%) của {:?} điểm bonus.",
        model.base_score,
        percent(model.weights.asset),
        percent(model.weights.salary),
        percent(model.weights.experience),
        model.bonus_pool
    )
}
