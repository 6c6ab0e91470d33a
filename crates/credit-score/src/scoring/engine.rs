use serde::Serialize;

use super::classification::Classification;
use super::inputs::CreditInputs;
use super::model::{ModelError, ScoreFactor, ScoringModel};

/// Stateless evaluator that applies an immutable [`ScoringModel`] to validated inputs.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    model: ScoringModel,
}

impl ScoringEngine {
    /// Builds an engine after checking the model invariants (weights summing to 1.0, positive
    /// caps).
    pub fn new(model: ScoringModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    /// Scores validated inputs. Total over every [`CreditInputs`] value.
    pub fn compute(&self, inputs: &CreditInputs) -> ComputationResult {
        let model = &self.model;

        let asset = self.score_factor(ScoreFactor::Asset, non_negative(inputs.total_asset_value));
        let salary = self.score_factor(ScoreFactor::Salary, non_negative(inputs.monthly_salary));
        let experience = self.score_factor(
            ScoreFactor::Experience,
            non_negative(inputs.work_experiences as f64),
        );

        let raw_score = model.base_score + asset.earned + salary.earned + experience.earned;
        let credit_score =
            round_half_even(raw_score.clamp(model.base_score, model.max_score()));
        let classification = model.classification.classify(credit_score, inputs.age);

        ComputationResult {
            credit_score,
            raw_score,
            classification,
            age: inputs.age,
            components: ScoreComponents {
                asset: asset.breakdown(),
                salary: salary.breakdown(),
                experience: experience.breakdown(),
            },
        }
    }

    fn score_factor(&self, factor: ScoreFactor, value: f64) -> FactorScore {
        let cap = self.model.caps.get(factor);
        let norm = (value / cap).min(1.0);
        let earned = norm * self.model.factor_points(factor);

        FactorScore {
            value,
            cap,
            norm,
            earned,
        }
    }
}

/// Everything derived from one scoring call; both tool responses project from this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    pub credit_score: i64,
    pub raw_score: f64,
    pub classification: Classification,
    pub age: u64,
    pub components: ScoreComponents,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub asset: FactorBreakdown,
    pub salary: FactorBreakdown,
    pub experience: FactorBreakdown,
}

impl ScoreComponents {
    pub fn get(&self, factor: ScoreFactor) -> &FactorBreakdown {
        match factor {
            ScoreFactor::Asset => &self.asset,
            ScoreFactor::Salary => &self.salary,
            ScoreFactor::Experience => &self.experience,
        }
    }
}

/// Display view of one factor. `norm` is rounded to 6 decimals and `points` to 2; the
/// unrounded values only feed `raw_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub value: f64,
    pub cap: f64,
    pub norm: f64,
    pub points: f64,
}

struct FactorScore {
    value: f64,
    cap: f64,
    norm: f64,
    earned: f64,
}

impl FactorScore {
    fn breakdown(&self) -> FactorBreakdown {
        FactorBreakdown {
            value: self.value,
            cap: self.cap,
            norm: round_to(self.norm, 6),
            points: round_to(self.earned, 2),
        }
    }
}

// Also folds -0.0 into 0.0.
fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds to the nearest integer, sending exact halves to the even neighbour (`504.5 -> 504`).
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Rounds to `digits` decimals, half to even on the exact value (`1.125 -> 1.12`).
///
/// Scaling can land on a spurious `.5`; the fused residual of the product tells which side of
/// the tie the exact value sits on.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    let residual = value.mul_add(scale, -scaled);
    let rounded = if scaled - scaled.floor() == 0.5 && residual != 0.0 {
        if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };

    rounded / scale
}
