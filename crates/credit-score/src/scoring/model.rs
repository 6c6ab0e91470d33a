use serde::{Deserialize, Serialize};

use super::classification::ClassificationPolicy;

pub const ASSET_CAP: f64 = 10_000_000_000.0;
pub const SALARY_CAP: f64 = 200_000_000.0;
pub const EXPERIENCE_CAP: f64 = 40.0;
pub const BASE_SCORE: f64 = 500.0;
pub const BONUS_POOL: f64 = 300.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// The three inputs that earn points. Age only gates classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Asset,
    Salary,
    Experience,
}

impl ScoreFactor {
    pub const ALL: [ScoreFactor; 3] = [Self::Asset, Self::Salary, Self::Experience];

    pub fn key(&self) -> &'static str {
        match self {
            ScoreFactor::Asset => "asset",
            ScoreFactor::Salary => "salary",
            ScoreFactor::Experience => "experience",
        }
    }
}

/// Saturation points used to normalize each factor into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCaps {
    pub asset_cap: f64,
    pub salary_cap: f64,
    pub experience_cap: f64,
}

impl ScoreCaps {
    pub fn get(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::Asset => self.asset_cap,
            ScoreFactor::Salary => self.salary_cap,
            ScoreFactor::Experience => self.experience_cap,
        }
    }
}

/// Share of the bonus pool each factor can earn at saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub asset: f64,
    pub salary: f64,
    pub experience: f64,
}

impl ScoreWeights {
    pub fn get(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::Asset => self.asset,
            ScoreFactor::Salary => self.salary,
            ScoreFactor::Experience => self.experience,
        }
    }

    pub fn total(&self) -> f64 {
        self.asset + self.salary + self.experience
    }
}

/// Immutable scoring configuration, built once at startup and handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringModel {
    pub caps: ScoreCaps,
    pub weights: ScoreWeights,
    pub base_score: f64,
    pub bonus_pool: f64,
    pub classification: ClassificationPolicy,
}

impl ScoringModel {
    /// Process-wide defaults used by the tools.
    pub fn standard() -> Self {
        Self {
            caps: ScoreCaps {
                asset_cap: ASSET_CAP,
                salary_cap: SALARY_CAP,
                experience_cap: EXPERIENCE_CAP,
            },
            weights: ScoreWeights {
                asset: 0.5,
                salary: 0.3,
                experience: 0.2,
            },
            base_score: BASE_SCORE,
            bonus_pool: BONUS_POOL,
            classification: ClassificationPolicy::standard(),
        }
    }

    /// Upper end of the output range.
    pub fn max_score(&self) -> f64 {
        self.base_score + self.bonus_pool
    }

    /// Maximum points a factor can contribute.
    pub fn factor_points(&self, factor: ScoreFactor) -> f64 {
        self.bonus_pool * self.weights.get(factor)
    }

    /// Checks the invariants the engine relies on to stay within `[base, base + bonus]`.
    pub fn validate(&self) -> Result<(), ModelError> {
        for factor in ScoreFactor::ALL {
            let weight = self.weights.get(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ModelError::InvalidWeight {
                    factor: factor.key(),
                    value: weight,
                });
            }

            let cap = self.caps.get(factor);
            if !cap.is_finite() || cap <= 0.0 {
                return Err(ModelError::InvalidCap {
                    factor: factor.key(),
                    value: cap,
                });
            }
        }

        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ModelError::WeightSum { total });
        }

        if !self.base_score.is_finite() {
            return Err(ModelError::InvalidBaseScore(self.base_score));
        }
        if !self.bonus_pool.is_finite() || self.bonus_pool < 0.0 {
            return Err(ModelError::InvalidBonusPool(self.bonus_pool));
        }

        Ok(())
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Raised when a scoring model would let scores drift outside the advertised range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("score weights must sum to 1.0, got {total}")]
    WeightSum { total: f64 },
    #[error("weight for {factor} must be a finite non-negative fraction, got {value}")]
    InvalidWeight { factor: &'static str, value: f64 },
    #[error("cap for {factor} must be finite and positive, got {value}")]
    InvalidCap { factor: &'static str, value: f64 },
    #[error("base score must be finite, got {0}")]
    InvalidBaseScore(f64),
    #[error("bonus pool must be finite and non-negative, got {0}")]
    InvalidBonusPool(f64),
}
