use serde_json::{json, Value};

use crate::scoring::{
    ClassificationPolicy, CreditInputs, CreditScoringService, ScoreCaps, ScoreWeights,
    ScoringEngine, ScoringModel,
};

pub(super) fn standard_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringModel::standard()).expect("standard model is valid")
}

pub(super) fn standard_service() -> CreditScoringService {
    CreditScoringService::new(ScoringModel::standard()).expect("standard model is valid")
}

/// Small round-number model so expected scores are exact.
pub(super) fn compact_model() -> ScoringModel {
    ScoringModel {
        caps: ScoreCaps {
            asset_cap: 1_000.0,
            salary_cap: 100.0,
            experience_cap: 10.0,
        },
        weights: ScoreWeights {
            asset: 0.5,
            salary: 0.25,
            experience: 0.25,
        },
        base_score: 100.0,
        bonus_pool: 100.0,
        classification: ClassificationPolicy::standard(),
    }
}

pub(super) fn inputs(asset: f64, salary: f64, experience: u64, age: u64) -> CreditInputs {
    CreditInputs {
        total_asset_value: asset,
        monthly_salary: salary,
        work_experiences: experience,
        age,
    }
}

pub(super) fn saturated_payload(age: u64) -> Value {
    json!({
        "total_asset_value": 1e10,
        "monthly_salary": 2e8,
        "work_experiences": 40,
        "age": age,
    })
}
