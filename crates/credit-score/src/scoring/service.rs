use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::engine::{ComputationResult, ScoringEngine};
use super::inputs::{sanitize, InvalidInputError, INPUT_KEYS};
use super::model::{ModelError, ScoringModel};
use super::views::{ClassifyCustomerView, ScoreBreakdownView, ToolError, ToolResponse};

/// The two operations exposed to calling agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringTool {
    ClassifyCustomer,
    ScoreBreakdown,
}

impl ScoringTool {
    pub const ALL: [ScoringTool; 2] = [Self::ClassifyCustomer, Self::ScoreBreakdown];

    pub fn name(&self) -> &'static str {
        match self {
            ScoringTool::ClassifyCustomer => "classify_customer",
            ScoringTool::ScoreBreakdown => "score_breakdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoringTool::ClassifyCustomer => {
                "Return credit_score, classification and structured reasons for a customer."
            }
            ScoringTool::ScoreBreakdown => {
                "Return the scoring trace: raw score, per-factor values, norms, caps and weights."
            }
        }
    }
}

/// Catalog entry advertised at `GET /api/v1/tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_keys: Vec<&'static str>,
}

/// Service composing the sanitizer and engine behind both tool projections.
///
/// Each call sanitizes and scores exactly once; the two responses are views over the same
/// [`ComputationResult`], so they always agree on `credit_score`.
#[derive(Debug, Clone)]
pub struct CreditScoringService {
    engine: Arc<ScoringEngine>,
}

impl CreditScoringService {
    pub fn new(model: ScoringModel) -> Result<Self, ModelError> {
        let engine = ScoringEngine::new(model)?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    pub fn with_engine(engine: Arc<ScoringEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Sanitize and score a raw payload.
    pub fn evaluate(&self, inputs: &Value) -> Result<ComputationResult, InvalidInputError> {
        let inputs = sanitize(inputs).inspect_err(|err| {
            warn!(error = %err, "rejected credit scoring input");
        })?;

        let result = self.engine.compute(&inputs);
        debug!(
            credit_score = result.credit_score,
            raw_score = result.raw_score,
            classification = result.classification.label(),
            "scored credit inputs"
        );

        Ok(result)
    }

    pub fn classify_customer(&self, inputs: &Value) -> ToolResponse<ClassifyCustomerView> {
        match self.evaluate(inputs) {
            Ok(result) => ToolResponse::Success(ClassifyCustomerView::project(
                &result,
                self.engine.model(),
            )),
            Err(err) => ToolResponse::Error(ToolError::from(&err)),
        }
    }

    pub fn score_breakdown(&self, inputs: &Value) -> ToolResponse<ScoreBreakdownView> {
        match self.evaluate(inputs) {
            Ok(result) => {
                ToolResponse::Success(ScoreBreakdownView::project(&result, self.engine.model()))
            }
            Err(err) => ToolResponse::Error(ToolError::from(&err)),
        }
    }

    pub fn catalog(&self) -> Vec<ToolDescriptor> {
        ScoringTool::ALL
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name(),
                description: tool.description(),
                input_keys: INPUT_KEYS.to_vec(),
            })
            .collect()
    }
}
