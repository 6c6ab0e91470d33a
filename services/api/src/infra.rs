use credit_score::error::AppError;
use credit_score::scoring::{CreditScoringService, ScoringModel};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the scoring service over the process-wide model, validating it once.
pub(crate) fn scoring_service() -> Result<CreditScoringService, AppError> {
    Ok(CreditScoringService::new(ScoringModel::standard())?)
}

/// Resolves CLI input options into a JSON payload; no options means an empty mapping.
pub(crate) fn load_inputs(inline: Option<&str>, file: Option<&Path>) -> Result<Value, AppError> {
    match (inline, file) {
        (Some(raw), _) => Ok(serde_json::from_str(raw)?),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        (None, None) => Ok(json!({})),
    }
}
