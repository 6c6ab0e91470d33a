use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::service::CreditScoringService;

/// Router builder exposing the scoring tools over HTTP.
///
/// Input errors come back as `200 OK` with the `{error, details}` shape; only a body that is not
/// JSON at all is rejected by the extractor.
pub fn scoring_router(service: Arc<CreditScoringService>) -> Router {
    Router::new()
        .route("/api/v1/tools", get(catalog_handler))
        .route(
            "/api/v1/tools/classify_customer",
            post(classify_customer_handler),
        )
        .route("/api/v1/tools/score_breakdown", post(score_breakdown_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<CreditScoringService>>) -> Response {
    let payload = json!({ "tools": service.catalog() });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn classify_customer_handler(
    State(service): State<Arc<CreditScoringService>>,
    Json(inputs): Json<Value>,
) -> Response {
    let response = service.classify_customer(&inputs);
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn score_breakdown_handler(
    State(service): State<Arc<CreditScoringService>>,
    Json(inputs): Json<Value>,
) -> Response {
    let response = service.score_breakdown(&inputs);
    (StatusCode::OK, Json(response)).into_response()
}
