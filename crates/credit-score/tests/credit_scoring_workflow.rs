//! Integration scenarios for the credit scoring tools.
//!
//! Scenarios go through the public service facade and HTTP router so the sanitizer, engine and
//! projections are exercised together, the way a calling agent reaches them.

mod common {
    use std::sync::Arc;

    use credit_score::scoring::{CreditScoringService, ScoringModel};
    use serde_json::{json, Value};

    pub(super) fn service() -> Arc<CreditScoringService> {
        Arc::new(CreditScoringService::new(ScoringModel::standard()).expect("standard model"))
    }

    pub(super) fn mid_career_payload() -> Value {
        json!({
            "total_asset_value": 6_000_000_000.0,
            "monthly_salary": 150_000_000.0,
            "work_experiences": 20,
            "age": 38,
        })
    }
}

mod service {
    use super::common::*;
    use serde_json::json;

    #[test]
    fn empty_payload_scores_base_and_risk() {
        let service = service();

        let body = serde_json::to_value(service.classify_customer(&json!({}))).expect("json");

        assert_eq!(body["credit_score"], json!(500));
        assert_eq!(body["classification"], json!("risk"));
    }

    #[test]
    fn saturated_customer_is_high_value() {
        let service = service();
        let payload = json!({
            "total_asset_value": 1e10,
            "monthly_salary": 2e8,
            "work_experiences": 40,
            "age": 30,
        });

        let body = serde_json::to_value(service.classify_customer(&payload)).expect("json");

        assert_eq!(body["credit_score"], json!(800));
        assert_eq!(body["classification"], json!("high-value"));
        assert_eq!(
            body["reasons"]["classification"]["reason"],
            json!("Điểm cao và độ tuổi trong ngưỡng ổn định thu nhập/tiêu dùng.")
        );
    }

    #[test]
    fn zero_values_with_age_score_base_and_risk() {
        let service = service();
        let payload = json!({
            "total_asset_value": 0,
            "monthly_salary": 0,
            "work_experiences": 0,
            "age": 30,
        });

        let body = serde_json::to_value(service.classify_customer(&payload)).expect("json");

        assert_eq!(body["credit_score"], json!(500));
        assert_eq!(body["classification"], json!("risk"));
    }

    #[test]
    fn mid_career_customer_lands_in_standard_tier() {
        let service = service();

        let result = service
            .evaluate(&mid_career_payload())
            .expect("payload is valid");

        // 500 + 0.6 * 150 + 0.75 * 90 + 0.5 * 60 = 687.5, ties go to even.
        assert_eq!(result.raw_score, 687.5);
        assert_eq!(result.credit_score, 688);
        assert_eq!(result.classification.label(), "standard");
    }

    #[test]
    fn breakdown_traces_each_factor() {
        let service = service();

        let body =
            serde_json::to_value(service.score_breakdown(&mid_career_payload())).expect("json");

        assert_eq!(body["raw_score"], json!(687.5));
        assert_eq!(body["components"]["asset"]["norm"], json!(0.6));
        assert_eq!(body["components"]["asset"]["points"], json!(90.0));
        assert_eq!(body["components"]["salary"]["points"], json!(67.5));
        assert_eq!(body["components"]["experience"]["value"], json!(20.0));
        assert_eq!(body["components"]["experience"]["points"], json!(30.0));
    }

    #[test]
    fn breakdown_points_round_ties_to_even() {
        let service = service();

        let payload = json!({ "monthly_salary": 2_500_000 });

        let body = serde_json::to_value(service.score_breakdown(&payload)).expect("json");

        assert_eq!(body["components"]["salary"]["points"], json!(1.12));
        assert_eq!(body["credit_score"], json!(501));
    }

    #[test]
    fn oversized_integers_are_scored_not_rejected() {
        let service = service();
        let payload = json!({
            "work_experiences": 10_000_000_000_000_000_000u64,
            "age": "99999999999999999999",
        });

        let body = serde_json::to_value(service.classify_customer(&payload)).expect("json");

        assert_eq!(body["credit_score"], json!(560));
        assert_eq!(body["classification"], json!("risk"));
        assert_eq!(body["reasons"]["classification"]["age"], json!(u64::MAX));
    }

    #[test]
    fn negative_and_non_numeric_fields_are_reported_not_raised() {
        let service = service();

        for payload in [
            json!({ "age": -30 }),
            json!({ "work_experiences": "ten" }),
            json!({ "total_asset_value": null }),
        ] {
            let body = serde_json::to_value(service.score_breakdown(&payload)).expect("json");
            assert_eq!(body["error"], json!("invalid_input"), "{payload}");
            assert!(body["details"].is_string());
        }
    }
}

mod http {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use credit_score::scoring::scoring_router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
        let router = scoring_router(service());
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json payload");
        (status, payload)
    }

    #[tokio::test]
    async fn classify_customer_endpoint_scores_payload() {
        let (status, payload) =
            post_json("/api/v1/tools/classify_customer", &mid_career_payload()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.get("credit_score"), Some(&json!(688)));
        assert_eq!(payload.get("classification"), Some(&json!("standard")));
        assert_eq!(payload["reasons"]["classification"]["age"], json!(38));
    }

    #[tokio::test]
    async fn score_breakdown_endpoint_matches_classification_score() {
        let (_, classify) =
            post_json("/api/v1/tools/classify_customer", &mid_career_payload()).await;
        let (status, breakdown) =
            post_json("/api/v1/tools/score_breakdown", &mid_career_payload()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(classify["credit_score"], breakdown["credit_score"]);
        assert_eq!(breakdown["bonus_pool"], json!(300.0));
    }

    #[tokio::test]
    async fn invalid_input_is_returned_as_data() {
        let (status, payload) = post_json(
            "/api/v1/tools/classify_customer",
            &json!({ "monthly_salary": -1 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload,
            json!({
                "error": "invalid_input",
                "details": "Numeric inputs must be non-negative.",
            })
        );
    }

    #[tokio::test]
    async fn catalog_endpoint_lists_tools() {
        let router = scoring_router(service());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/tools")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json payload");
        let names: Vec<_> = payload["tools"]
            .as_array()
            .expect("tools array")
            .iter()
            .filter_map(|tool| tool["name"].as_str())
            .collect();
        assert_eq!(names, ["classify_customer", "score_breakdown"]);
    }

    #[tokio::test]
    async fn malformed_json_is_a_transport_error() {
        let router = scoring_router(service());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/tools/score_breakdown")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"age\": "))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert!(response.status().is_client_error());
    }
}
