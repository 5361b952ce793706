//! Request handlers

use axum::{extract::State, Json};
use serde::Serialize;

use envelope_core::calculations::envelope;
use envelope_core::{EnvelopeInput, EnvelopeResult};

use crate::error::ApiResult;
use crate::state::AppState;

/// Evaluate one envelope assembly
pub async fn calculate(
    State(state): State<AppState>,
    Json(input): Json<EnvelopeInput>,
) -> ApiResult<Json<EnvelopeResult>> {
    tracing::debug!(
        layers = input.layers.len(),
        code = %input.code,
        climate_zone = %input.climate_zone,
        "evaluating envelope assembly"
    );

    let result = envelope::calculate(&input, state.tables)?;
    Ok(Json(result))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::create_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState::new())
    }

    fn calculate_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn calculate_returns_assessment() {
        let app = test_router();
        let body = serde_json::json!({
            "climateZone": "5A",
            "buildingType": "wood-framed wall",
            "layers": [{ "material": "Gypsum", "thicknessInches": 0.5 }],
            "framing": "wood",
            "code": "IECC2021"
        });

        let resp = app.oneshot(calculate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: EnvelopeResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.u_value, 2.2);
        assert!(!result.compliance);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn unknown_material_is_bad_request() {
        let app = test_router();
        let body = serde_json::json!({
            "climateZone": "5A",
            "buildingType": "wood-framed wall",
            "layers": [{ "material": "Brick", "thicknessInches": 3.625 }],
            "framing": "wood",
            "code": "IECC2021"
        });

        let resp = app.oneshot(calculate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["error"], "Unknown material: Brick");
        assert_eq!(payload["code"], "UNKNOWN_MATERIAL");
    }

    #[tokio::test]
    async fn unsupported_code_combination_is_bad_request() {
        let app = test_router();
        let body = serde_json::json!({
            "climateZone": "9Z",
            "buildingType": "wood-framed wall",
            "layers": [{ "material": "Gypsum", "thicknessInches": 0.5 }],
            "framing": "wood",
            "code": "IECC2021"
        });

        let resp = app.oneshot(calculate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["code"], "UNSUPPORTED_CODE_COMBINATION");
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = test_router();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload["status"], "healthy");
    }
}
