use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value as JsonValue;

use super::ApiError;
use crate::models::{EvaluationRequest, GenerationRequest, HealthStatus};
use crate::services::QuestionService;

type SharedService = Arc<QuestionService>;

/// POST /generate
pub(super) async fn generate(
    State(service): State<SharedService>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<JsonValue>, ApiError> {
    let Json(req) = payload?;
    if req.count == 0 {
        return Err(ApiError::unprocessable("count must be >= 1"));
    }

    let value = service
        .generate_question(&req.topic, &req.difficulty, &req.question_type, req.count)
        .await?;

    Ok(Json(value))
}

/// POST /evaluate
pub(super) async fn evaluate(
    State(service): State<SharedService>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<JsonValue>, ApiError> {
    let Json(req) = payload?;
    let value = service
        .evaluate_answer(
            &req.user_answer,
            &req.expected_answer,
            &req.question_type,
            req.tolerance(),
        )
        .await?;

    Ok(Json(value))
}

/// GET /health，不检查任何依赖
pub(super) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
