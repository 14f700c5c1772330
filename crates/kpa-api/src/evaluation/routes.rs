use axum::{Json, Router, routing::post};
use kpa_scoring::evaluate;
use validator::Validate;

use crate::{ApiState, error::ApiError, metrics::record_evaluation};

use super::model::{EvaluationRequest, EvaluationResponse};

/// Create the evaluation routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/evaluations", post(evaluate_transcript))
}

async fn evaluate_transcript(
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    payload.validate()?;

    let expected = payload.expected_text.as_deref().unwrap_or_default();
    let observed = payload.observed_text.as_deref().unwrap_or_default();

    let evaluation = evaluate(expected, observed);

    tracing::debug!(
        recording_type = ?payload.recording_type,
        score = evaluation.score,
        grade = %evaluation.grade,
        edit_distance = evaluation.edit_distance,
        "transcript evaluated"
    );
    record_evaluation(payload.recording_type, evaluation.grade);

    Ok(Json(EvaluationResponse {
        evaluation,
        recording_type: payload.recording_type,
    }))
}
