use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use kpa_assign::SubjectId;
use kpa_catalog::{SpeakSet, SpeakingTest};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, metrics::record_assignment, validation};

/// Create the speaking routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/speaking/sets/{set_id}", get(get_set))
        .route(
            "/speaking/assignments/{participant_id}",
            get(get_assignment),
        )
}

#[derive(Debug, Deserialize)]
struct AssignmentQuery {
    /// Pronunciation level: high, mid, low or 상, 중, 하
    level: String,
    /// Forces a specific speaking set
    set_id: Option<String>,
}

async fn get_set(
    State(state): State<ApiState>,
    Path(set_id): Path<String>,
) -> Result<Json<SpeakSet>, ApiError> {
    state
        .catalog
        .speaking_set(&set_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Speaking set '{set_id}' not found")))
}

async fn get_assignment(
    State(state): State<ApiState>,
    Path(participant_id): Path<String>,
    Query(query): Query<AssignmentQuery>,
) -> Result<Json<SpeakingTest>, ApiError> {
    validation::validate_participant_id(&participant_id)?;
    let level = validation::parse_level(&query.level)?;

    let subject = SubjectId::from(participant_id);
    let test = state
        .catalog
        .speaking_questions(level, Some(&subject), query.set_id.as_deref())?;

    tracing::debug!(
        participant_id = %subject,
        set_id = %test.set_id,
        level = %level,
        "speaking questions assigned"
    );
    record_assignment("speaking", &test.set_id);

    Ok(Json(test))
}
