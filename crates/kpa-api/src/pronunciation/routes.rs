use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use kpa_assign::SubjectId;
use kpa_catalog::{PronSet, ReadingTask};
use serde::{Deserialize, Serialize};

use crate::{ApiState, error::ApiError, metrics::record_assignment, validation};

/// Create the pronunciation routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/pronunciation/sets", get(list_sets))
        .route("/pronunciation/sets/{set_id}", get(get_set))
        .route(
            "/pronunciation/assignments/{participant_id}",
            get(get_assignment),
        )
}

/// Pronunciation set assigned to a participant, with its reading tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronunciationAssignment {
    pub participant_id: String,
    pub set: PronSet,
    pub tasks: Vec<ReadingTask>,
}

async fn list_sets(State(state): State<ApiState>) -> Json<Vec<PronSet>> {
    Json(state.catalog.pronunciation_sets().to_vec())
}

async fn get_set(
    State(state): State<ApiState>,
    Path(set_id): Path<String>,
) -> Result<Json<PronSet>, ApiError> {
    state
        .catalog
        .pronunciation_set(&set_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Pronunciation set '{set_id}' not found")))
}

async fn get_assignment(
    State(state): State<ApiState>,
    Path(participant_id): Path<String>,
) -> Result<Json<PronunciationAssignment>, ApiError> {
    validation::validate_participant_id(&participant_id)?;

    let subject = SubjectId::from(&participant_id);
    let set = state.catalog.assign_pronunciation_set(&subject);

    tracing::debug!(participant_id = %subject, set_id = %set.id, "pronunciation set assigned");
    record_assignment("pronunciation", &set.id);

    Ok(Json(PronunciationAssignment {
        participant_id,
        tasks: set.reading_tasks(),
        set: set.clone(),
    }))
}
