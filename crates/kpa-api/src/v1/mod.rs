use axum::Router;

use crate::{evaluation, pronunciation, speaking, state::ApiState};

/// V1 API routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(evaluation::routes())
        .merge(pronunciation::routes())
        .merge(speaking::routes())
}
