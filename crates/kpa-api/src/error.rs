use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kpa_catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Catalog(err) if !err.is_configuration_fault() => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Catalog(err) => {
                tracing::error!(error = %err, "content catalog misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Content catalog is misconfigured".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
