use kpa_catalog::RecordingType;
use kpa_scoring::Evaluation;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::MAX_TEXT_CHARS;

/// Transcript evaluation request
///
/// Missing or `null` texts are treated as empty and score 0.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EvaluationRequest {
    /// Text the participant was asked to read
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_CHARS))]
    pub expected_text: Option<String>,
    /// Transcript returned by the speech backend
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_CHARS))]
    pub observed_text: Option<String>,
    /// Recording type tag, used for metrics
    #[serde(default)]
    pub recording_type: Option<RecordingType>,
}

/// Transcript evaluation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_type: Option<RecordingType>,
}
