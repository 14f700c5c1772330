use kpa_scoring::Grade;

use crate::error::ApiError;

/// Longest expected text or transcript accepted, in characters
pub const MAX_TEXT_CHARS: u64 = 5_000;

/// Longest participant id accepted, in characters
pub const MAX_PARTICIPANT_ID_CHARS: usize = 128;

/// Parse a pronunciation level
///
/// # Examples
/// ```
/// use kpa_api::validation::parse_level;
/// use kpa_scoring::Grade;
///
/// assert_eq!(parse_level("상").unwrap(), Grade::High);
/// assert!(parse_level("excellent").is_err());
/// ```
pub fn parse_level(level: &str) -> Result<Grade, ApiError> {
    level
        .parse()
        .map_err(|err: kpa_scoring::ParseGradeError| ApiError::Validation(err.to_string()))
}

/// Validate a participant id taken from the request path
pub fn validate_participant_id(participant_id: &str) -> Result<(), ApiError> {
    if participant_id.trim().is_empty() {
        return Err(ApiError::Validation(
            "Participant id cannot be empty".to_string(),
        ));
    }

    if participant_id.chars().count() > MAX_PARTICIPANT_ID_CHARS {
        return Err(ApiError::Validation(format!(
            "Participant id is longer than {MAX_PARTICIPANT_ID_CHARS} characters"
        )));
    }

    Ok(())
}
