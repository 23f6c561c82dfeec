use super::SourceError;
use crate::error::AppError;

/// Hard failure of one accumulation run
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccumulationError {
    #[error("suggestion source failed {failures} times in a row after {attempts} attempts: {last_error}")]
    SourceFailed {
        attempts: usize,
        failures: usize,
        accepted_before_failure: usize,
        last_error: SourceError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("session not found")]
    SessionNotFound,
    #[error("a suggestion request is already running for this session")]
    Busy,
    #[error(transparent)]
    Accumulation(#[from] AccumulationError),
}

impl From<SuggestionServiceError> for AppError {
    fn from(err: SuggestionServiceError) -> Self {
        match err {
            SuggestionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SuggestionServiceError::SessionNotFound => {
                AppError::NotFound("Session not found".to_string())
            }
            SuggestionServiceError::Busy => AppError::Conflict(
                "A suggestion request is already running for this session".to_string(),
            ),
            SuggestionServiceError::Accumulation(e) => AppError::ExternalService(e.to_string()),
        }
    }
}
