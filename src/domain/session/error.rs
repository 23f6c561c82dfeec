use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("session not found")]
    NotFound,
}

impl From<SessionServiceError> for AppError {
    fn from(err: SessionServiceError) -> Self {
        match err {
            SessionServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SessionServiceError::NotFound => AppError::NotFound("Session not found".to_string()),
        }
    }
}
