use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum LinkServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("session not found")]
    SessionNotFound,
}

impl From<LinkServiceError> for AppError {
    fn from(err: LinkServiceError) -> Self {
        match err {
            LinkServiceError::Invalid(msg) => AppError::BadRequest(msg),
            LinkServiceError::SessionNotFound => {
                AppError::NotFound("Session not found".to_string())
            }
            LinkServiceError::Dependency(msg) => AppError::ExternalService(msg),
        }
    }
}
