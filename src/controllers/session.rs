use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::session::{CreateSessionRequest, SessionResponse, SessionService, SessionServiceApi},
    error::{AppError, AppResult},
};

pub struct SessionController {
    session_service: Arc<SessionService>,
}

impl SessionController {
    pub fn new(session_service: Arc<SessionService>) -> Self {
        Self { session_service }
    }

    /// POST /api/sessions - Open a session (body optional)
    ///
    /// An empty body opens an empty session; any other body must be a valid
    /// `CreateSessionRequest`.
    pub async fn create_session(
        State(controller): State<Arc<SessionController>>,
        body: Bytes,
    ) -> AppResult<(StatusCode, Json<SessionResponse>)> {
        let request = if body.iter().all(u8::is_ascii_whitespace) {
            CreateSessionRequest::default()
        } else {
            serde_json::from_slice::<CreateSessionRequest>(&body)
                .map_err(|e| AppError::BadRequest(format!("Invalid session body: {}", e)))?
        };
        let session = controller.session_service.create_session(request).await?;
        Ok((StatusCode::CREATED, Json(session)))
    }

    /// DELETE /api/sessions/{sessionId} - Drop a session and its links
    pub async fn delete_session(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.session_service.delete_session(session_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
