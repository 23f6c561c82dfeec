use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::suggestions::{
        dto::{SuggestLinksRequest, SuggestLinksResponse},
        LinkSuggestionService, LinkSuggestionServiceApi,
    },
    error::AppResult,
};

pub struct SuggestionsController {
    suggestion_service: Arc<LinkSuggestionService>,
}

impl SuggestionsController {
    pub fn new(suggestion_service: Arc<LinkSuggestionService>) -> Self {
        Self { suggestion_service }
    }

    /// POST /api/sessions/{sessionId}/suggestions - Add AI-suggested links
    ///
    /// Fewer links than requested is a 200 with `under_delivered: true`;
    /// a suggestion source that keeps failing is a 502.
    pub async fn suggest(
        State(controller): State<Arc<SuggestionsController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<SuggestLinksRequest>,
    ) -> AppResult<Json<SuggestLinksResponse>> {
        let response = controller
            .suggestion_service
            .suggest(session_id, request)
            .await?;
        Ok(Json(response))
    }
}
