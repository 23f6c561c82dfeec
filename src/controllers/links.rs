use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::links::{service::categories, LinkListResponse, LinkQuery, LinkService, LinkServiceApi},
    domain::suggestions::CategoryId,
    error::AppResult,
};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryId>,
}

pub struct LinksController {
    link_service: Arc<LinkService>,
}

impl LinksController {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }

    /// GET /api/sessions/{sessionId}/links - Filtered and sorted collection
    pub async fn list_links(
        State(controller): State<Arc<LinksController>>,
        Path(session_id): Path<Uuid>,
        Query(query): Query<LinkQuery>,
    ) -> AppResult<Json<LinkListResponse>> {
        let links = controller.link_service.list_links(session_id, query).await?;
        Ok(Json(links))
    }

    /// GET /api/categories - Categories a link can have
    pub async fn list_categories() -> Json<CategoriesResponse> {
        Json(CategoriesResponse {
            categories: categories(),
        })
    }
}
