use super::error::LinkServiceError;
use super::query::{filter_by_category, sort_links};
use super::{LinkItem, LinkListResponse, LinkQuery, LinkRelevanceFilter, SortOrder};
use crate::domain::suggestions::CategoryId;
use crate::infrastructure::repositories::SessionRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct LinkService {
    session_repo: Arc<SessionRepository>,
    relevance_filter: Arc<dyn LinkRelevanceFilter>,
}

impl LinkService {
    pub fn new(
        session_repo: Arc<SessionRepository>,
        relevance_filter: Arc<dyn LinkRelevanceFilter>,
    ) -> Self {
        Self {
            session_repo,
            relevance_filter,
        }
    }
}

#[async_trait]
pub trait LinkServiceApi: Send + Sync {
    /// List a session's links
    ///
    /// Applies, in order: AI keyword relevance (when keywords are given),
    /// category filter, sort order.
    async fn list_links(
        &self,
        session_id: Uuid,
        query: LinkQuery,
    ) -> Result<LinkListResponse, LinkServiceError>;
}

#[async_trait]
impl LinkServiceApi for LinkService {
    async fn list_links(
        &self,
        session_id: Uuid,
        query: LinkQuery,
    ) -> Result<LinkListResponse, LinkServiceError> {
        let category = query
            .category
            .as_deref()
            .filter(|c| !c.eq_ignore_ascii_case("all"))
            .map(|c| c.parse::<CategoryId>())
            .transpose()
            .map_err(|e| LinkServiceError::Invalid(e.to_string()))?;

        let order = query
            .sort
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()
            .map_err(LinkServiceError::Invalid)?
            .unwrap_or_default();

        let handle = self
            .session_repo
            .find(session_id)
            .await
            .ok_or(LinkServiceError::SessionNotFound)?;

        // Snapshot so the session is not locked while the relevance filter runs
        let all_links = handle.lock().await.links.clone();
        let total = all_links.len();

        let keywords = query
            .keywords
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        let links = match keywords {
            Some(keywords) => self.filter_relevant(all_links, keywords).await?,
            None => all_links,
        };

        let mut links = filter_by_category(links, category);
        sort_links(&mut links, order);

        Ok(LinkListResponse {
            displayed: links.len(),
            total,
            links,
        })
    }
}

impl LinkService {
    async fn filter_relevant(
        &self,
        links: Vec<LinkItem>,
        keywords: &str,
    ) -> Result<Vec<LinkItem>, LinkServiceError> {
        if links.is_empty() {
            return Ok(links);
        }

        let relevant = self
            .relevance_filter
            .relevant_ids(&links, keywords)
            .await
            .map_err(LinkServiceError::Dependency)?;

        tracing::info!(
            keywords = keywords,
            candidates = links.len(),
            relevant = relevant.len(),
            "Applied keyword relevance filter"
        );

        Ok(links
            .into_iter()
            .filter(|l| relevant.contains(&l.id))
            .collect())
    }
}

/// All categories, in declaration order
pub fn categories() -> Vec<CategoryId> {
    CategoryId::ALL.to_vec()
}
