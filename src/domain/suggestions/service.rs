use super::dto::{SuggestLinksRequest, SuggestLinksResponse};
use super::error::SuggestionServiceError;
use super::{CategoryId, SuggestionAccumulator, SuggestionCriteria, SuggestionSource};
use crate::infrastructure::repositories::SessionRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const MIN_LINK_COUNT: i64 = 1;
const MAX_LINK_COUNT: i64 = 50;

pub struct LinkSuggestionService {
    session_repo: Arc<SessionRepository>,
    source: Arc<dyn SuggestionSource>,
    accumulator: SuggestionAccumulator,
}

impl LinkSuggestionService {
    pub fn new(
        session_repo: Arc<SessionRepository>,
        source: Arc<dyn SuggestionSource>,
        accumulator: SuggestionAccumulator,
    ) -> Self {
        Self {
            session_repo,
            source,
            accumulator,
        }
    }
}

#[async_trait]
pub trait LinkSuggestionServiceApi: Send + Sync {
    /// Ask the suggestion source for new links and add them to the session
    ///
    /// This operation:
    /// - Validates the requested count and categories
    /// - Excludes every link in the session and in the uploaded list
    ///   (the previous upload when none is given)
    /// - Runs the accumulation loop (one request per session at a time)
    /// - Merges the accepted links into the session collection
    async fn suggest(
        &self,
        session_id: Uuid,
        request: SuggestLinksRequest,
    ) -> Result<SuggestLinksResponse, SuggestionServiceError>;
}

#[async_trait]
impl LinkSuggestionServiceApi for LinkSuggestionService {
    async fn suggest(
        &self,
        session_id: Uuid,
        request: SuggestLinksRequest,
    ) -> Result<SuggestLinksResponse, SuggestionServiceError> {
        let target_count = self.validate_link_count(request.link_count)?;
        let preferred_categories = self.parse_categories(&request.categories)?;
        let keywords = request
            .keywords
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let handle = self
            .session_repo
            .find(session_id)
            .await
            .ok_or(SuggestionServiceError::SessionNotFound)?;

        let _guard = handle
            .try_begin_suggestion()
            .ok_or(SuggestionServiceError::Busy)?;

        let (known_links, uploaded) = {
            let session = handle.lock().await;
            let uploaded = request
                .existing_links
                .unwrap_or_else(|| session.last_upload.clone());
            (session.known_identities(&uploaded), uploaded)
        };

        tracing::info!(
            session_id = %session_id,
            target_count,
            known_links = known_links.len(),
            has_keywords = keywords.is_some(),
            "AI suggestion request"
        );

        let criteria = SuggestionCriteria {
            keywords,
            preferred_categories,
            target_count,
            known_links,
        };

        let result = self
            .accumulator
            .accumulate(&criteria, self.source.as_ref())
            .await
            .inspect_err(|e| {
                tracing::error!(session_id = %session_id, error = %e, "AI suggestion failed");
            })?;

        let added = {
            let mut session = handle.lock().await;
            session.last_upload = uploaded;
            session.merge_suggestions(result.links, Utc::now())
        };

        let delivered = added.len();
        if delivered < target_count {
            tracing::info!(
                session_id = %session_id,
                requested = target_count,
                delivered,
                attempts_used = result.attempts_used,
                "Fewer unique suggestions than requested"
            );
        }

        Ok(SuggestLinksResponse {
            links: added,
            attempts_used: result.attempts_used,
            requested: target_count,
            delivered,
            under_delivered: delivered < target_count,
        })
    }
}

impl LinkSuggestionService {
    fn validate_link_count(&self, link_count: i64) -> Result<usize, SuggestionServiceError> {
        if !(MIN_LINK_COUNT..=MAX_LINK_COUNT).contains(&link_count) {
            return Err(SuggestionServiceError::Invalid(format!(
                "link_count must be between {} and {}",
                MIN_LINK_COUNT, MAX_LINK_COUNT
            )));
        }
        Ok(link_count as usize)
    }

    fn parse_categories(&self, raw: &[String]) -> Result<Vec<CategoryId>, SuggestionServiceError> {
        let mut categories = Vec::new();
        for value in raw {
            let category = value
                .parse::<CategoryId>()
                .map_err(|e| SuggestionServiceError::Invalid(e.to_string()))?;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        Ok(categories)
    }
}
