use async_trait::async_trait;
use link_curator_backend::domain::links::{LinkItem, LinkRelevanceFilter};
use link_curator_backend::domain::suggestions::{
    CandidateLink, SourceError, SuggestionBatch, SuggestionBatchRequest, SuggestionSource,
};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

pub fn candidate(title: &str, url: &str, category: &str) -> CandidateLink {
    CandidateLink {
        title: title.to_string(),
        url: url.to_string(),
        description: format!("{} is free", title),
        category: category.to_string(),
    }
}

struct ScriptedResponse {
    delay: Option<Duration>,
    result: Result<SuggestionBatch, SourceError>,
}

/// Suggestion source that replays queued responses in order and answers
/// with an empty batch once the queue runs out
#[derive(Default)]
pub struct ScriptedSuggestionSource {
    script: Mutex<VecDeque<ScriptedResponse>>,
    requests: Mutex<Vec<SuggestionBatchRequest>>,
}

impl ScriptedSuggestionSource {
    pub fn push_batch(&self, links: Vec<CandidateLink>) {
        self.push(None, Ok(SuggestionBatch { suggested_links: links }));
    }

    pub fn push_slow_batch(&self, delay: Duration, links: Vec<CandidateLink>) {
        self.push(Some(delay), Ok(SuggestionBatch { suggested_links: links }));
    }

    pub fn push_error(&self, error: SourceError) {
        self.push(None, Err(error));
    }

    fn push(&self, delay: Option<Duration>, result: Result<SuggestionBatch, SourceError>) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedResponse { delay, result });
    }

    pub fn requests(&self) -> Vec<SuggestionBatchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionSource for ScriptedSuggestionSource {
    async fn fetch_batch(
        &self,
        request: SuggestionBatchRequest,
    ) -> Result<SuggestionBatch, SourceError> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();

        match next {
            Some(ScriptedResponse { delay, result }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(SuggestionBatch::default()),
        }
    }
}

/// Relevance filter that matches keywords against titles and descriptions
#[derive(Default)]
pub struct KeywordRelevanceFilter {
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl KeywordRelevanceFilter {
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkRelevanceFilter for KeywordRelevanceFilter {
    async fn relevant_ids(&self, links: &[LinkItem], keywords: &str) -> Result<HashSet<Uuid>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err("relevance provider unavailable".to_string());
        }

        let keywords = keywords.to_lowercase();
        Ok(links
            .iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&keywords)
                    || l.description.to_lowercase().contains(&keywords)
            })
            .map(|l| l.id)
            .collect())
    }
}
