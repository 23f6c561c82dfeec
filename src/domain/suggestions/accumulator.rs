use super::category::CategoryId;
use super::dedup::DeduplicationSet;
use super::error::AccumulationError;
use super::model::{AcceptedLink, AccumulationResult, CandidateLink, LinkIdentity, SuggestionCriteria};
use super::{SuggestionBatchRequest, SuggestionSource};

pub const MAX_ATTEMPTS: usize = 50;
pub const MAX_BATCH_SIZE: usize = 20;
pub const MAX_CONSECUTIVE_EMPTY_BATCHES: usize = 3;
pub const MAX_CONSECUTIVE_MALFORMED_RESPONSES: usize = 2;

/// Ceilings that bound one accumulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulationLimits {
    pub max_attempts: usize,
    pub max_batch_size: usize,
    pub max_consecutive_empty_batches: usize,
    pub max_consecutive_malformed_responses: usize,
}

impl Default for AccumulationLimits {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_batch_size: MAX_BATCH_SIZE,
            max_consecutive_empty_batches: MAX_CONSECUTIVE_EMPTY_BATCHES,
            max_consecutive_malformed_responses: MAX_CONSECUTIVE_MALFORMED_RESPONSES,
        }
    }
}

impl AccumulationLimits {
    /// Items to ask for when `remaining` links are still missing: half again
    /// as many (rounded up) to absorb duplicates, within 1..=max_batch_size
    pub fn batch_size(&self, remaining: usize) -> usize {
        let padded = remaining.saturating_mul(3).div_ceil(2);
        padded.min(self.max_batch_size).max(1)
    }
}

/// Per-run state, dropped when `accumulate` returns
struct AccumulationState {
    accepted: Vec<AcceptedLink>,
    known: DeduplicationSet,
    attempts: usize,
    consecutive_empty_batches: usize,
    consecutive_malformed_responses: usize,
}

impl AccumulationState {
    fn new(known_links: &[LinkIdentity]) -> Self {
        Self {
            accepted: Vec::new(),
            known: known_links.iter().cloned().collect(),
            attempts: 0,
            consecutive_empty_batches: 0,
            consecutive_malformed_responses: 0,
        }
    }

    /// Accept novel candidates in order until `target` is reached.
    /// Returns how many were added.
    fn absorb(&mut self, candidates: Vec<CandidateLink>, target: usize) -> usize {
        let mut added = 0;

        for candidate in candidates {
            if self.accepted.len() >= target {
                break;
            }
            if candidate.url.trim().is_empty() || self.known.contains(&candidate.url) {
                continue;
            }

            let link = AcceptedLink::from_candidate(candidate);
            self.known
                .add(LinkIdentity::new(link.url.clone(), Some(link.title.clone())));
            self.accepted.push(link);
            added += 1;
        }

        added
    }
}

/// Repeatedly queries a suggestion source until enough unique links are
/// collected or the source proves unproductive.
///
/// Holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct SuggestionAccumulator {
    limits: AccumulationLimits,
}

impl SuggestionAccumulator {
    pub fn new(limits: AccumulationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &AccumulationLimits {
        &self.limits
    }

    /// Collect up to `criteria.target_count` new links.
    ///
    /// Under-delivery is a successful result. Only repeated source failures
    /// (malformed payloads or transport errors, back to back) are an error.
    pub async fn accumulate(
        &self,
        criteria: &SuggestionCriteria,
        source: &dyn SuggestionSource,
    ) -> Result<AccumulationResult, AccumulationError> {
        let target = criteria.target_count;
        let mut state = AccumulationState::new(&criteria.known_links);

        tracing::info!(
            target_count = target,
            known_links = state.known.len(),
            preferred_categories = ?criteria.preferred_categories,
            "Starting suggestion accumulation"
        );

        while state.accepted.len() < target && state.attempts < self.limits.max_attempts {
            state.attempts += 1;
            let remaining = target - state.accepted.len();

            let request = SuggestionBatchRequest {
                keywords: criteria.keywords.clone(),
                preferred_categories: criteria.preferred_categories.clone(),
                valid_categories: CategoryId::ALL.to_vec(),
                count: self.limits.batch_size(remaining),
                exclude: state.known.identities().to_vec(),
            };

            tracing::debug!(
                attempt = state.attempts,
                remaining,
                batch_size = request.count,
                excluded = request.exclude.len(),
                "Requesting suggestion batch"
            );

            let batch = match source.fetch_batch(request).await {
                Ok(batch) => batch,
                Err(err) => {
                    state.consecutive_malformed_responses += 1;
                    tracing::warn!(
                        attempt = state.attempts,
                        consecutive_failures = state.consecutive_malformed_responses,
                        error = %err,
                        "Suggestion source returned no usable batch"
                    );

                    if state.consecutive_malformed_responses
                        >= self.limits.max_consecutive_malformed_responses
                    {
                        return Err(AccumulationError::SourceFailed {
                            attempts: state.attempts,
                            failures: state.consecutive_malformed_responses,
                            accepted_before_failure: state.accepted.len(),
                            last_error: err,
                        });
                    }
                    continue;
                }
            };
            state.consecutive_malformed_responses = 0;

            let received = batch.suggested_links.len();
            let added = state.absorb(batch.suggested_links, target);

            if added == 0 && received > 0 {
                state.consecutive_empty_batches += 1;
            } else {
                state.consecutive_empty_batches = 0;
            }

            tracing::debug!(
                attempt = state.attempts,
                received,
                added,
                accepted = state.accepted.len(),
                "Suggestion batch processed"
            );

            if state.consecutive_empty_batches >= self.limits.max_consecutive_empty_batches {
                tracing::info!(
                    attempts = state.attempts,
                    accepted = state.accepted.len(),
                    "Suggestion source exhausted, stopping early"
                );
                break;
            }
        }

        let mut links = state.accepted;
        links.truncate(target);

        tracing::info!(
            target_count = target,
            delivered = links.len(),
            attempts_used = state.attempts,
            "Suggestion accumulation finished"
        );

        Ok(AccumulationResult {
            links,
            attempts_used: state.attempts,
        })
    }
}
