use super::openai_chat::{extract_json, OpenAiChat};
use crate::domain::links::{LinkItem, LinkRelevanceFilter};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

const SYSTEM_PROMPT: &str = "You are a link filtering assistant. Given a list of links and \
search keywords, identify which links are relevant to the keywords. \
Always answer with a single JSON object.";

#[derive(Debug, Deserialize)]
struct RelevanceResponse {
    #[serde(rename = "relevantLinkIds")]
    relevant_link_ids: Vec<String>,
}

/// Keyword relevance filter backed by an OpenAI chat model
pub struct OpenAiRelevanceRepository {
    chat: OpenAiChat,
}

impl OpenAiRelevanceRepository {
    pub fn new(chat: OpenAiChat) -> Self {
        Self { chat }
    }
}

pub fn build_prompt(links: &[LinkItem], keywords: &str) -> String {
    let listing: String = links
        .iter()
        .map(|link| {
            format!(
                "- ID: {}, Title: \"{}\", Description: \"{}\", URL: {}, Category: {}\n",
                link.id, link.title, link.description, link.url, link.category
            )
        })
        .collect();

    format!(
        "Links to filter:\n{}\nSearch Keywords: \"{}\"\n\n\
         Consider the title, description, URL, and category of each link for relevance.\n\
         Return ONLY the IDs of the relevant links as {{\"relevantLinkIds\": [\"id\", ...]}}. \
         If no links are relevant, return an empty array.",
        listing, keywords
    )
}

/// Ids of `links` named by the completion. A missing or malformed answer
/// yields an empty set; unknown ids are dropped.
pub fn parse_relevant_ids(content: Option<&str>, links: &[LinkItem]) -> HashSet<Uuid> {
    let parsed = content
        .map(extract_json)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "completion has no content".to_string())
        .and_then(|c| serde_json::from_str::<RelevanceResponse>(c).map_err(|e| e.to_string()));

    let response = match parsed {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Relevance filter returned no or malformed output");
            return HashSet::new();
        }
    };

    let known: HashSet<Uuid> = links.iter().map(|l| l.id).collect();
    response
        .relevant_link_ids
        .iter()
        .filter_map(|id| Uuid::parse_str(id.trim()).ok())
        .filter(|id| known.contains(id))
        .collect()
}

#[async_trait]
impl LinkRelevanceFilter for OpenAiRelevanceRepository {
    async fn relevant_ids(&self, links: &[LinkItem], keywords: &str) -> Result<HashSet<Uuid>, String> {
        let prompt = build_prompt(links, keywords);

        tracing::info!(
            model = %self.chat.model(),
            links = links.len(),
            keywords = keywords,
            "Filtering links by keyword relevance"
        );

        let content = self.chat.complete_json(SYSTEM_PROMPT, &prompt).await?;
        Ok(parse_relevant_ids(content.as_deref(), links))
    }
}
