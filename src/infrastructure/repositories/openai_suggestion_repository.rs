use super::openai_chat::{extract_json, OpenAiChat};
use crate::domain::suggestions::{
    CategoryId, SourceError, SuggestionBatch, SuggestionBatchRequest, SuggestionSource,
};
use async_trait::async_trait;

const SYSTEM_PROMPT: &str = "You are an expert in finding relevant links. \
All suggested links MUST be for open-source projects or free online resources \
(e.g., free e-books, tutorials, documentation, open-source software tools). \
Always answer with a single JSON object.";

/// Suggestion source backed by an OpenAI chat model
pub struct OpenAiSuggestionRepository {
    chat: OpenAiChat,
}

impl OpenAiSuggestionRepository {
    pub fn new(chat: OpenAiChat) -> Self {
        Self { chat }
    }
}

fn join_categories(categories: &[CategoryId]) -> String {
    categories
        .iter()
        .map(CategoryId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(request: &SuggestionBatchRequest) -> String {
    let mut prompt = match request.keywords.as_deref() {
        Some(keywords) => format!("Based on the provided keywords \"{}\",\n", keywords),
        None => "Suggest some interesting and useful open-source projects or free online resources,\n"
            .to_string(),
    };

    if request.preferred_categories.is_empty() {
        prompt.push_str("from any of the categories below.\n");
    } else {
        prompt.push_str(&format!(
            "preferably in these categories: {}.\n",
            join_categories(&request.preferred_categories)
        ));
    }

    prompt.push_str(&format!(
        "Suggest exactly {} links. Each link needs a title, a URL, a brief description \
         and exactly one category from this list: {}.\n",
        request.count,
        join_categories(&request.valid_categories)
    ));

    if !request.exclude.is_empty() {
        prompt.push_str("\nDo NOT suggest any of these already known links:\n");
        for identity in &request.exclude {
            let line = match identity.title.as_deref() {
                Some(title) => format!("- {} ({})\n", identity.url, title),
                None => format!("- {}\n", identity.url),
            };
            prompt.push_str(&line);
        }
    }

    prompt.push_str(
        "\nRespond in this JSON format:\n\
         {\"suggestedLinks\": [{\"title\": \"Link Title\", \"url\": \"Link URL\", \
         \"description\": \"Link Description\", \"category\": \"One of the categories\"}]}",
    );

    prompt
}

/// Parse a completion into a batch; anything that is not
/// `{"suggestedLinks": [...]}` with a title and url per item is malformed
pub fn parse_batch(content: Option<&str>) -> Result<SuggestionBatch, SourceError> {
    let content = content
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| SourceError::Malformed("completion has no content".to_string()))?;

    serde_json::from_str::<SuggestionBatch>(extract_json(content)).map_err(|e| {
        tracing::warn!(error = %e, content_length = content.len(), "Unparseable suggestion payload");
        SourceError::Malformed(e.to_string())
    })
}

#[async_trait]
impl SuggestionSource for OpenAiSuggestionRepository {
    async fn fetch_batch(
        &self,
        request: SuggestionBatchRequest,
    ) -> Result<SuggestionBatch, SourceError> {
        let prompt = build_prompt(&request);

        tracing::info!(
            model = %self.chat.model(),
            count = request.count,
            excluded = request.exclude.len(),
            "Requesting link suggestions"
        );

        let content = self
            .chat
            .complete_json(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(SourceError::Upstream)?;

        let batch = parse_batch(content.as_deref())?;

        tracing::info!(
            suggested = batch.suggested_links.len(),
            "Link suggestions received"
        );

        Ok(batch)
    }
}
