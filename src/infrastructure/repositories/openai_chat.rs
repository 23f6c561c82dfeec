use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use std::sync::Arc;

/// Thin wrapper over the OpenAI chat API for prompts that answer in JSON
pub struct OpenAiChat {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiChat {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion in JSON mode.
    /// `Ok(None)` means the model answered without any content.
    pub async fn complete_json(&self, system: &str, prompt: &str) -> Result<Option<String>, String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| format!("Invalid system message: {}", e))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| format!("Invalid user message: {}", e))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| format!("Invalid chat request: {}", e))?;

        let start_time = std::time::Instant::now();
        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI chat API"
        );

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat API call failed"
            );
            format!("OpenAI chat error: {}", e)
        })?;

        tracing::debug!(
            model = %self.model,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            choices = response.choices.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "OpenAI chat completion received"
        );

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

/// Strip a Markdown code fence some models wrap around JSON
pub fn extract_json(content: &str) -> &str {
    let content = content.trim();
    if let Some(rest) = content.split("```json").nth(1) {
        rest.split("```").next().unwrap_or(rest).trim()
    } else if content.starts_with("```") {
        content.split("```").nth(1).unwrap_or(content).trim()
    } else {
        content
    }
}
