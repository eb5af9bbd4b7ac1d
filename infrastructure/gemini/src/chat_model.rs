use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::warn;

use business::domain::chat::errors::ChainError;
use business::domain::chat::model::{ChatMessage, MessageRole};
use business::domain::chat::services::ChatModelService;

use crate::client::GeminiClient;

/// Gemini chat model reached through the chat completions API.
pub struct ChatModelGemini {
    client: GeminiClient,
    model: String,
    temperature: f32,
}

impl ChatModelGemini {
    pub fn new(client: GeminiClient, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    fn role_name(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System => "system",
            MessageRole::Human => "user",
            MessageRole::Ai => "assistant",
        }
    }

    fn build_body(&self, messages: &[ChatMessage]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({"role": Self::role_name(m.role), "content": m.content}))
            .collect();

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
        })
    }

    fn error_for_status(status: StatusCode) -> ChainError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChainError::ModelUnauthorized,
            StatusCode::TOO_MANY_REQUESTS => ChainError::ModelRateLimited,
            _ => ChainError::ModelRequestFailed,
        }
    }

    fn parse_response(data: &Value) -> Result<ChatMessage, ChainError> {
        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .filter(|content| !content.is_empty())
            .ok_or(ChainError::EmptyResponse)?;

        Ok(ChatMessage::ai(content))
    }
}

#[async_trait]
impl ChatModelService for ChatModelGemini {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChainError> {
        let body = self.build_body(messages);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(model = %self.model, error = %e, "Gemini request failed");
                ChainError::ModelRequestFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(model = %self.model, %status, "Gemini returned an error status");
            return Err(Self::error_for_status(status));
        }

        let data: Value = response.json().await.map_err(|e| {
            warn!(model = %self.model, error = %e, "Gemini response was not valid JSON");
            ChainError::ModelRequestFailed
        })?;

        Self::parse_response(&data)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
