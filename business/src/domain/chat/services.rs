use async_trait::async_trait;

use super::errors::ChainError;
use super::model::ChatMessage;

/// Service port for chat-completion models.
///
/// Takes the rendered conversation and returns the model's reply as an `Ai` message.
#[async_trait]
pub trait ChatModelService: Send + Sync {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChainError>;

    /// Model identifier, used for logs and health reporting.
    fn model_name(&self) -> &str;
}
