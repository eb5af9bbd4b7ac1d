use business::domain::chat::errors::ChainError;
use business::domain::chat::model::MessageRole;
use business::domain::chat::prompt::{ChatPromptTemplate, MessageTemplate};

use super::env::{ConfigError, EnvSource, optional};

pub const CHAIN_SYSTEM_PROMPT: &str = "CHAIN_SYSTEM_PROMPT";
pub const CHAIN_HUMAN_PROMPT: &str = "CHAIN_HUMAN_PROMPT";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const DEFAULT_HUMAN_PROMPT: &str = "{input}";

/// Prompt served by the chain routes. Templates are validated while loading.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub prompt: ChatPromptTemplate,
}

impl ChainConfig {
    /// Environment variables:
    /// - CHAIN_SYSTEM_PROMPT: system message template (default: "You are a helpful assistant.")
    /// - CHAIN_HUMAN_PROMPT: human message template (default: "{input}")
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let system = template(
            env,
            CHAIN_SYSTEM_PROMPT,
            MessageRole::System,
            DEFAULT_SYSTEM_PROMPT,
        )?;
        let human = template(
            env,
            CHAIN_HUMAN_PROMPT,
            MessageRole::Human,
            DEFAULT_HUMAN_PROMPT,
        )?;

        Ok(Self {
            prompt: ChatPromptTemplate::from_templates(system, [human]),
        })
    }
}

fn template(
    env: &impl EnvSource,
    name: &'static str,
    role: MessageRole,
    default: &str,
) -> Result<MessageTemplate, ConfigError> {
    let text = optional(env, name, default);
    MessageTemplate::new(role, &text).map_err(|e| ConfigError::invalid(name, describe(e)))
}

fn describe(error: ChainError) -> String {
    match error {
        ChainError::InvalidTemplate(reason) => reason,
        other => other.to_string(),
    }
}
