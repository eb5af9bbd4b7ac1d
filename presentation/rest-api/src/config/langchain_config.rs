use secrecy::SecretString;

use super::env::{ConfigError, EnvSource, optional, require};

pub const LANGCHAIN_API_KEY: &str = "LANGCHAIN_API_KEY";
pub const LANGCHAIN_PROJECT: &str = "LANGCHAIN_PROJECT";

/// LangChain platform credentials. The API key is mandatory: without it the service never starts.
#[derive(Debug, Clone)]
pub struct LangChainConfig {
    pub api_key: SecretString,
    pub project: String,
}

impl LangChainConfig {
    /// Environment variables:
    /// - LANGCHAIN_API_KEY: platform API key (required)
    /// - LANGCHAIN_PROJECT: project label (default: "default")
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require(env, LANGCHAIN_API_KEY)?.into(),
            project: optional(env, LANGCHAIN_PROJECT, "default"),
        })
    }
}
