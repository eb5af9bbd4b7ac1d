use poem::middleware::Cors;

use super::chain_config::ChainConfig;
use super::cors_config;
use super::env::{ConfigError, EnvSource};
use super::gemini_config::GeminiConfig;
use super::langchain_config::LangChainConfig;
use super::server_config::ServerConfig;

/// Everything the service reads from the environment, built once in `main`
/// and handed by reference to whoever needs it.
pub struct AppConfig {
    pub langchain: LangChainConfig,
    pub gemini: GeminiConfig,
    pub chain: ChainConfig,
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    /// LANGCHAIN_API_KEY is checked first so a bare environment reports it.
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            langchain: LangChainConfig::from_source(env)?,
            gemini: GeminiConfig::from_source(env)?,
            chain: ChainConfig::from_source(env)?,
            server: ServerConfig::from_source(env)?,
            cors: cors_config::init_cors(env),
        })
    }
}
