use gemini::client::DEFAULT_BASE_URL;
use secrecy::SecretString;
use url::Url;

use super::env::{ConfigError, EnvSource, optional, parse_optional, require};

pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const GEMINI_TEMPERATURE: &str = "GEMINI_TEMPERATURE";

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for the Gemini chat model.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GOOGLE_API_KEY: Gemini API key (required)
    /// - GEMINI_MODEL: model name (default: "gemini-1.5-flash")
    /// - GEMINI_BASE_URL: API root (default: Google's OpenAI-compatible endpoint)
    /// - GEMINI_TEMPERATURE: sampling temperature in [0, 2] (default: 0.7)
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let api_key = require(env, GOOGLE_API_KEY)?.into();
        let model = optional(env, GEMINI_MODEL, DEFAULT_MODEL);

        let base_url = optional(env, GEMINI_BASE_URL, DEFAULT_BASE_URL);
        let parsed = Url::parse(&base_url)
            .map_err(|e| ConfigError::invalid(GEMINI_BASE_URL, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                GEMINI_BASE_URL,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let temperature = parse_optional(env, GEMINI_TEMPERATURE, DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::invalid(
                GEMINI_TEMPERATURE,
                format!("{} is outside [0, 2]", temperature),
            ));
        }

        Ok(Self {
            api_key,
            model,
            base_url,
            temperature,
        })
    }
}
