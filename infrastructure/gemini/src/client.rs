use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

/// Google's OpenAI-compatible endpoint for Gemini models.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    api_key: SecretString,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.expose_secret())
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
