pub mod app_config;
pub mod chain_config;
pub mod cors_config;
pub mod env;
pub mod gemini_config;
pub mod langchain_config;
pub mod server_config;
