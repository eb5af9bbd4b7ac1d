/// Chain errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChainError {
    #[error("chain.invalid_template")]
    InvalidTemplate(String),
    #[error("chain.missing_input_variable")]
    MissingInputVariable(String),
    #[error("chain.batch_too_large")]
    BatchTooLarge { size: usize, max: usize },
    #[error("chain.model_request_failed")]
    ModelRequestFailed,
    #[error("chain.model_unauthorized")]
    ModelUnauthorized,
    #[error("chain.model_rate_limited")]
    ModelRateLimited,
    #[error("chain.empty_response")]
    EmptyResponse,
}

impl ChainError {
    pub fn invalid_template(reason: impl Into<String>) -> Self {
        ChainError::InvalidTemplate(reason.into())
    }
    pub fn missing_input_variable(name: impl Into<String>) -> Self {
        ChainError::MissingInputVariable(name.into())
    }
}
