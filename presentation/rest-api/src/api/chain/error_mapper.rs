use poem_openapi::payload::Json;

use business::domain::chat::errors::ChainError;

use crate::api::error::ErrorResponse;

/// Error side of every chain route, one variant per HTTP status.
pub enum ChainFailure {
    UnprocessableEntity(Json<ErrorResponse>),
    TooManyRequests(Json<ErrorResponse>),
    BadGateway(Json<ErrorResponse>),
    InternalError(Json<ErrorResponse>),
}

fn body(error: &ChainError, name: &str, detail: Option<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: name.to_string(),
        message: error.to_string(),
        detail,
    })
}

impl From<ChainError> for ChainFailure {
    fn from(error: ChainError) -> Self {
        match &error {
            ChainError::MissingInputVariable(variable) => Self::UnprocessableEntity(body(
                &error,
                "ValidationError",
                Some(variable.clone()),
            )),
            ChainError::BatchTooLarge { size, max } => Self::UnprocessableEntity(body(
                &error,
                "ValidationError",
                Some(format!("{} inputs, at most {} allowed", size, max)),
            )),
            ChainError::ModelRateLimited => {
                Self::TooManyRequests(body(&error, "RateLimitError", None))
            }
            ChainError::ModelRequestFailed
            | ChainError::ModelUnauthorized
            | ChainError::EmptyResponse => Self::BadGateway(body(&error, "ModelError", None)),
            ChainError::InvalidTemplate(_) => {
                Self::InternalError(body(&error, "InternalError", None))
            }
        }
    }
}
