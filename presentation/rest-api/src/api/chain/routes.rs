use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};
use serde_json::Value;

use business::domain::chat::use_cases::batch::{BatchInvokeChainParams, BatchInvokeChainUseCase};
use business::domain::chat::use_cases::invoke::{InvokeChainParams, InvokeChainUseCase};

use crate::api::chain::dto::{
    BatchRequest, BatchResponse, InvokeRequest, InvokeResponse, input_schema, output_schema,
};
use crate::api::chain::error_mapper::ChainFailure;
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

pub struct ChainApi {
    invoke_use_case: Arc<dyn InvokeChainUseCase>,
    batch_use_case: Arc<dyn BatchInvokeChainUseCase>,
}

impl ChainApi {
    pub fn new(
        invoke_use_case: Arc<dyn InvokeChainUseCase>,
        batch_use_case: Arc<dyn BatchInvokeChainUseCase>,
    ) -> Self {
        Self {
            invoke_use_case,
            batch_use_case,
        }
    }
}

/// Chat chain API
///
/// Runs the configured prompt through the chat model and returns the reply as plain text.
#[OpenApi(prefix_path = "/chain")]
impl ChainApi {
    /// Invoke the chain
    ///
    /// Renders the prompt with `input`, calls the model once and returns its reply.
    #[oai(path = "/invoke", method = "post", tag = "ApiTags::Chain")]
    async fn invoke(&self, body: Json<InvokeRequest>) -> InvokeChainResponse {
        let params = InvokeChainParams { input: body.0.input };

        match self.invoke_use_case.execute(params).await {
            Ok(output) => InvokeChainResponse::Ok(Json(output.into())),
            Err(err) => ChainFailure::from(err).into(),
        }
    }

    /// Invoke the chain for several inputs
    ///
    /// Runs concurrently; outputs come back in input order. Any failing input fails the call.
    #[oai(path = "/batch", method = "post", tag = "ApiTags::Chain")]
    async fn batch(&self, body: Json<BatchRequest>) -> BatchChainResponse {
        let params = BatchInvokeChainParams {
            inputs: body.0.inputs,
        };

        match self.batch_use_case.execute(params).await {
            Ok(outputs) => BatchChainResponse::Ok(Json(outputs.into())),
            Err(err) => ChainFailure::from(err).into(),
        }
    }

    /// Input schema
    ///
    /// JSON Schema of the `input` object accepted by `/chain/invoke`.
    #[oai(path = "/input_schema", method = "get", tag = "ApiTags::Chain")]
    async fn input_schema(&self) -> Json<Value> {
        Json(input_schema(&self.invoke_use_case.input_variables()))
    }

    /// Output schema
    #[oai(path = "/output_schema", method = "get", tag = "ApiTags::Chain")]
    async fn output_schema(&self) -> Json<Value> {
        Json(output_schema())
    }
}

#[derive(ApiResponse)]
pub enum InvokeChainResponse {
    #[oai(status = 200)]
    Ok(Json<InvokeResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ChainFailure> for InvokeChainResponse {
    fn from(failure: ChainFailure) -> Self {
        match failure {
            ChainFailure::UnprocessableEntity(json) => Self::UnprocessableEntity(json),
            ChainFailure::TooManyRequests(json) => Self::TooManyRequests(json),
            ChainFailure::BadGateway(json) => Self::BadGateway(json),
            ChainFailure::InternalError(json) => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum BatchChainResponse {
    #[oai(status = 200)]
    Ok(Json<BatchResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ChainFailure> for BatchChainResponse {
    fn from(failure: ChainFailure) -> Self {
        match failure {
            ChainFailure::UnprocessableEntity(json) => Self::UnprocessableEntity(json),
            ChainFailure::TooManyRequests(json) => Self::TooManyRequests(json),
            ChainFailure::BadGateway(json) => Self::BadGateway(json),
            ChainFailure::InternalError(json) => Self::InternalError(json),
        }
    }
}
