use async_trait::async_trait;

use crate::domain::chat::errors::ChainError;
use crate::domain::chat::model::{ChainInput, ChainOutput};

/// Upper bound on inputs accepted by one batch call.
pub const MAX_BATCH_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct BatchInvokeChainParams {
    pub inputs: Vec<ChainInput>,
}

#[async_trait]
pub trait BatchInvokeChainUseCase: Send + Sync {
    async fn execute(&self, params: BatchInvokeChainParams)
    -> Result<Vec<ChainOutput>, ChainError>;
}
