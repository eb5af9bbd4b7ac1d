use async_trait::async_trait;

use crate::domain::chat::errors::ChainError;
use crate::domain::chat::model::{ChainInput, ChainOutput};

#[derive(Debug, Clone)]
pub struct InvokeChainParams {
    pub input: ChainInput,
}

#[async_trait]
pub trait InvokeChainUseCase: Send + Sync {
    async fn execute(&self, params: InvokeChainParams) -> Result<ChainOutput, ChainError>;

    /// Variables a caller must supply in `InvokeChainParams::input`.
    fn input_variables(&self) -> Vec<String>;
}
