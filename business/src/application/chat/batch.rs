use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::domain::chat::errors::ChainError;
use crate::domain::chat::model::ChainOutput;
use crate::domain::chat::use_cases::batch::{
    BatchInvokeChainParams, BatchInvokeChainUseCase, MAX_BATCH_SIZE,
};
use crate::domain::chat::use_cases::invoke::{InvokeChainParams, InvokeChainUseCase};
use crate::domain::logger::Logger;

pub struct BatchInvokeChainUseCaseImpl {
    pub chain: Arc<dyn InvokeChainUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BatchInvokeChainUseCase for BatchInvokeChainUseCaseImpl {
    async fn execute(
        &self,
        params: BatchInvokeChainParams,
    ) -> Result<Vec<ChainOutput>, ChainError> {
        let size = params.inputs.len();
        if size > MAX_BATCH_SIZE {
            self.logger.warn(&format!(
                "Rejected batch of {} inputs (max {})",
                size, MAX_BATCH_SIZE
            ));
            return Err(ChainError::BatchTooLarge {
                size,
                max: MAX_BATCH_SIZE,
            });
        }

        if size == 0 {
            return Ok(vec![]);
        }

        self.logger.info(&format!("Running batch of {} inputs", size));

        // try_join_all keeps input order and stops at the first error
        let outputs = try_join_all(
            params
                .inputs
                .into_iter()
                .map(|input| self.chain.execute(InvokeChainParams { input })),
        )
        .await?;

        self.logger
            .info(&format!("Batch of {} inputs finished", outputs.len()));

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::model::ChainInput;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Chain {}

        #[async_trait]
        impl InvokeChainUseCase for Chain {
            async fn execute(&self, params: InvokeChainParams) -> Result<ChainOutput, ChainError>;
            fn input_variables(&self) -> Vec<String>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn text_input(text: &str) -> ChainInput {
        ChainInput::from([("text".to_string(), text.to_string())])
    }

    fn echo_chain() -> MockChain {
        let mut chain = MockChain::new();
        chain.expect_execute().returning(|params| {
            Ok(ChainOutput {
                output: params.input["text"].to_uppercase(),
                run_id: Uuid::new_v4(),
            })
        });
        chain
    }

    #[tokio::test]
    async fn should_return_outputs_in_input_order() {
        let use_case = BatchInvokeChainUseCaseImpl {
            chain: Arc::new(echo_chain()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BatchInvokeChainParams {
                inputs: vec![text_input("a"), text_input("b"), text_input("c")],
            })
            .await
            .unwrap();

        let outputs: Vec<_> = result.into_iter().map(|o| o.output).collect();
        assert_eq!(outputs, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn should_return_empty_without_invoking_chain() {
        let mut chain = MockChain::new();
        chain.expect_execute().never();

        let use_case = BatchInvokeChainUseCaseImpl {
            chain: Arc::new(chain),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BatchInvokeChainParams { inputs: vec![] })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_batch_over_limit() {
        let mut chain = MockChain::new();
        chain.expect_execute().never();

        let use_case = BatchInvokeChainUseCaseImpl {
            chain: Arc::new(chain),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BatchInvokeChainParams {
                inputs: vec![text_input("x"); MAX_BATCH_SIZE + 1],
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            ChainError::BatchTooLarge {
                size: MAX_BATCH_SIZE + 1,
                max: MAX_BATCH_SIZE
            }
        );
    }

    #[tokio::test]
    async fn should_fail_whole_batch_when_one_input_fails() {
        let mut chain = MockChain::new();
        chain.expect_execute().returning(|params| {
            if params.input.contains_key("text") {
                Ok(ChainOutput {
                    output: "ok".to_string(),
                    run_id: Uuid::new_v4(),
                })
            } else {
                Err(ChainError::missing_input_variable("text"))
            }
        });

        let use_case = BatchInvokeChainUseCaseImpl {
            chain: Arc::new(chain),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BatchInvokeChainParams {
                inputs: vec![text_input("a"), ChainInput::new()],
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            ChainError::MissingInputVariable("text".to_string())
        );
    }
}
