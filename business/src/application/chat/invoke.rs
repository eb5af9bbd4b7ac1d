use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::chat::errors::ChainError;
use crate::domain::chat::model::ChainOutput;
use crate::domain::chat::parser::OutputParser;
use crate::domain::chat::prompt::ChatPromptTemplate;
use crate::domain::chat::services::ChatModelService;
use crate::domain::chat::use_cases::invoke::{InvokeChainParams, InvokeChainUseCase};
use crate::domain::logger::Logger;

/// `prompt -> model -> parser`.
pub struct InvokeChainUseCaseImpl {
    pub prompt: ChatPromptTemplate,
    pub model: Arc<dyn ChatModelService>,
    pub parser: Arc<dyn OutputParser>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InvokeChainUseCase for InvokeChainUseCaseImpl {
    async fn execute(&self, params: InvokeChainParams) -> Result<ChainOutput, ChainError> {
        let run_id = Uuid::new_v4();
        self.logger.info(&format!(
            "Chain run {} started with model {}",
            run_id,
            self.model.model_name()
        ));

        let messages = self.prompt.format_messages(&params.input).inspect_err(|e| {
            self.logger
                .warn(&format!("Chain run {} rejected input: {:?}", run_id, e));
        })?;

        let reply = self.model.invoke(&messages).await.inspect_err(|e| {
            self.logger
                .error(&format!("Chain run {} model call failed: {}", run_id, e));
        })?;

        let output = self.parser.parse(&reply)?;

        self.logger.info(&format!(
            "Chain run {} finished ({} chars)",
            run_id,
            output.chars().count()
        ));

        Ok(ChainOutput { output, run_id })
    }

    fn input_variables(&self) -> Vec<String> {
        self.prompt.input_variables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::model::{ChainInput, ChatMessage, MessageRole};
    use crate::domain::chat::parser::StrOutputParser;
    use mockall::mock;

    mock! {
        pub ChatModel {}

        #[async_trait]
        impl ChatModelService for ChatModel {
            async fn invoke(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChainError>;
            fn model_name(&self) -> &str;
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

    fn translation_prompt() -> ChatPromptTemplate {
        ChatPromptTemplate::from_messages(vec![
            (MessageRole::System, "Translate the following into {language}:"),
            (MessageRole::Human, "{text}"),
        ])
        .unwrap()
    }

    fn input(pairs: &[(&str, &str)]) -> ChainInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn use_case(model: MockChatModel) -> InvokeChainUseCaseImpl {
        InvokeChainUseCaseImpl {
            prompt: translation_prompt(),
            model: Arc::new(model),
            parser: Arc::new(StrOutputParser),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_parsed_output_when_model_replies() {
        let mut model = MockChatModel::new();
        model.expect_model_name().return_const("test-model".to_string());
        model
            .expect_invoke()
            .withf(|messages| {
                messages.len() == 2
                    && messages[0] == ChatMessage::new(MessageRole::System, "Translate the following into Italian:")
                    && messages[1] == ChatMessage::new(MessageRole::Human, "hi")
            })
            .returning(|_| Ok(ChatMessage::ai("ciao")));

        let result = use_case(model)
            .execute(InvokeChainParams {
                input: input(&[("language", "Italian"), ("text", "hi")]),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().output, "ciao");
    }

    #[tokio::test]
    async fn should_not_call_model_when_input_variable_missing() {
        let mut model = MockChatModel::new();
        model.expect_model_name().return_const("test-model".to_string());
        model.expect_invoke().never();

        let result = use_case(model)
            .execute(InvokeChainParams {
                input: input(&[("text", "hi")]),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            ChainError::MissingInputVariable("language".to_string())
        );
    }

    #[tokio::test]
    async fn should_propagate_model_errors() {
        let mut model = MockChatModel::new();
        model.expect_model_name().return_const("test-model".to_string());
        model
            .expect_invoke()
            .returning(|_| Err(ChainError::ModelRateLimited));

        let result = use_case(model)
            .execute(InvokeChainParams {
                input: input(&[("language", "Italian"), ("text", "hi")]),
            })
            .await;

        assert_eq!(result.unwrap_err(), ChainError::ModelRateLimited);
    }

    #[tokio::test]
    async fn should_fail_when_model_reply_is_empty() {
        let mut model = MockChatModel::new();
        model.expect_model_name().return_const("test-model".to_string());
        model.expect_invoke().returning(|_| Ok(ChatMessage::ai("")));

        let result = use_case(model)
            .execute(InvokeChainParams {
                input: input(&[("language", "Italian"), ("text", "hi")]),
            })
            .await;

        assert_eq!(result.unwrap_err(), ChainError::EmptyResponse);
    }

    #[tokio::test]
    async fn should_assign_distinct_run_ids() {
        let mut model = MockChatModel::new();
        model.expect_model_name().return_const("test-model".to_string());
        model.expect_invoke().returning(|_| Ok(ChatMessage::ai("ok")));
        let use_case = use_case(model);
        let params = || InvokeChainParams {
            input: input(&[("language", "Italian"), ("text", "hi")]),
        };

        let first = use_case.execute(params()).await.unwrap();
        let second = use_case.execute(params()).await.unwrap();

        assert_ne!(first.run_id, second.run_id);
    }

    #[test]
    fn should_expose_prompt_input_variables() {
        let use_case = use_case(MockChatModel::new());
        assert_eq!(use_case.input_variables(), vec!["language", "text"]);
    }
}
