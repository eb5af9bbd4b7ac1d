use std::sync::Arc;

use logger::TracingLogger;
use secrecy::ExposeSecret;

use gemini::chat_model::ChatModelGemini;
use gemini::client::GeminiClient;

use business::application::chat::batch::BatchInvokeChainUseCaseImpl;
use business::application::chat::invoke::InvokeChainUseCaseImpl;
use business::domain::chat::parser::StrOutputParser;
use business::domain::chat::services::ChatModelService;
use business::domain::logger::Logger;

use crate::api::chain::routes::ChainApi;
use crate::api::health::routes::HealthApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub chain_api: ChainApi,
}

impl DependencyContainer {
    /// Builds every collaborator from an already validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("chain"));
        log_startup(&logger, config);

        // Infrastructure adapters
        let gemini_client =
            GeminiClient::new(config.gemini.api_key.clone(), config.gemini.base_url.clone());
        let chat_model: Arc<dyn ChatModelService> = Arc::new(ChatModelGemini::new(
            gemini_client,
            config.gemini.model.clone(),
            config.gemini.temperature,
        ));

        // Chain use cases
        let invoke_use_case = Arc::new(InvokeChainUseCaseImpl {
            prompt: config.chain.prompt.clone(),
            model: chat_model.clone(),
            parser: Arc::new(StrOutputParser),
            logger: logger.clone(),
        });
        let batch_use_case = Arc::new(BatchInvokeChainUseCaseImpl {
            chain: invoke_use_case.clone(),
            logger,
        });

        Self {
            health_api: HealthApi::new(chat_model.model_name()),
            chain_api: ChainApi::new(invoke_use_case, batch_use_case),
        }
    }
}

fn log_startup(logger: &TracingLogger, config: &AppConfig) {
    logger.info(&format!(
        "LangChain credentials loaded for project '{}' ({} char key)",
        config.langchain.project,
        config.langchain.api_key.expose_secret().len()
    ));
    logger.info(&format!(
        "Chain prompt expects input variables {:?}",
        config.chain.prompt.input_variables()
    ));
}
