use super::errors::ChainError;
use super::model::ChatMessage;

/// Turns a model reply into the chain's final output.
pub trait OutputParser: Send + Sync {
    fn parse(&self, message: &ChatMessage) -> Result<String, ChainError>;
}

/// Returns the reply content verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrOutputParser;

impl OutputParser for StrOutputParser {
    fn parse(&self, message: &ChatMessage) -> Result<String, ChainError> {
        if message.content.is_empty() {
            return Err(ChainError::EmptyResponse);
        }
        Ok(message.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_content_verbatim() {
        let parsed = StrOutputParser.parse(&ChatMessage::ai("  Ciao!\n")).unwrap();
        assert_eq!(parsed, "  Ciao!\n");
    }

    #[test]
    fn should_fail_on_empty_content() {
        let result = StrOutputParser.parse(&ChatMessage::ai(""));
        assert_eq!(result, Err(ChainError::EmptyResponse));
    }
}
