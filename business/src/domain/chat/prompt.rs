use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::ChainError;
use super::model::{ChainInput, ChatMessage, MessageRole};

/// Matches, in priority order: escaped braces, a `{placeholder}`, or a stray brace.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("token pattern is valid")
});

static VARIABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("variable pattern is valid")
});

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Variable(String),
}

/// A single message of a chat prompt, parsed once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTemplate {
    role: MessageRole,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    pub fn new(role: MessageRole, template: &str) -> Result<Self, ChainError> {
        Ok(Self {
            role,
            segments: parse_segments(template)?,
        })
    }

    fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    fn render(&self, input: &ChainInput) -> Result<ChatMessage, ChainError> {
        let mut content = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => content.push_str(text),
                Segment::Variable(name) => {
                    let value = input
                        .get(name)
                        .ok_or_else(|| ChainError::missing_input_variable(name))?;
                    content.push_str(value);
                }
            }
        }
        Ok(ChatMessage::new(self.role, content))
    }
}

/// Ordered list of message templates rendered into a conversation.
///
/// Placeholders use `{name}`; `{{` and `}}` render as literal braces.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPromptTemplate {
    messages: Vec<MessageTemplate>,
}

impl ChatPromptTemplate {
    pub fn from_messages<S: AsRef<str>>(
        messages: Vec<(MessageRole, S)>,
    ) -> Result<Self, ChainError> {
        let mut templates = messages
            .into_iter()
            .map(|(role, template)| MessageTemplate::new(role, template.as_ref()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        let first = templates
            .next()
            .ok_or_else(|| ChainError::invalid_template("prompt has no messages"))?;
        Ok(Self::from_templates(first, templates))
    }

    /// Builds a prompt from templates that are already parsed.
    pub fn from_templates(
        first: MessageTemplate,
        rest: impl IntoIterator<Item = MessageTemplate>,
    ) -> Self {
        let mut messages = vec![first];
        messages.extend(rest);
        Self { messages }
    }

    /// Sorted, de-duplicated placeholder names across all messages.
    pub fn input_variables(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|m| m.variables())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Renders every message. Keys in `input` that no placeholder uses are ignored.
    pub fn format_messages(&self, input: &ChainInput) -> Result<Vec<ChatMessage>, ChainError> {
        self.messages.iter().map(|m| m.render(input)).collect()
    }
}

fn parse_segments(template: &str) -> Result<Vec<Segment>, ChainError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut last = 0;

    for caps in TOKEN.captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        text.push_str(&template[last..token.start()]);
        last = token.end();

        match token.as_str() {
            "{{" => text.push('{'),
            "}}" => text.push('}'),
            _ => {
                let Some(inner) = caps.get(1) else {
                    return Err(ChainError::invalid_template(format!(
                        "unbalanced brace at offset {}",
                        token.start()
                    )));
                };
                let name = inner.as_str().trim();
                if !VARIABLE_NAME.is_match(name) {
                    return Err(ChainError::invalid_template(format!(
                        "invalid placeholder '{{{}}}'",
                        inner.as_str()
                    )));
                }
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Variable(name.to_string()));
            }
        }
    }

    text.push_str(&template[last..]);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    Ok(segments)
}
