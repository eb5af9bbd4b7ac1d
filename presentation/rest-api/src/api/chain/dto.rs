use std::collections::HashMap;

use poem_openapi::Object;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use business::domain::chat::model::ChainOutput;

#[derive(Debug, Clone, Object)]
pub struct InvokeRequest {
    /// Values for every prompt variable, keyed by variable name
    pub input: HashMap<String, String>,
}

#[derive(Debug, Clone, Object)]
pub struct BatchRequest {
    /// One input map per run
    pub inputs: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Object)]
pub struct RunMetadata {
    /// Identifier of this run, also present in server logs
    pub run_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct InvokeResponse {
    /// Parsed model reply
    pub output: String,
    pub metadata: RunMetadata,
}

impl From<ChainOutput> for InvokeResponse {
    fn from(o: ChainOutput) -> Self {
        Self {
            output: o.output,
            metadata: RunMetadata { run_id: o.run_id },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BatchMetadata {
    /// Run identifiers, in the same order as `output`
    pub run_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct BatchResponse {
    /// Parsed model replies, in input order
    pub output: Vec<String>,
    pub metadata: BatchMetadata,
}

impl From<Vec<ChainOutput>> for BatchResponse {
    fn from(outputs: Vec<ChainOutput>) -> Self {
        let (output, run_ids) = outputs.into_iter().map(|o| (o.output, o.run_id)).unzip();
        Self {
            output,
            metadata: BatchMetadata { run_ids },
        }
    }
}

/// JSON Schema describing the object `InvokeRequest::input` must be.
pub fn input_schema(variables: &[String]) -> Value {
    let properties: Map<String, Value> = variables
        .iter()
        .map(|name| {
            (
                name.clone(),
                json!({"title": title_case(name), "type": "string"}),
            )
        })
        .collect();

    json!({
        "title": "PromptInput",
        "type": "object",
        "properties": properties,
        "required": variables,
    })
}

/// JSON Schema of the chain output.
pub fn output_schema() -> Value {
    json!({"title": "StrOutputParserOutput", "type": "string"})
}

fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
