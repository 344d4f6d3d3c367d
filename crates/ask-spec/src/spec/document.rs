use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::question::QuestionType;

/// Typed shape of a configuration document, used to publish its JSON Schema.
///
/// Loading never deserializes into this type directly; the schema validator
/// works on the untyped document so that every problem can be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigDocument {
    pub questions: Vec<QuestionRecord>,
}

/// One question as written in the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Key of the answer in the collected results.
    pub name: String,
    /// Text shown to the user.
    pub message: String,
    /// Required and non-empty for `select` questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Regular expression a `text` answer must fully match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate: Option<String>,
}

/// JSON Schema describing the configuration document.
pub fn document_schema() -> Value {
    schema_for!(ConfigDocument).to_value()
}
