use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pattern::PatternValidator;

/// Closed set of question types understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Select,
    Confirm,
    Text,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Select => "select",
            QuestionType::Confirm => "confirm",
            QuestionType::Text => "text",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "select" => Ok(QuestionType::Select),
            "confirm" => Ok(QuestionType::Confirm),
            "text" => Ok(QuestionType::Text),
            other => Err(format!("unknown question type '{}'", other)),
        }
    }
}

/// Type-specific payload of a validated question.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    Select { choices: Vec<String> },
    Confirm,
    Text { pattern: Option<PatternValidator> },
}

/// A question definition that passed schema validation.
///
/// Only the schema validator produces these, so every field is known to be
/// present and well-formed for the profile it was checked against.
#[derive(Debug, Clone)]
pub struct QuestionDefinition {
    pub name: String,
    pub message: String,
    pub kind: QuestionKind,
}
