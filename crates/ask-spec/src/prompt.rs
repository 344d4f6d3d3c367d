use serde_json::Value;

use crate::interaction::Interaction;
use crate::pattern::PatternValidator;

/// Type-specific part of an executable prompt.
#[derive(Debug, Clone)]
pub enum PromptKind {
    /// Single choice over ordered labels.
    Select { choices: Vec<String> },
    /// Yes/no question.
    Confirm,
    /// Free text, optionally gated by a full-match pattern.
    Text { validator: Option<PatternValidator> },
}

/// A built prompt, ready to be asked once.
#[derive(Debug, Clone)]
pub struct Prompt {
    name: String,
    message: String,
    kind: PromptKind,
}

impl Prompt {
    pub(crate) fn new(name: String, message: String, kind: PromptKind) -> Self {
        Self {
            name,
            message,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &PromptKind {
        &self.kind
    }

    pub fn into_name(self) -> String {
        self.name
    }

    /// Asks the prompt through `interaction`.
    ///
    /// Text and selection answers become strings, confirmations booleans, and a
    /// cancelled prompt becomes `null`.
    pub fn ask<I: Interaction>(&self, interaction: &mut I) -> Result<Value, I::Error> {
        let value = match &self.kind {
            PromptKind::Select { choices } => interaction
                .select(&self.name, &self.message, choices)?
                .map(Value::String),
            PromptKind::Confirm => interaction
                .confirm(&self.name, &self.message)?
                .map(Value::Bool),
            PromptKind::Text { validator } => interaction
                .text(&self.name, &self.message, validator.as_ref())?
                .map(Value::String),
        };
        Ok(value.unwrap_or(Value::Null))
    }
}
