//! The seam between the prompt runner and whatever asks the user.
//!
//! Terminal rendering lives outside this crate; tests and non-interactive runs
//! use [`ScriptedInteraction`], which answers from a prepared table.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::pattern::{PatternMismatch, PatternValidator};

/// Something that can put a question to the user and return the answer.
///
/// Each method returns `Ok(None)` when the user cancels the prompt. Errors are
/// reserved for failures of the interaction layer itself.
pub trait Interaction {
    type Error: std::error::Error + Send + Sync + 'static;

    fn select(
        &mut self,
        name: &str,
        message: &str,
        choices: &[String],
    ) -> Result<Option<String>, Self::Error>;

    fn confirm(&mut self, name: &str, message: &str) -> Result<Option<bool>, Self::Error>;

    /// Free-text entry; when `pattern` is set only matching input is accepted.
    fn text(
        &mut self,
        name: &str,
        message: &str,
        pattern: Option<&PatternValidator>,
    ) -> Result<Option<String>, Self::Error>;
}

/// Errors raised by [`ScriptedInteraction`].
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("no scripted answer for '{0}'")]
    MissingAnswer(String),
    #[error("scripted answer for '{name}' must be {expected}")]
    WrongType { name: String, expected: &'static str },
    #[error("scripted answer '{choice}' for '{name}' is not one of the choices")]
    UnknownChoice { name: String, choice: String },
    #[error("scripted answer for '{name}' was rejected: {source}")]
    Rejected {
        name: String,
        #[source]
        source: PatternMismatch,
    },
    #[error("scripted answers must be a mapping of question name to answer")]
    NotAMapping,
    #[error("failed to read answers file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid answers file: {0}")]
    Syntax(#[from] serde_yaml::Error),
}

/// Answers prompts from a fixed table keyed by question name.
///
/// A `null` entry stands for a cancelled prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    answers: HashMap<String, Value>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.answers.insert(name.into(), value.into());
        self
    }

    /// Scripts the prompt `name` as cancelled by the user.
    pub fn with_cancel(self, name: impl Into<String>) -> Self {
        self.with_answer(name, Value::Null)
    }

    pub fn from_value(document: Value) -> Result<Self, ScriptError> {
        match document {
            Value::Object(map) => Ok(Self {
                answers: map.into_iter().collect(),
            }),
            _ => Err(ScriptError::NotAMapping),
        }
    }

    /// Reads a YAML or JSON mapping of answers from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_yaml::from_str(&contents)?;
        Self::from_value(document)
    }

    fn answer(&self, name: &str) -> Result<&Value, ScriptError> {
        self.answers
            .get(name)
            .ok_or_else(|| ScriptError::MissingAnswer(name.to_string()))
    }
}

impl Interaction for ScriptedInteraction {
    type Error = ScriptError;

    fn select(
        &mut self,
        name: &str,
        _message: &str,
        choices: &[String],
    ) -> Result<Option<String>, Self::Error> {
        match self.answer(name)? {
            Value::Null => Ok(None),
            Value::String(choice) if choices.contains(choice) => Ok(Some(choice.clone())),
            Value::String(choice) => Err(ScriptError::UnknownChoice {
                name: name.to_string(),
                choice: choice.clone(),
            }),
            _ => Err(ScriptError::WrongType {
                name: name.to_string(),
                expected: "a string",
            }),
        }
    }

    fn confirm(&mut self, name: &str, _message: &str) -> Result<Option<bool>, Self::Error> {
        match self.answer(name)? {
            Value::Null => Ok(None),
            Value::Bool(flag) => Ok(Some(*flag)),
            _ => Err(ScriptError::WrongType {
                name: name.to_string(),
                expected: "a boolean",
            }),
        }
    }

    fn text(
        &mut self,
        name: &str,
        _message: &str,
        pattern: Option<&PatternValidator>,
    ) -> Result<Option<String>, Self::Error> {
        let text = match self.answer(name)? {
            Value::Null => return Ok(None),
            Value::String(text) => text.clone(),
            _ => {
                return Err(ScriptError::WrongType {
                    name: name.to_string(),
                    expected: "a string",
                });
            }
        };
        if let Some(pattern) = pattern {
            pattern.check(&text).map_err(|source| ScriptError::Rejected {
                name: name.to_string(),
                source,
            })?;
        }
        Ok(Some(text))
    }
}
