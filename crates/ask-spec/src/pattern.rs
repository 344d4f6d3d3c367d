use std::fmt;

use regex::Regex;
use thiserror::Error;

/// Full-string regular expression gate for text answers.
#[derive(Clone)]
pub struct PatternValidator {
    pattern: String,
    regex: Regex,
}

/// Raised when a text answer does not fully match its pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PatternMismatch {
    pub message: String,
    /// Character offset of the diagnostic; always the end of the input.
    pub position: usize,
}

impl PatternValidator {
    /// Compiles `pattern` anchored at both ends of the input.
    ///
    /// Validity is judged on `pattern` as written, before any anchoring.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        let regex = match Regex::new(&format!(r"\A(?:{})\z", pattern)) {
            Ok(regex) => regex,
            // A trailing `(?x)` comment swallowed the closing group; end it first.
            Err(_) => Regex::new(&format!("\\A(?:{}\n)\\z", pattern))?,
        };
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn check(&self, text: &str) -> Result<(), PatternMismatch> {
        if self.is_match(text) {
            Ok(())
        } else {
            Err(PatternMismatch {
                message: format!("Input does not match the required format: {}", self.pattern),
                position: text.chars().count(),
            })
        }
    }
}

impl fmt::Debug for PatternValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PatternValidator")
            .field(&self.pattern)
            .finish()
    }
}
