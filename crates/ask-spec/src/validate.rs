use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::schema::{InvalidQuestion, SchemaIssue, validate_question};
use crate::spec::profile::Profile;
use crate::spec::question::QuestionDefinition;

/// Knobs for whole-configuration validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject configurations where two questions share a `name`.
    pub reject_duplicate_names: bool,
}

/// Definitions that passed validation, in document order.
///
/// Only [`validate_all`] constructs this type, which is what lets the prompt
/// builder skip any checks of its own.
#[derive(Debug, Clone)]
pub struct ValidatedConfiguration {
    questions: Vec<QuestionDefinition>,
}

impl ValidatedConfiguration {
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<QuestionDefinition> {
        self.questions
    }
}

/// Every invalid definition found in a configuration, one entry per definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub invalid: Vec<InvalidQuestion>,
}

impl ValidationReport {
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} questions are invalid",
            self.invalid.len(),
            self.total
        )
    }
}

impl std::error::Error for ValidationReport {}

/// Runs the schema validator over every definition in `config`.
///
/// Failures do not stop the pass; if any definition is invalid the whole
/// configuration is rejected and no subset is kept.
pub fn validate_all(
    config: &Configuration,
    profile: &Profile,
    options: &ValidationOptions,
) -> Result<ValidatedConfiguration, ValidationReport> {
    let mut questions = Vec::with_capacity(config.len());
    let mut invalid: Vec<InvalidQuestion> = Vec::new();
    let mut seen_names = BTreeSet::new();

    for (offset, raw) in config.questions.iter().enumerate() {
        let index = offset + 1;
        let mut failure = match validate_question(raw, index, profile) {
            Ok(definition) => {
                questions.push(definition);
                None
            }
            Err(invalid_question) => Some(invalid_question),
        };

        if options.reject_duplicate_names
            && let Some(name) = raw.get("name").and_then(Value::as_str)
            && !name.is_empty()
            && !seen_names.insert(name.to_string())
        {
            failure
                .get_or_insert_with(|| InvalidQuestion {
                    index,
                    issues: Vec::new(),
                })
                .issues
                .push(SchemaIssue::DuplicateName {
                    name: name.to_string(),
                });
        }

        if let Some(invalid_question) = failure {
            warn!(index, issues = ?invalid_question.issues, "invalid question definition");
            invalid.push(invalid_question);
        }
    }

    if invalid.is_empty() {
        debug!(
            profile = profile.name(),
            count = questions.len(),
            "configuration validated"
        );
        Ok(ValidatedConfiguration { questions })
    } else {
        Err(ValidationReport {
            total: config.len(),
            invalid,
        })
    }
}
