use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::pattern::PatternValidator;
use crate::spec::profile::Profile;
use crate::spec::question::{QuestionDefinition, QuestionKind, QuestionType};

/// A single structural problem found in a question definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    #[error("definition must be a mapping of fields")]
    NotAMapping,
    #[error("missing required fields (type, name, message)")]
    MissingFields,
    #[error("'{field}' must be a string")]
    NotAString { field: &'static str },
    #[error("unsupported type '{found}'; only {allowed} are allowed")]
    UnsupportedType { found: String, allowed: String },
    #[error("'select' type must include a non-empty 'choices' list")]
    MissingChoices,
    #[error("choice {position} must be a string")]
    ChoiceNotString { position: usize },
    #[error("'validate' must be a string pattern")]
    PatternNotString,
    #[error("invalid 'validate' pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("duplicate question name '{name}'")]
    DuplicateName { name: String },
}

impl SchemaIssue {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaIssue::NotAMapping => "not_a_mapping",
            SchemaIssue::MissingFields => "missing_fields",
            SchemaIssue::NotAString { .. } => "not_a_string",
            SchemaIssue::UnsupportedType { .. } => "unsupported_type",
            SchemaIssue::MissingChoices => "missing_choices",
            SchemaIssue::ChoiceNotString { .. } => "choice_not_string",
            SchemaIssue::PatternNotString => "pattern_not_string",
            SchemaIssue::InvalidPattern { .. } => "invalid_pattern",
            SchemaIssue::DuplicateName { .. } => "duplicate_name",
        }
    }
}

/// Every issue found for the definition at `index` (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuestion {
    pub index: usize,
    pub issues: Vec<SchemaIssue>,
}

impl fmt::Display for InvalidQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issues = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "Question {}: {}", self.index, issues.join("; "))
    }
}

impl std::error::Error for InvalidQuestion {}

/// Checks one raw question definition against `profile`.
///
/// All checks run even after one fails so that a single pass reports every
/// problem with the definition. On success the typed definition is returned.
pub fn validate_question(
    raw: &Value,
    index: usize,
    profile: &Profile,
) -> Result<QuestionDefinition, InvalidQuestion> {
    let Some(record) = raw.as_object() else {
        return Err(InvalidQuestion {
            index,
            issues: vec![SchemaIssue::NotAMapping],
        });
    };

    let mut issues = Vec::new();

    let type_value = record.get("type");
    let required = [type_value, record.get("name"), record.get("message")];
    if !required
        .iter()
        .all(|value| value.is_some_and(is_truthy))
    {
        issues.push(SchemaIssue::MissingFields);
    }

    let name = string_field(record, "name", &mut issues);
    let message = string_field(record, "message", &mut issues);

    let type_label = type_value.and_then(Value::as_str);
    let question_type = match type_label.and_then(|label| label.parse::<QuestionType>().ok()) {
        Some(kind) if profile.allows(kind) => Some(kind),
        _ => {
            issues.push(SchemaIssue::UnsupportedType {
                found: describe_value(type_value),
                allowed: profile.describe_allowed(),
            });
            None
        }
    };

    let choices = if type_label == Some(QuestionType::Select.as_str()) {
        select_choices(record.get("choices"), &mut issues)
    } else {
        None
    };

    let pattern = if type_label == Some(QuestionType::Text.as_str())
        && profile.allows(QuestionType::Text)
    {
        text_pattern(record.get("validate"), &mut issues)
    } else {
        None
    };

    match (question_type, name, message) {
        (Some(question_type), Some(name), Some(message)) if issues.is_empty() => {
            let kind = match question_type {
                QuestionType::Select => QuestionKind::Select {
                    choices: choices.unwrap_or_default(),
                },
                QuestionType::Confirm => QuestionKind::Confirm,
                QuestionType::Text => QuestionKind::Text { pattern },
            };
            Ok(QuestionDefinition {
                name: name.to_string(),
                message: message.to_string(),
                kind,
            })
        }
        _ => Err(InvalidQuestion { index, issues }),
    }
}

/// Boolean form of [`validate_question`].
pub fn is_valid_question(raw: &Value, index: usize, profile: &Profile) -> bool {
    validate_question(raw, index, profile).is_ok()
}

/// Whether a document value counts as "provided" for a required field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn string_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<&'a str> {
    match record.get(field) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.as_str()),
        Some(value) if is_truthy(value) && !value.is_string() => {
            issues.push(SchemaIssue::NotAString { field });
            None
        }
        _ => None,
    }
}

fn select_choices(value: Option<&Value>, issues: &mut Vec<SchemaIssue>) -> Option<Vec<String>> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            issues.push(SchemaIssue::MissingChoices);
            return None;
        }
    };

    let mut choices = Vec::with_capacity(items.len());
    for (offset, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(label) => choices.push(label.to_string()),
            None => issues.push(SchemaIssue::ChoiceNotString {
                position: offset + 1,
            }),
        }
    }
    Some(choices)
}

fn text_pattern(
    value: Option<&Value>,
    issues: &mut Vec<SchemaIssue>,
) -> Option<PatternValidator> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(pattern)) if pattern.is_empty() => None,
        Some(Value::String(pattern)) => match PatternValidator::new(pattern) {
            Ok(validator) => Some(validator),
            Err(err) => {
                issues.push(SchemaIssue::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: err.to_string(),
                });
                None
            }
        },
        Some(_) => {
            issues.push(SchemaIssue::PatternNotString);
            None
        }
    }
}

fn describe_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_with_choices_is_valid() {
        let raw = json!({
            "type": "select",
            "name": "env",
            "message": "Pick env",
            "choices": ["dev", "prod"]
        });
        let definition = validate_question(&raw, 1, &Profile::SELECT_CONFIRM).unwrap();
        assert_eq!(definition.name, "env");
        match definition.kind {
            QuestionKind::Select { choices } => assert_eq!(choices, vec!["dev", "prod"]),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn empty_choices_are_rejected() {
        let raw = json!({ "type": "select", "name": "env", "message": "Pick", "choices": [] });
        let err = validate_question(&raw, 3, &Profile::SELECT_TEXT).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.issues, vec![SchemaIssue::MissingChoices]);
    }

    #[test]
    fn all_issues_are_reported_together() {
        let raw = json!({ "type": "radio", "message": "" });
        let err = validate_question(&raw, 2, &Profile::SELECT_CONFIRM).unwrap_err();
        let codes = err.issues.iter().map(SchemaIssue::code).collect::<Vec<_>>();
        assert_eq!(codes, vec!["missing_fields", "unsupported_type"]);
        assert!(err.to_string().starts_with("Question 2: "));
        assert!(err.to_string().contains("'radio'"));
    }

    #[test]
    fn missing_type_is_also_unsupported() {
        let raw = json!({ "name": "env", "message": "Pick" });
        let err = validate_question(&raw, 1, &Profile::SELECT_CONFIRM).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                SchemaIssue::MissingFields,
                SchemaIssue::UnsupportedType {
                    found: "None".into(),
                    allowed: "'select' and 'confirm'".into(),
                },
            ]
        );
    }

    #[test]
    fn type_whitelist_depends_on_profile() {
        let confirm = json!({ "type": "confirm", "name": "ok", "message": "Continue?" });
        assert!(is_valid_question(&confirm, 1, &Profile::SELECT_CONFIRM));
        assert!(!is_valid_question(&confirm, 1, &Profile::SELECT_TEXT));

        let text = json!({ "type": "text", "name": "host", "message": "Host?" });
        assert!(is_valid_question(&text, 1, &Profile::SELECT_TEXT));
        assert!(!is_valid_question(&text, 1, &Profile::SELECT_CONFIRM));
    }

    #[test]
    fn uncompilable_pattern_is_reported_not_raised() {
        let raw = json!({
            "type": "text",
            "name": "code",
            "message": "Code?",
            "validate": "([a-z]"
        });
        let err = validate_question(&raw, 1, &Profile::SELECT_TEXT).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].code(), "invalid_pattern");
    }

    #[test]
    fn text_pattern_is_attached() {
        let raw = json!({
            "type": "text",
            "name": "port",
            "message": "Port?",
            "validate": "\\d+"
        });
        let definition = validate_question(&raw, 1, &Profile::SELECT_TEXT).unwrap();
        match definition.kind {
            QuestionKind::Text {
                pattern: Some(pattern),
            } => assert_eq!(pattern.pattern(), "\\d+"),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn non_string_fields_are_rejected() {
        let raw = json!({
            "type": "select",
            "name": 7,
            "message": "Pick",
            "choices": ["a", 2]
        });
        let err = validate_question(&raw, 1, &Profile::SELECT_CONFIRM).unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                SchemaIssue::NotAString { field: "name" },
                SchemaIssue::ChoiceNotString { position: 2 },
            ]
        );
    }

    #[test]
    fn scalar_definition_is_not_a_mapping() {
        let err = validate_question(&json!("select"), 4, &Profile::SELECT_CONFIRM).unwrap_err();
        assert_eq!(err.issues, vec![SchemaIssue::NotAMapping]);
    }

    #[test]
    fn truthiness_matches_document_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(true)));
    }
}
