use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Fatal problems reading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found or unreadable: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid YAML syntax in {origin}: {source}")]
    Syntax {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Configuration must contain a top-level 'questions' list.")]
    MissingQuestions,
}

/// Raw question definitions in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    pub questions: Vec<Value>,
}

impl Configuration {
    /// Reads and parses the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "read configuration");
        Self::parse(&contents, &path.display().to_string())
    }

    /// Parses a YAML (or JSON) document; `origin` names it in diagnostics.
    pub fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let document: Value =
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Syntax {
                origin: origin.to_string(),
                source,
            })?;
        Self::from_value(document)
    }

    /// Extracts the `questions` sequence from an already-parsed document.
    pub fn from_value(document: Value) -> Result<Self, ConfigError> {
        match document {
            Value::Object(mut map) => match map.remove("questions") {
                Some(Value::Array(questions)) => {
                    debug!(count = questions.len(), "loaded question definitions");
                    Ok(Self { questions })
                }
                _ => Err(ConfigError::MissingQuestions),
            },
            _ => Err(ConfigError::MissingQuestions),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_questions_sequence() {
        let config = Configuration::parse(
            "questions:\n  - type: confirm\n    name: ok\n    message: Continue?\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.questions[0]["name"], "ok");
    }

    #[test]
    fn empty_questions_list_is_structurally_valid() {
        let config = Configuration::parse("questions: []", "inline").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn questions_must_be_a_sequence() {
        let err = Configuration::parse("questions:\n  env: dev\n", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::MissingQuestions));
    }

    #[test]
    fn document_must_be_a_mapping() {
        for document in ["- a\n- b\n", "just text", "42"] {
            let err = Configuration::parse(document, "inline").unwrap_err();
            assert!(matches!(err, ConfigError::MissingQuestions), "{document:?}");
        }
    }

    #[test]
    fn syntax_errors_keep_parser_detail() {
        let err = Configuration::parse("questions: [\n  - oops", "broken.yaml").unwrap_err();
        match err {
            ConfigError::Syntax { origin, source } => {
                assert_eq!(origin, "broken.yaml");
                assert!(!source.to_string().is_empty());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn json_documents_are_accepted() {
        let config =
            Configuration::parse(r#"{"questions": [{"type": "select"}]}"#, "inline").unwrap();
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "questions:\n  - type: select").unwrap();
        let config = Configuration::load(file.path()).unwrap();
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Configuration::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
