use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::answers::AnswerSet;

/// Answer key holding the substation load pairs.
pub const LOAD_PAIRS_KEY: &str = "UWLastPaare";

/// One `KEY=VALUE` entry of a load-pair answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPair {
    #[serde(rename = "type")]
    pub kind: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadPairError {
    #[error("answer 'UWLastPaare' is missing")]
    MissingKey,
    #[error("answer 'UWLastPaare' must be text")]
    NotText,
    #[error("segment '{segment}' must have the form KEY=VALUE")]
    MalformedSegment { segment: String },
}

/// Parses `SE=15MW,N=20MW` into ordered `{type, last}` records.
///
/// Segments are split on `,`; each one must contain exactly one `=`.
/// Whitespace around keys and values is trimmed.
pub fn parse_load_pairs(text: &str) -> Result<Vec<LoadPair>, LoadPairError> {
    text.split(',')
        .map(|segment| match segment.split_once('=') {
            Some((kind, last)) if !last.contains('=') => Ok(LoadPair {
                kind: kind.trim().to_string(),
                last: last.trim().to_string(),
            }),
            _ => Err(LoadPairError::MalformedSegment {
                segment: segment.to_string(),
            }),
        })
        .collect()
}

/// Reads and parses the [`LOAD_PAIRS_KEY`] answer.
pub fn load_pairs_from_answers(answers: &AnswerSet) -> Result<Vec<LoadPair>, LoadPairError> {
    match answers.get(LOAD_PAIRS_KEY) {
        None => Err(LoadPairError::MissingKey),
        Some(Value::String(text)) => parse_load_pairs(text),
        Some(_) => Err(LoadPairError::NotText),
    }
}
