#![allow(missing_docs)]

pub mod answers;
pub mod builder;
pub mod config;
pub mod interaction;
pub mod load_pairs;
pub mod pattern;
pub mod pipeline;
pub mod prompt;
pub mod runner;
pub mod schema;
pub mod spec;
pub mod validate;

pub use answers::{Answer, AnswerSet};
pub use builder::build_prompts;
pub use config::{ConfigError, Configuration};
pub use interaction::{Interaction, ScriptError, ScriptedInteraction};
pub use load_pairs::{
    LOAD_PAIRS_KEY, LoadPair, LoadPairError, load_pairs_from_answers, parse_load_pairs,
};
pub use pattern::{PatternMismatch, PatternValidator};
pub use pipeline::{AskError, collect_answers, load_prompts};
pub use prompt::{Prompt, PromptKind};
pub use runner::run_prompts;
pub use schema::{InvalidQuestion, SchemaIssue, is_valid_question, validate_question};
pub use spec::{
    AnswerShape, ConfigDocument, Profile, QuestionDefinition, QuestionKind, QuestionRecord,
    QuestionType, document_schema,
};
pub use validate::{ValidatedConfiguration, ValidationOptions, ValidationReport, validate_all};
