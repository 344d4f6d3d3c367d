use std::path::Path;

use thiserror::Error;

use crate::answers::AnswerSet;
use crate::builder::build_prompts;
use crate::config::{ConfigError, Configuration};
use crate::interaction::Interaction;
use crate::prompt::Prompt;
use crate::spec::profile::Profile;
use crate::validate::{ValidationOptions, ValidationReport, validate_all};

/// Any failure of a questionnaire run.
#[derive(Debug, Error)]
pub enum AskError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("One or more questions are invalid ({0}).")]
    Invalid(#[from] ValidationReport),
    #[error("interaction failed: {0}")]
    Interaction(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Loads, validates and builds the prompts described by the document at `path`.
pub fn load_prompts(
    path: impl AsRef<Path>,
    profile: &Profile,
    options: &ValidationOptions,
) -> Result<Vec<Prompt>, AskError> {
    let config = Configuration::load(path)?;
    let validated = validate_all(&config, profile, options)?;
    Ok(build_prompts(validated))
}

/// Runs the whole questionnaire at `path` through `interaction`.
pub fn collect_answers<I: Interaction>(
    path: impl AsRef<Path>,
    profile: &Profile,
    options: &ValidationOptions,
    interaction: &mut I,
) -> Result<AnswerSet, AskError> {
    let prompts = load_prompts(path, profile, options)?;
    crate::runner::run_prompts(prompts, interaction)
        .map_err(|err| AskError::Interaction(Box::new(err)))
}
