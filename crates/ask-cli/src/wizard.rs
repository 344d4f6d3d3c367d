use std::fmt::Display;

use ask_spec::{AnswerSet, LoadPair, Profile, Prompt, PromptKind, ValidationReport};
use dialoguer::console::style;
use serde_json::{Value, json};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: answers and diagnostics only.
    Clean,
    /// Verbose output: issue codes and prompt details as well.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// Prints diagnostics and results of a questionnaire run.
///
/// Results go to stdout as JSON; warnings and errors go to stderr.
pub struct WizardPresenter {
    verbosity: Verbosity,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// One warning line per invalid question definition.
    pub fn show_warnings(&self, report: &ValidationReport) {
        for invalid in &report.invalid {
            eprintln!("{}", style(format!("[WARNING] {}", invalid)).for_stderr().yellow());
            if self.verbosity.is_verbose() {
                let codes = invalid
                    .issues
                    .iter()
                    .map(|issue| issue.code())
                    .collect::<Vec<_>>();
                eprintln!("  codes: {}", codes.join(", "));
            }
        }
    }

    pub fn show_fatal(&self, error: &dyn Display) {
        eprintln!();
        eprintln!("{}", style(format!("[ERROR] {}", error)).for_stderr().red().bold());
    }

    pub fn show_summary(&self, profile: &Profile, prompts: &[Prompt]) {
        println!(
            "Configuration valid: {} question(s) for profile {}",
            prompts.len(),
            profile.name()
        );
        for prompt in prompts {
            let mut entry = format!(" - {} ({})", prompt.name(), describe_kind(prompt.kind()));
            if self.verbosity.is_verbose() {
                entry.push_str(&format!(": {}", prompt.message()));
            }
            println!("{}", entry);
        }
    }

    pub fn show_completion(
        &self,
        profile: &Profile,
        answers: &AnswerSet,
        load_pairs: Option<&[LoadPair]>,
    ) -> Result<(), serde_json::Error> {
        let shape = profile.answer_shape();
        let output = match load_pairs {
            Some(pairs) => serde_json::to_string_pretty(&json!({
                "answers": answers.to_value(shape),
                "load_pairs": serde_json::to_value(pairs)?,
            }))?,
            None => answers.to_json_pretty(shape)?,
        };
        println!("{}", output);
        Ok(())
    }

    pub fn show_value(&self, value: &Value) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

fn describe_kind(kind: &PromptKind) -> String {
    match kind {
        PromptKind::Select { choices } => format!("select: {}", choices.join(", ")),
        PromptKind::Confirm => "confirm".to_string(),
        PromptKind::Text {
            validator: Some(validator),
        } => format!("text matching {}", validator.pattern()),
        PromptKind::Text { validator: None } => "text".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_spec::PatternValidator;

    #[test]
    fn describe_kind_lists_choices_and_patterns() {
        let select = PromptKind::Select {
            choices: vec!["dev".into(), "prod".into()],
        };
        assert_eq!(describe_kind(&select), "select: dev, prod");

        let text = PromptKind::Text {
            validator: Some(PatternValidator::new(r"\d+").unwrap()),
        };
        assert_eq!(describe_kind(&text), r"text matching \d+");
    }

    #[test]
    fn verbosity_follows_flag() {
        assert!(Verbosity::from_verbose(true).is_verbose());
        assert!(!Verbosity::from_verbose(false).is_verbose());
    }
}
