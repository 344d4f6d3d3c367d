//! Dialoguer-backed [`Interaction`] for real terminals.

use ask_spec::{Interaction, PatternValidator};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

/// Answer taken when Enter is pressed on a yes/no prompt.
const CONFIRM_DEFAULT: bool = true;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Asks questions on the controlling terminal.
#[derive(Debug, Clone)]
pub struct TerminalInteraction {
    colorful: bool,
}

impl TerminalInteraction {
    pub fn new(colorful: bool) -> Self {
        Self { colorful }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }
}

/// Ctrl+C surfaces as an interrupted read; treat it like Escape.
fn cancelled<T>(result: Result<T, dialoguer::Error>) -> Result<Option<T>, TerminalError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == std::io::ErrorKind::Interrupted => {
            Ok(None)
        }
        Err(err) => Err(TerminalError::Dialoguer(err)),
    }
}

impl Interaction for TerminalInteraction {
    type Error = TerminalError;

    fn select(
        &mut self,
        _name: &str,
        message: &str,
        choices: &[String],
    ) -> Result<Option<String>, Self::Error> {
        let theme = self.theme();
        let selection = cancelled(
            Select::with_theme(theme.as_ref())
                .with_prompt(message)
                .items(choices)
                .default(0)
                .interact_opt(),
        )?;
        Ok(selection
            .flatten()
            .and_then(|index| choices.get(index).cloned()))
    }

    fn confirm(&mut self, _name: &str, message: &str) -> Result<Option<bool>, Self::Error> {
        let theme = self.theme();
        let answer = cancelled(
            Confirm::with_theme(theme.as_ref())
                .with_prompt(message)
                .default(CONFIRM_DEFAULT)
                .interact_opt(),
        )?;
        Ok(answer.flatten())
    }

    fn text(
        &mut self,
        _name: &str,
        message: &str,
        pattern: Option<&PatternValidator>,
    ) -> Result<Option<String>, Self::Error> {
        let theme = self.theme();
        let mut input = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(message)
            .allow_empty(true);
        if let Some(pattern) = pattern {
            input = input.validate_with(move |value: &String| -> Result<(), String> {
                pattern.check(value).map_err(|mismatch| mismatch.to_string())
            });
        }
        cancelled(input.interact_text())
    }
}
