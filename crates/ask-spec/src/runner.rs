use tracing::debug;

use crate::answers::AnswerSet;
use crate::interaction::Interaction;
use crate::prompt::Prompt;

/// Asks each prompt in turn and records the answers.
///
/// A cancelled prompt is recorded as `null` and the run continues with the
/// next prompt. Only failures of the interaction layer stop the run.
pub fn run_prompts<I, P>(prompts: P, interaction: &mut I) -> Result<AnswerSet, I::Error>
where
    I: Interaction,
    P: IntoIterator<Item = Prompt>,
{
    let mut answers = AnswerSet::new();
    for prompt in prompts {
        let value = prompt.ask(interaction)?;
        if value.is_null() {
            debug!(name = prompt.name(), "prompt cancelled");
        }
        answers.record(prompt.into_name(), value);
    }
    Ok(answers)
}
