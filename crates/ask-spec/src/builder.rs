use tracing::debug;

use crate::prompt::{Prompt, PromptKind};
use crate::spec::question::{QuestionDefinition, QuestionKind};
use crate::validate::ValidatedConfiguration;

/// Turns validated definitions into prompts, one per definition, in order.
pub fn build_prompts(config: ValidatedConfiguration) -> Vec<Prompt> {
    let prompts = config
        .into_questions()
        .into_iter()
        .map(build_prompt)
        .collect::<Vec<_>>();
    debug!(count = prompts.len(), "built prompts");
    prompts
}

fn build_prompt(definition: QuestionDefinition) -> Prompt {
    let kind = match definition.kind {
        QuestionKind::Select { choices } => PromptKind::Select { choices },
        QuestionKind::Confirm => PromptKind::Confirm,
        QuestionKind::Text { pattern } => PromptKind::Text { validator: pattern },
    };
    Prompt::new(definition.name, definition.message, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::spec::profile::Profile;
    use crate::validate::{ValidationOptions, validate_all};
    use serde_json::json;

    #[test]
    fn prompts_follow_definition_order() {
        let config = Configuration::from_value(json!({
            "questions": [
                { "type": "text", "name": "host", "message": "Host?" },
                { "type": "select", "name": "env", "message": "Env?", "choices": ["dev", "prod"] },
                { "type": "text", "name": "port", "message": "Port?", "validate": "\\d+" }
            ]
        }))
        .unwrap();
        let validated =
            validate_all(&config, &Profile::SELECT_TEXT, &ValidationOptions::default()).unwrap();
        let prompts = build_prompts(validated);

        let names = prompts.iter().map(Prompt::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["host", "env", "port"]);
        assert!(matches!(
            prompts[0].kind(),
            PromptKind::Text { validator: None }
        ));
        match prompts[2].kind() {
            PromptKind::Text {
                validator: Some(validator),
            } => {
                assert!(validator.check("8080").is_ok());
                assert!(validator.check("80a").is_err());
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn confirm_prompts_have_no_choices() {
        let config = Configuration::from_value(json!({
            "questions": [{ "type": "confirm", "name": "ok", "message": "Continue?" }]
        }))
        .unwrap();
        let validated =
            validate_all(&config, &Profile::SELECT_CONFIRM, &ValidationOptions::default())
                .unwrap();
        let prompts = build_prompts(validated);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].message(), "Continue?");
        assert!(matches!(prompts[0].kind(), PromptKind::Confirm));
    }
}
