use crate::spec::question::QuestionType;

/// Shape of the collected answers once a run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// Answers in prompt order, without names.
    Sequence,
    /// Question name to answer; later duplicates overwrite earlier ones.
    Mapping,
}

/// Allowed question types and result shape for one configuration flavour.
///
/// Validation, prompt construction and result rendering are all parameterized
/// over a profile so the two flavours share a single pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    name: &'static str,
    allowed: &'static [QuestionType],
    answer_shape: AnswerShape,
}

impl Profile {
    /// Selection and yes/no confirmation questions; answers as a sequence.
    pub const SELECT_CONFIRM: Profile = Profile {
        name: "select-confirm",
        allowed: &[QuestionType::Select, QuestionType::Confirm],
        answer_shape: AnswerShape::Sequence,
    };

    /// Selection and free-text questions with optional patterns; answers keyed by name.
    pub const SELECT_TEXT: Profile = Profile {
        name: "select-text",
        allowed: &[QuestionType::Select, QuestionType::Text],
        answer_shape: AnswerShape::Mapping,
    };

    pub fn all() -> [Profile; 2] {
        [Profile::SELECT_CONFIRM, Profile::SELECT_TEXT]
    }

    pub fn from_name(name: &str) -> Option<Profile> {
        Profile::all()
            .into_iter()
            .find(|profile| profile.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn allows(&self, kind: QuestionType) -> bool {
        self.allowed.contains(&kind)
    }

    pub fn answer_shape(&self) -> AnswerShape {
        self.answer_shape
    }

    /// Human-readable allowed set, e.g. `'select' and 'confirm'`.
    pub fn describe_allowed(&self) -> String {
        let labels = self
            .allowed
            .iter()
            .map(|kind| format!("'{}'", kind))
            .collect::<Vec<_>>();
        match labels.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::SELECT_CONFIRM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_in_allowed_types() {
        assert!(Profile::SELECT_CONFIRM.allows(QuestionType::Confirm));
        assert!(!Profile::SELECT_CONFIRM.allows(QuestionType::Text));
        assert!(Profile::SELECT_TEXT.allows(QuestionType::Text));
        assert!(!Profile::SELECT_TEXT.allows(QuestionType::Confirm));
    }

    #[test]
    fn describe_allowed_joins_labels() {
        assert_eq!(
            Profile::SELECT_CONFIRM.describe_allowed(),
            "'select' and 'confirm'"
        );
    }

    #[test]
    fn from_name_resolves_both_profiles() {
        assert_eq!(
            Profile::from_name("select-text"),
            Some(Profile::SELECT_TEXT)
        );
        assert_eq!(Profile::from_name("everything"), None);
    }
}
