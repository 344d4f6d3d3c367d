use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::spec::profile::AnswerShape;

/// One collected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub name: String,
    pub value: Value,
}

/// Answers in the order the prompts were asked.
///
/// Lookups by name return the most recent answer, so duplicated question names
/// resolve last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, value: Value) {
        self.answers.push(Answer {
            name: name.into(),
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.answers
            .iter()
            .rev()
            .find(|answer| answer.name == name)
            .map(|answer| &answer.value)
    }

    /// Raw answers in prompt order.
    pub fn to_sequence(&self) -> Vec<Value> {
        self.answers
            .iter()
            .map(|answer| answer.value.clone())
            .collect()
    }

    /// Name to answer, one entry per distinct name.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for answer in &self.answers {
            map.insert(answer.name.clone(), answer.value.clone());
        }
        map
    }

    pub fn to_value(&self, shape: AnswerShape) -> Value {
        match shape {
            AnswerShape::Sequence => Value::Array(self.to_sequence()),
            AnswerShape::Mapping => Value::Object(self.to_mapping()),
        }
    }

    pub fn to_json_pretty(&self, shape: AnswerShape) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapping_keeps_last_write() {
        let mut answers = AnswerSet::new();
        answers.record("env", json!("dev"));
        answers.record("ok", json!(true));
        answers.record("env", json!("prod"));

        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("env"), Some(&json!("prod")));
        assert_eq!(
            answers.to_value(AnswerShape::Mapping),
            json!({ "env": "prod", "ok": true })
        );
    }

    #[test]
    fn mapping_follows_prompt_order() {
        let mut answers = AnswerSet::new();
        answers.record("env", json!("dev"));
        answers.record("UWLastPaare", json!("SE=15MW"));
        answers.record("env", json!("prod"));

        let keys = answers.to_mapping().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["env", "UWLastPaare"]);
        assert_eq!(
            answers.to_json_pretty(AnswerShape::Mapping).unwrap(),
            "{\n  \"env\": \"prod\",\n  \"UWLastPaare\": \"SE=15MW\"\n}"
        );
    }

    #[test]
    fn sequence_keeps_every_answer_in_order() {
        let mut answers = AnswerSet::new();
        answers.record("env", json!("dev"));
        answers.record("ok", Value::Null);
        answers.record("env", json!("prod"));
        assert_eq!(
            answers.to_value(AnswerShape::Sequence),
            json!(["dev", null, "prod"])
        );
    }
}
