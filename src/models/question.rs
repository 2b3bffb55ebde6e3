use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::constants::{MAX_OPTIONS, MIN_OPTIONS};
use super::errors::ConfigError;

/// A single multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: &[&str],
        correct_answer: impl Into<String>,
    ) -> Self {
        Question {
            id: id.into(),
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.into(),
            category: None,
            difficulty: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    /// Options other than the correct answer, in their listed order.
    pub fn incorrect_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(move |o| *o != self.correct_answer)
    }

    /// Checks option uniqueness and that the correct answer is one of the options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(ConfigError::TooFewOptions {
                question_id: self.id.clone(),
            });
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(ConfigError::TooManyOptions {
                question_id: self.id.clone(),
                max: MAX_OPTIONS,
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(ConfigError::DuplicateOption {
                    question_id: self.id.clone(),
                    option: option.clone(),
                });
            }
        }

        if !seen.contains(self.correct_answer.as_str()) {
            return Err(ConfigError::CorrectAnswerMissing {
                question_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Validates a whole question list: non-empty, unique ids, every question well formed.
pub fn validate_questions(questions: &[Question]) -> Result<(), ConfigError> {
    if questions.is_empty() {
        return Err(ConfigError::EmptyQuestionSet);
    }

    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id.as_str()) {
            return Err(ConfigError::DuplicateQuestionId {
                question_id: question.id.clone(),
            });
        }
        question.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital() -> Question {
        Question::new(
            "q1",
            "What is the capital of Nigeria?",
            &["Lagos", "Abuja", "Kano", "Jos"],
            "Abuja",
        )
    }

    #[test]
    fn well_formed_question_passes() {
        assert_eq!(capital().validate(), Ok(()));
    }

    #[test]
    fn incorrect_options_exclude_answer() {
        let q = capital();
        let wrong: Vec<&str> = q.incorrect_options().collect();
        assert_eq!(wrong, vec!["Lagos", "Kano", "Jos"]);
    }

    #[test]
    fn duplicate_option_rejected() {
        let q = Question::new("q2", "?", &["A", "B", "A"], "B");
        assert_eq!(
            q.validate(),
            Err(ConfigError::DuplicateOption {
                question_id: "q2".into(),
                option: "A".into()
            })
        );
    }

    #[test]
    fn missing_answer_rejected() {
        let q = Question::new("q3", "?", &["A", "B"], "C");
        assert!(matches!(
            q.validate(),
            Err(ConfigError::CorrectAnswerMissing { .. })
        ));
    }

    #[test]
    fn single_option_rejected() {
        let q = Question::new("q4", "?", &["A"], "A");
        assert!(matches!(q.validate(), Err(ConfigError::TooFewOptions { .. })));
    }

    #[test]
    fn options_beyond_the_alphabet_rejected() {
        let labels: Vec<String> = (0..27).map(|i| format!("opt{}", i)).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let q = Question::new("q5", "?", &refs, "opt0");
        assert!(matches!(
            q.validate(),
            Err(ConfigError::TooManyOptions { max: 26, .. })
        ));
        let q = Question::new("q6", "?", &refs[..26], "opt0");
        assert!(q.validate().is_ok());
    }

    #[test]
    fn empty_and_duplicate_id_sets_rejected() {
        assert_eq!(validate_questions(&[]), Err(ConfigError::EmptyQuestionSet));
        assert!(matches!(
            validate_questions(&[capital(), capital()]),
            Err(ConfigError::DuplicateQuestionId { .. })
        ));
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"id":"7","text":"2+2?","options":["3","4"],"correctAnswer":"4","category":"Math"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, "4");
        assert_eq!(q.category.as_deref(), Some("Math"));
        assert_eq!(q.difficulty, None);
    }
}
