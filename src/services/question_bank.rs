//! Question supply
//!
//! Loads question sets from JSON, with a small built-in bank for the
//! console game.

use std::path::Path;

use crate::models::errors::GameResult;
use crate::models::question::{validate_questions, Question};

/// Parse and validate a JSON array of questions.
pub fn parse_questions(json: &str) -> GameResult<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate_questions(&questions)?;
    Ok(questions)
}

pub fn load_questions(path: &Path) -> GameResult<Vec<Question>> {
    let text = std::fs::read_to_string(path)?;
    parse_questions(&text)
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(
            "geo-1",
            "What is the capital of Nigeria?",
            &["Lagos", "Abuja", "Kano", "Jos"],
            "Abuja",
        )
        .with_category("Geography")
        .with_difficulty("easy"),
        Question::new(
            "sci-1",
            "What planet is known as the Red Planet?",
            &["Venus", "Jupiter", "Mars", "Mercury"],
            "Mars",
        )
        .with_category("Science")
        .with_difficulty("easy"),
        Question::new(
            "math-1",
            "What is 12 x 12?",
            &["124", "144", "132", "148"],
            "144",
        )
        .with_category("Mathematics")
        .with_difficulty("easy"),
        Question::new(
            "hist-1",
            "In what year did Nigeria gain independence?",
            &["1957", "1960", "1963", "1966"],
            "1960",
        )
        .with_category("History")
        .with_difficulty("medium"),
        Question::new(
            "sci-2",
            "What gas do plants absorb from the air?",
            &["Oxygen", "Nitrogen", "Carbon dioxide", "Helium"],
            "Carbon dioxide",
        )
        .with_category("Science")
        .with_difficulty("easy"),
        Question::new(
            "geo-2",
            "Which is the longest river in Africa?",
            &["Congo", "Niger", "Zambezi", "Nile"],
            "Nile",
        )
        .with_category("Geography")
        .with_difficulty("medium"),
        Question::new(
            "lit-1",
            "Who wrote 'Things Fall Apart'?",
            &["Wole Soyinka", "Chinua Achebe", "Ben Okri", "Buchi Emecheta"],
            "Chinua Achebe",
        )
        .with_category("Literature")
        .with_difficulty("medium"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::{ConfigError, GameError};

    #[test]
    fn sample_bank_is_valid() {
        assert!(validate_questions(&sample_questions()).is_ok());
    }

    #[test]
    fn parses_question_array() {
        let json = r#"[
            {"id": "1", "text": "2+2?", "options": ["3", "4", "5"], "correctAnswer": "4"},
            {"id": "2", "text": "Sky?", "options": ["Blue", "Green"], "correctAnswer": "Blue", "difficulty": "easy"}
        ]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].difficulty.as_deref(), Some("easy"));
    }

    #[test]
    fn invalid_question_rejected_at_load() {
        let json = r#"[{"id": "1", "text": "?", "options": ["A", "B"], "correctAnswer": "C"}]"#;
        assert!(matches!(
            parse_questions(json),
            Err(GameError::Config(ConfigError::CorrectAnswerMissing { .. }))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(parse_questions("[{"), Err(GameError::Json(_))));
    }
}
