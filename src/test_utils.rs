#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{QuestionBody, QuizQuestion};
    use serde_json::{json, Value};

    /// Creates a written question with the given id and text
    pub fn written_question(id: u32, text: &str) -> QuizQuestion {
        QuizQuestion {
            id,
            text: text.to_string(),
            points: 1.0,
            explanation: None,
            body: QuestionBody::Written {
                answer_boxes: 1,
                expected_answers: None,
            },
        }
    }

    /// Creates a raw multiple-choice item the way the generator emits it
    pub fn raw_multiple_choice(text: &str, options: &[&str]) -> Value {
        json!({
            "type": "multiple-choice",
            "text": text,
            "points": 1,
            "options": options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionType;

    #[test]
    fn test_fixtures_written_question() {
        let question = written_question(3, "Explain lifetimes.");

        assert_eq!(question.id, 3);
        assert_eq!(question.question_type(), QuestionType::Written);
    }

    #[test]
    fn test_fixtures_raw_multiple_choice() {
        let raw = raw_multiple_choice("Pick one", &["a", "b"]);

        assert_eq!(raw["type"], "multiple-choice");
        assert_eq!(raw["options"].as_array().unwrap().len(), 2);
    }
}
