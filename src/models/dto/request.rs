use serde::Deserialize;
use validator::Validate;

use crate::models::domain::QuestionType;

/// Body of `POST /api/generate` — forwarded to the text-generation service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, message = "Missing prompt"))]
    pub prompt: String,

    pub model: Option<String>,
}

/// Body of `POST /api/quizzes/generate` — runs the full pipeline.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub topic: Option<String>,

    #[validate(range(min = 1, max = 100, message = "count must be between 1 and 100"))]
    pub count: Option<u32>,

    pub allowed_types: Option<Vec<QuestionType>>,

    /// Untrusted reference material pasted by the user; quoted into the
    /// prompt, never executed.
    pub reference: Option<String>,

    pub with_answers: Option<bool>,

    pub enforce_exact_count: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_rejects_empty_prompt() {
        let request = GenerateRequest {
            prompt: String::new(),
            model: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn generate_quiz_request_parses_camel_case_fields() {
        let json = r#"{
            "topic": "rust ownership",
            "count": 4,
            "allowedTypes": ["multiple-choice", "written"],
            "withAnswers": false,
            "enforceExactCount": true
        }"#;

        let request: GenerateQuizRequest =
            serde_json::from_str(json).expect("request should deserialize");
        assert_eq!(request.count, Some(4));
        assert_eq!(
            request.allowed_types.as_deref(),
            Some(&[QuestionType::MultipleChoice, QuestionType::Written][..])
        );
        assert_eq!(request.with_answers, Some(false));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn generate_quiz_request_rejects_zero_count() {
        let request = GenerateQuizRequest {
            count: Some(0),
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }
}
