use serde::{Deserialize, Serialize};

/// A single quiz question as delivered to the client.
///
/// The wire format matches the JSON schema the generator is prompted with:
/// common fields at the top level, variant fields flattened alongside them,
/// discriminated by `"type"`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub body: QuestionBody,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionBody {
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        options: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        correct_index: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    Written {
        answer_boxes: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_answers: Option<Vec<String>>,
    },
    #[serde(rename_all = "camelCase")]
    Matching {
        left_items: Vec<String>,
        right_items: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        correct_matches: Option<Vec<usize>>,
    },
}

impl QuizQuestion {
    pub fn question_type(&self) -> QuestionType {
        match self.body {
            QuestionBody::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionBody::Written { .. } => QuestionType::Written,
            QuestionBody::Matching { .. } => QuestionType::Matching,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Written,
    Matching,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::MultipleChoice,
        QuestionType::Written,
        QuestionType::Matching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Written => "written",
            QuestionType::Matching => "matching",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_round_trip_serialization() {
        for variant in QuestionType::ALL {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: QuestionType =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<QuestionType>("\"essay\"");

        assert!(parsed.is_err());
    }

    #[test]
    fn multiple_choice_serializes_with_camel_case_wire_names() {
        let question = QuizQuestion {
            id: 1,
            text: "Pick one".to_string(),
            points: 1.0,
            explanation: None,
            body: QuestionBody::MultipleChoice {
                options: vec!["a".to_string(), "b".to_string()],
                correct_index: Some(0),
            },
        };

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(value["type"], "multiple-choice");
        assert_eq!(value["correctIndex"], 0);
        assert_eq!(value["options"][1], "b");
        assert!(value.get("explanation").is_none());
    }

    #[test]
    fn matching_omits_absent_correct_matches() {
        let question = QuizQuestion {
            id: 2,
            text: "Match them".to_string(),
            points: 2.0,
            explanation: Some("pairs line up".to_string()),
            body: QuestionBody::Matching {
                left_items: vec!["x".to_string()],
                right_items: vec!["y".to_string()],
                correct_matches: None,
            },
        };

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(value["leftItems"][0], "x");
        assert_eq!(value["rightItems"][0], "y");
        assert!(value.get("correctMatches").is_none());
    }

    #[test]
    fn written_deserializes_from_wire_format() {
        let json = r#"{
            "id": 3,
            "type": "written",
            "text": "Explain briefly",
            "points": 1,
            "answerBoxes": 2,
            "expectedAnswers": ["short answer"]
        }"#;

        let question: QuizQuestion = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(question.question_type(), QuestionType::Written);
        match question.body {
            QuestionBody::Written {
                answer_boxes,
                expected_answers,
            } => {
                assert_eq!(answer_boxes, 2);
                assert_eq!(expected_answers.as_deref(), Some(&["short answer".to_string()][..]));
            }
            _ => panic!("expected written variant"),
        }
    }
}
