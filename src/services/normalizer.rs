//! Shapes untrusted generator output into canonical questions.
//!
//! Every input item is an arbitrary JSON value. Missing or malformed fields
//! degrade to safe defaults; nothing in this module can fail on bad input.

use serde_json::Value;

use crate::models::domain::{QuestionBody, QuizQuestion};

pub fn normalize_questions(raw: &[Value]) -> Vec<QuizQuestion> {
    let mut next_id: u32 = 1;
    raw.iter()
        .map(|item| normalize_one(item, &mut next_id))
        .collect()
}

fn normalize_one(item: &Value, next_id: &mut u32) -> QuizQuestion {
    let id = coerce_id(item.get("id")).unwrap_or_else(|| {
        let assigned = *next_id;
        *next_id += 1;
        assigned
    });
    let text = item.get("text").map(coerce_string).unwrap_or_default();
    let points = item
        .get("points")
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite())
        .unwrap_or(1.0);
    let explanation = item
        .get("explanation")
        .and_then(Value::as_str)
        .map(str::to_string);

    let type_tag = item
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .unwrap_or_default();

    let body = if matches!(type_tag.as_str(), "multiple-choice" | "multiplechoice" | "mcq") {
        normalize_multiple_choice(item)
    } else if type_tag == "matching" || looks_like_matching(item) {
        normalize_matching(item)
    } else {
        normalize_written(item)
    };

    QuizQuestion {
        id,
        text,
        points,
        explanation,
        body,
    }
}

/// Untyped items that carry paired arrays are treated as matching questions.
fn looks_like_matching(item: &Value) -> bool {
    let has_array = |key: &str| item.get(key).map(Value::is_array).unwrap_or(false);
    (has_array("items") && has_array("matches"))
        || (has_array("leftItems") && has_array("rightItems"))
}

fn normalize_multiple_choice(item: &Value) -> QuestionBody {
    let options = string_array(item.get("options"))
        .or_else(|| string_array(item.get("choices")))
        .unwrap_or_default();

    let correct_index = item
        .get("correctIndex")
        .and_then(Value::as_i64)
        .filter(|&n| n >= 0 && (n as usize) < options.len())
        .map(|n| n as usize);

    QuestionBody::MultipleChoice {
        options,
        correct_index,
    }
}

fn normalize_matching(item: &Value) -> QuestionBody {
    let mut left_items: Vec<String> = Vec::new();
    let mut right_items: Vec<String> = Vec::new();

    if let (Some(items), Some(matches)) = (
        string_array(item.get("items")),
        string_array(item.get("matches")),
    ) {
        left_items = items;
        right_items = matches;
    } else if let (Some(left), Some(right)) = (
        string_array(item.get("leftItems")),
        string_array(item.get("rightItems")),
    ) {
        left_items = left;
        right_items = right;
    } else if let Some(pairs) = item.get("pairs").and_then(Value::as_array) {
        for pair in pairs {
            match pair {
                Value::Object(map) if map.contains_key("left") && map.contains_key("right") => {
                    left_items.push(coerce_string(&map["left"]));
                    right_items.push(coerce_string(&map["right"]));
                }
                Value::Array(tuple) if tuple.len() >= 2 => {
                    left_items.push(coerce_string(&tuple[0]));
                    right_items.push(coerce_string(&tuple[1]));
                }
                _ => {}
            }
        }
    }

    // All-or-nothing: a partially valid answer key is dropped entirely.
    let correct_matches = item
        .get("correctMatches")
        .and_then(Value::as_array)
        .and_then(|entries| {
            let indices: Option<Vec<usize>> = entries
                .iter()
                .map(|entry| {
                    entry
                        .as_i64()
                        .filter(|&n| n >= 0 && (n as usize) < right_items.len())
                        .map(|n| n as usize)
                })
                .collect();
            indices.filter(|cm| cm.len() == left_items.len())
        });

    QuestionBody::Matching {
        left_items,
        right_items,
        correct_matches,
    }
}

fn normalize_written(item: &Value) -> QuestionBody {
    let answer_boxes = item
        .get("answerBoxes")
        .and_then(Value::as_f64)
        .filter(|&n| n > 0.0)
        .map(|n| n as u32)
        .unwrap_or(1)
        .max(1);

    let expected_answers = string_array(item.get("expectedAnswers"));

    QuestionBody::Written {
        answer_boxes,
        expected_answers,
    }
}

fn coerce_id(value: Option<&Value>) -> Option<u32> {
    let value = value?;
    match value {
        Value::Number(n) => n.as_u64().filter(|&n| n > 0).map(|n| n as u32),
        Value::String(s) => s.trim().parse::<u32>().ok().filter(|&n| n > 0),
        _ => None,
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_array(value: Option<&Value>) -> Option<Vec<String>> {
    value
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(coerce_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuestionType;
    use serde_json::json;

    #[test]
    fn recognizes_type_synonyms_case_insensitively() {
        let raw = vec![
            json!({"type": "MCQ", "text": "a", "options": ["x"]}),
            json!({"type": "MultipleChoice", "text": "b", "options": ["x"]}),
            json!({"type": "multiple-choice", "text": "c", "options": ["x"]}),
        ];

        let questions = normalize_questions(&raw);

        assert!(questions
            .iter()
            .all(|q| q.question_type() == QuestionType::MultipleChoice));
    }

    #[test]
    fn untyped_item_with_paired_arrays_becomes_matching() {
        let raw = vec![json!({
            "text": "match",
            "items": ["a", "b"],
            "matches": ["1", "2"]
        })];

        let questions = normalize_questions(&raw);

        assert_eq!(questions[0].question_type(), QuestionType::Matching);
        match &questions[0].body {
            QuestionBody::Matching {
                left_items,
                right_items,
                ..
            } => {
                assert_eq!(left_items, &["a", "b"]);
                assert_eq!(right_items, &["1", "2"]);
            }
            _ => panic!("expected matching variant"),
        }
    }

    #[test]
    fn unrecognized_type_defaults_to_written_with_one_box() {
        let raw = vec![json!({"type": "essay", "text": "explain"})];

        let questions = normalize_questions(&raw);

        assert_eq!(
            questions[0].body,
            QuestionBody::Written {
                answer_boxes: 1,
                expected_answers: None,
            }
        );
    }

    #[test]
    fn assigns_sequential_ids_only_where_missing() {
        let raw = vec![
            json!({"text": "first"}),
            json!({"id": 10, "text": "second"}),
            json!({"id": "not a number", "text": "third"}),
        ];

        let questions = normalize_questions(&raw);

        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 10);
        assert_eq!(questions[2].id, 2);
    }

    #[test]
    fn coerces_missing_text_and_non_finite_points() {
        let raw = vec![json!({"points": "many"})];

        let questions = normalize_questions(&raw);

        assert_eq!(questions[0].text, "");
        assert_eq!(questions[0].points, 1.0);
    }

    #[test]
    fn accepts_choices_alias_and_coerces_entries_to_strings() {
        let raw = vec![json!({
            "type": "multiple-choice",
            "text": "q",
            "choices": ["a", 2, true]
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::MultipleChoice { options, .. } => {
                assert_eq!(options, &["a", "2", "true"]);
            }
            _ => panic!("expected multiple-choice variant"),
        }
    }

    #[test]
    fn drops_out_of_range_correct_index() {
        let raw = vec![json!({
            "type": "multiple-choice",
            "text": "q",
            "options": ["a", "b"],
            "correctIndex": 5
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::MultipleChoice { correct_index, .. } => {
                assert_eq!(*correct_index, None);
            }
            _ => panic!("expected multiple-choice variant"),
        }
    }

    #[test]
    fn keeps_in_range_correct_index() {
        let raw = vec![json!({
            "type": "mcq",
            "text": "q",
            "options": ["a", "b", "c"],
            "correctIndex": 2
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::MultipleChoice { correct_index, .. } => {
                assert_eq!(*correct_index, Some(2));
            }
            _ => panic!("expected multiple-choice variant"),
        }
    }

    #[test]
    fn normalizes_pairs_of_objects_and_tuples() {
        let raw = vec![json!({
            "type": "matching",
            "text": "q",
            "pairs": [
                {"left": "l1", "right": "r1"},
                ["l2", "r2"],
                "garbage"
            ]
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::Matching {
                left_items,
                right_items,
                ..
            } => {
                assert_eq!(left_items, &["l1", "l2"]);
                assert_eq!(right_items, &["r1", "r2"]);
            }
            _ => panic!("expected matching variant"),
        }
    }

    #[test]
    fn drops_correct_matches_with_invalid_index() {
        // correctMatches [0, 5] while rightItems has length 2
        let raw = vec![json!({
            "type": "matching",
            "text": "q",
            "leftItems": ["a", "b"],
            "rightItems": ["x", "y"],
            "correctMatches": [0, 5]
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::Matching {
                left_items,
                right_items,
                correct_matches,
            } => {
                assert_eq!(left_items, &["a", "b"]);
                assert_eq!(right_items, &["x", "y"]);
                assert_eq!(*correct_matches, None);
            }
            _ => panic!("expected matching variant"),
        }
    }

    #[test]
    fn drops_correct_matches_with_wrong_length() {
        let raw = vec![json!({
            "type": "matching",
            "text": "q",
            "leftItems": ["a", "b", "c"],
            "rightItems": ["x", "y", "z"],
            "correctMatches": [0, 1]
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::Matching { correct_matches, .. } => {
                assert_eq!(*correct_matches, None);
            }
            _ => panic!("expected matching variant"),
        }
    }

    #[test]
    fn keeps_fully_valid_correct_matches() {
        let raw = vec![json!({
            "type": "matching",
            "text": "q",
            "leftItems": ["a", "b"],
            "rightItems": ["x", "y"],
            "correctMatches": [1, 0]
        })];

        let questions = normalize_questions(&raw);

        match &questions[0].body {
            QuestionBody::Matching { correct_matches, .. } => {
                assert_eq!(*correct_matches, Some(vec![1, 0]));
            }
            _ => panic!("expected matching variant"),
        }
    }

    #[test]
    fn written_coerces_answer_boxes_and_expected_answers() {
        let raw = vec![
            json!({"type": "written", "text": "q1", "answerBoxes": 3, "expectedAnswers": ["a", "b"]}),
            json!({"type": "written", "text": "q2", "answerBoxes": -2}),
        ];

        let questions = normalize_questions(&raw);

        assert_eq!(
            questions[0].body,
            QuestionBody::Written {
                answer_boxes: 3,
                expected_answers: Some(vec!["a".to_string(), "b".to_string()]),
            }
        );
        assert_eq!(
            questions[1].body,
            QuestionBody::Written {
                answer_boxes: 1,
                expected_answers: None,
            }
        );
    }

    #[test]
    fn never_fails_on_garbage_items() {
        let raw = vec![json!(null), json!(42), json!("just a string"), json!({})];

        let questions = normalize_questions(&raw);

        assert_eq!(questions.len(), 4);
        assert!(questions
            .iter()
            .all(|q| q.question_type() == QuestionType::Written));
    }
}
