//! Exact-count contract: dedup by normalized text, pad with varied fillers,
//! truncate, reindex densely from 1.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{QuestionBody, QuestionType, QuizQuestion};

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Whitespace-collapsed, lowercased question text; the duplicate key.
pub fn normalization_key(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_lowercase()
}

pub fn ensure_exact_count(
    questions: Vec<QuizQuestion>,
    total: usize,
    allowed: &[QuestionType],
    topic: &str,
) -> Vec<QuizQuestion> {
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<QuizQuestion> = Vec::new();
    for question in questions {
        let key = normalization_key(&question.text);
        // Empty-text questions carry no key and are discarded outright.
        if !key.is_empty() && seen.insert(key) {
            unique.push(question);
        }
    }

    while unique.len() < total {
        unique.push(create_filler_question(
            (unique.len() + 1) as u32,
            allowed,
            topic,
        ));
    }
    unique.truncate(total);

    reindex(unique)
}

/// Reassigns ids densely as 1..N in order.
pub fn reindex(mut questions: Vec<QuizQuestion>) -> Vec<QuizQuestion> {
    for (position, question) in questions.iter_mut().enumerate() {
        question.id = (position + 1) as u32;
    }
    questions
}

fn pick<'a, T>(bank: &'a [T], id: u32) -> &'a T {
    &bank[(id as usize - 1) % bank.len()]
}

/// Deterministic synthesized question, varied by position so consecutive
/// fillers differ. Type preference: multiple-choice, matching, written,
/// constrained to the allowed set.
pub fn create_filler_question(id: u32, allowed: &[QuestionType], topic: &str) -> QuizQuestion {
    let preference = [
        QuestionType::MultipleChoice,
        QuestionType::Matching,
        QuestionType::Written,
    ];
    let question_type = preference
        .into_iter()
        .find(|t| allowed.contains(t))
        .unwrap_or(QuestionType::Written);

    match question_type {
        QuestionType::MultipleChoice => filler_multiple_choice(id, topic),
        QuestionType::Matching => filler_matching(id, topic),
        QuestionType::Written => filler_written(id, topic),
    }
}

fn filler_multiple_choice(id: u32, topic: &str) -> QuizQuestion {
    let stems = [
        format!("Which statement about {} is most accurate?", topic),
        format!("Which option best illustrates {} in practice?", topic),
        format!("Which concept is core to {}?", topic),
        format!("Which of these is most closely tied to {}?", topic),
        format!("Which description best matches {}?", topic),
    ];
    let option_banks = [
        [
            format!("A core idea in {}", topic),
            format!("Sometimes related to {}", topic),
            "Tangential".to_string(),
            "Not related".to_string(),
        ],
        [
            format!("Fundamental to {}", topic),
            format!("Peripheral to {}", topic),
            "Outdated".to_string(),
            "Incorrect".to_string(),
        ],
        [
            format!("Central principle of {}", topic),
            "Occasionally relevant".to_string(),
            "Rarely relevant".to_string(),
            "Contradictory".to_string(),
        ],
    ];

    QuizQuestion {
        id,
        text: pick(&stems, id).clone(),
        points: 1.0,
        explanation: Some(format!(
            "Option 1 is directly tied to {}; others are less central or unrelated.",
            topic
        )),
        body: QuestionBody::MultipleChoice {
            options: pick(&option_banks, id).to_vec(),
            correct_index: Some(0),
        },
    }
}

fn filler_matching(id: u32, topic: &str) -> QuizQuestion {
    let left_banks = [
        ["Term A", "Term B", "Term C"],
        ["Concept X", "Concept Y", "Concept Z"],
        ["Layer 1", "Layer 2", "Layer 3"],
    ];
    let right_banks = [
        ["Definition A", "Definition B", "Definition C"],
        ["Example X", "Example Y", "Example Z"],
        ["Role 1", "Role 2", "Role 3"],
    ];

    QuizQuestion {
        id,
        text: format!("Match items to their brief descriptions ({}).", topic),
        points: 1.0,
        explanation: Some("Each item pairs with the like-labeled description.".to_string()),
        body: QuestionBody::Matching {
            left_items: pick(&left_banks, id).iter().map(|s| s.to_string()).collect(),
            right_items: pick(&right_banks, id).iter().map(|s| s.to_string()).collect(),
            correct_matches: Some(vec![0, 1, 2]),
        },
    }
}

fn filler_written(id: u32, topic: &str) -> QuizQuestion {
    let prompts = [
        format!("Define one key idea in {} and give a one-sentence example.", topic),
        format!("Briefly explain why {} matters in practice.", topic),
        format!("State a principle of {} and how it's applied.", topic),
        format!("Describe a common pitfall to avoid in {}.", topic),
    ];

    QuizQuestion {
        id,
        text: pick(&prompts, id).clone(),
        points: 1.0,
        explanation: Some("A short, precise statement is enough.".to_string()),
        body: QuestionBody::Written {
            answer_boxes: 1,
            expected_answers: Some(vec!["Concise definition/example".to_string()]),
        },
    }
}
