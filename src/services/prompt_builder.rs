use std::fmt::Write;

use crate::constants::prompts::DEFAULT_TOPIC_LABEL;
use crate::models::domain::QuestionType;

/// Input to [`build_prompt`]. Degenerate values fall back to defaults
/// rather than failing: a blank topic becomes a generic label and an empty
/// type list permits all three variants.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub topic: String,
    /// The exact number of questions demanded of the generator.
    pub count: u32,
    pub allowed_types: Vec<QuestionType>,
    /// Untrusted reference material; quoted verbatim, never executed.
    pub reference: Option<String>,
    pub with_answers: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            topic: String::new(),
            count: 5,
            allowed_types: QuestionType::ALL.to_vec(),
            reference: None,
            with_answers: true,
        }
    }
}

/// Renders the configuration into a single instruction string: exact count,
/// per-type JSON schema, JSON-array-only output, uniqueness rules, topic and
/// quoted reference block. Pure and deterministic.
pub fn build_prompt(config: &PromptConfig) -> String {
    let allowed = if config.allowed_types.is_empty() {
        QuestionType::ALL.to_vec()
    } else {
        config.allowed_types.clone()
    };
    let topic = if config.topic.trim().is_empty() {
        DEFAULT_TOPIC_LABEL
    } else {
        config.topic.trim()
    };
    let with_answers = config.with_answers;

    let mut schema = format!(
        "Make EXACTLY {} questions as a JSON array ONLY (no markdown, no prose).\n\
         Each element MUST be one of:\n",
        config.count
    );
    for question_type in &allowed {
        schema.push('\n');
        schema.push_str(&schema_block(*question_type, with_answers));
    }

    let mut rules = String::from("Rules:\n");
    let type_names: Vec<&str> = allowed.iter().map(QuestionType::as_str).collect();
    let _ = writeln!(rules, "- Allowed types ONLY: {}.", type_names.join(", "));
    rules.push_str("- Return ONLY a JSON array (no keys, no wrapper object, no markdown).\n");
    rules.push_str("- IDs can be 1..N in order.\n");
    rules.push_str(
        "- All questions must be UNIQUE. Do not repeat stems, do not use the same template repeatedly.\n",
    );
    rules.push_str(
        "- Vary phrasing and subtopics. Avoid template-y \"Which of the following...\" for every item.\n",
    );
    rules.push_str("- Keep points to small integers (1-3).\n");
    if with_answers {
        rules.push_str(
            "- Include minimal solutions (correctIndex / correctMatches / expectedAnswers) and a 1-2 sentence explanation.",
        );
    } else {
        rules.push_str("- DO NOT include any answers or explanations.");
    }

    let topic_line = format!("Topic: {}.", topic);

    let reference = config
        .reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("None");
    let reference_block = format!(
        "Use the material below as reference (don't copy verbatim).\n---\n{}\n---",
        reference
    );

    [schema.trim_end(), &rules, &topic_line, &reference_block].join("\n\n")
}

fn schema_block(question_type: QuestionType, with_answers: bool) -> String {
    let common = "    \"id\": number,\n    \"text\": string,\n    \"points\": number,\n";
    match question_type {
        QuestionType::MultipleChoice => {
            let mut block = format!(
                "- multiple-choice:\n  {{\n{}    \"type\": \"multiple-choice\",\n    \"options\": string[]",
                common
            );
            if with_answers {
                block.push_str(",\n    \"correctIndex\": number,\n    \"explanation\": string");
            }
            block.push_str("\n  }\n");
            block
        }
        QuestionType::Written => {
            let mut block = format!(
                "- written:\n  {{\n{}    \"type\": \"written\",\n    \"answerBoxes\": number",
                common
            );
            if with_answers {
                block.push_str(",\n    \"expectedAnswers\": string[],\n    \"explanation\": string");
            }
            block.push_str("\n  }\n");
            block
        }
        QuestionType::Matching => {
            let mut block = format!(
                "- matching:\n  {{\n{}    \"type\": \"matching\",\n    \"leftItems\": string[],\n    \"rightItems\": string[]",
                common
            );
            if with_answers {
                block.push_str(",\n    \"correctMatches\": number[],\n    \"explanation\": string");
            }
            block.push_str("\n  }\n");
            block
        }
    }
}
