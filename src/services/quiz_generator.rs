use crate::constants::prompts::DEFAULT_TOPIC_LABEL;
use crate::models::domain::{QuestionType, QuizQuestion};
use crate::services::count_enforcer::{ensure_exact_count, reindex};
use crate::services::generation_client::{fetch_and_parse, GenerationClient};
use crate::services::normalizer::normalize_questions;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Exact number of questions to return; defaults to 5, clamped to >= 1.
    pub count: Option<u32>,
    pub allowed_types: Option<Vec<QuestionType>>,
    /// When true (the default), the result is deduplicated and padded or
    /// truncated to exactly `count`. When false it is merely sliced.
    pub enforce_exact_count: Option<bool>,
    pub topic: Option<String>,
    pub model: Option<String>,
}

/// Runs the whole pipeline: generation call, normalization, type filtering
/// and the exact-count contract. Infallible by design: any upstream failure
/// degrades to an empty batch which the enforcer pads with fillers.
pub async fn generate_quiz_questions(
    client: &dyn GenerationClient,
    prompt: &str,
    options: GenerateOptions,
) -> Vec<QuizQuestion> {
    let count = options.count.unwrap_or(5).max(1) as usize;
    let allowed = options
        .allowed_types
        .filter(|types| !types.is_empty())
        .unwrap_or_else(|| QuestionType::ALL.to_vec());
    let topic = options
        .topic
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TOPIC_LABEL.to_string());
    let enforce = options.enforce_exact_count.unwrap_or(true);
    let model = options
        .model
        .unwrap_or_else(|| crate::constants::prompts::DEFAULT_MODEL.to_string());

    let raw_items = fetch_and_parse(client, prompt, &model).await;
    let normalized = normalize_questions(&raw_items);

    let filtered: Vec<QuizQuestion> = normalized
        .into_iter()
        .filter(|q| allowed.contains(&q.question_type()))
        .collect();
    log::info!(
        "normalized {} item(s), {} after type filtering (target {})",
        raw_items.len(),
        filtered.len(),
        count
    );

    if enforce {
        return ensure_exact_count(filtered, count, &allowed, &topic);
    }

    let mut sliced = filtered;
    sliced.truncate(count);
    reindex(sliced)
}
