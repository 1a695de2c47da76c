use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::dto::request::GenerateQuizRequest,
    services::{
        prompt_builder::{build_prompt, PromptConfig},
        quiz_generator::{generate_quiz_questions, GenerateOptions},
    },
};

/// Builds a prompt from the request and runs the full generation pipeline.
/// Always answers 200 with exactly the requested number of questions when
/// enforcement is on; worst case the batch is entirely synthesized.
#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let count = request.count.unwrap_or(5).max(1);

    let prompt = build_prompt(&PromptConfig {
        topic: request.topic.clone().unwrap_or_default(),
        count,
        allowed_types: request.allowed_types.clone().unwrap_or_default(),
        reference: request.reference,
        with_answers: request.with_answers.unwrap_or(true),
    });

    let questions = generate_quiz_questions(
        state.generation_client.as_ref(),
        &prompt,
        GenerateOptions {
            count: Some(count),
            allowed_types: request.allowed_types,
            enforce_exact_count: request.enforce_exact_count,
            topic: request.topic,
            model: Some(state.config.openai_model.clone()),
        },
    )
    .await;

    Ok(HttpResponse::Ok().json(questions))
}
