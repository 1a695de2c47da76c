use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::{request::GenerateRequest, response::GenerateResponse},
};

/// Transport boundary: forwards one prompt to the text-generation service
/// and relays back the raw text it produced.
pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;
    if request.prompt.trim().is_empty() {
        return Err(AppError::ValidationError("Missing prompt".to_string()));
    }
    // A remote deployment holds its own credential.
    if !state.config.has_api_key() && state.config.generate_endpoint.is_none() {
        return Err(AppError::MissingCredential);
    }

    let model = request
        .model
        .unwrap_or_else(|| state.config.openai_model.clone());

    let content = state
        .generation_client
        .generate(&request.prompt, &model)
        .await
        .map_err(|err| {
            log::error!("generation call failed: {}", err);
            AppError::from(err)
        })?;

    Ok(HttpResponse::Ok().json(GenerateResponse {
        content: Some(content),
    }))
}

pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
