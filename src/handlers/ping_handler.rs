use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::PingResponse};

/// Liveness probe; reports whether an upstream credential is configured.
#[get("/api/ping")]
pub async fn ping(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PingResponse {
        ok: true,
        has_key: state.config.has_api_key(),
        model: state.config.openai_model.clone(),
    })
}
