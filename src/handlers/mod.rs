pub mod generate_handler;
pub mod ping_handler;
pub mod quiz_handler;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/generate")
            .route(web::post().to(generate_handler::generate))
            .default_service(web::route().to(generate_handler::method_not_allowed)),
    )
    .service(ping_handler::ping)
    .service(quiz_handler::generate_quiz);
}
