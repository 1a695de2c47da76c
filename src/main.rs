use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizsmith_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);
    if !state.config.has_api_key() && state.config.generate_endpoint.is_none() {
        log::warn!("no OPENAI_API_KEY configured; /api/generate will answer 500");
    }

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
