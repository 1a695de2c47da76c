use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        generation_client::{GenerationClient, HttpGenerationClient},
        model_service::ModelService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_client: Arc<dyn GenerationClient>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Picks the backend: a remote `/api/generate` deployment when an
    /// endpoint is configured, the in-process OpenAI client otherwise.
    pub fn new(config: Config) -> Self {
        let generation_client: Arc<dyn GenerationClient> = match &config.generate_endpoint {
            Some(endpoint) => {
                log::info!("using remote generation endpoint {}", endpoint);
                Arc::new(HttpGenerationClient::new(endpoint.clone()))
            }
            None => Arc::new(ModelService::new(&config)),
        };

        Self {
            generation_client,
            config: Arc::new(config),
        }
    }

    pub fn with_client(config: Config, client: Arc<dyn GenerationClient>) -> Self {
        Self {
            generation_client: client,
            config: Arc::new(config),
        }
    }
}
