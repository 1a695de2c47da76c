pub mod count_enforcer;
pub mod generation_client;
pub mod model_service;
pub mod normalizer;
pub mod prompt_builder;
pub mod quiz_generator;
