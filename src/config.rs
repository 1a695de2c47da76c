use secrecy::SecretString;
use std::env;

use crate::constants::prompts::DEFAULT_MODEL;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    /// When set, the pipeline calls a remote `/api/generate` deployment
    /// instead of the in-process OpenAI backend.
    pub generate_endpoint: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            generate_endpoint: env::var("GENERATE_ENDPOINT")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: Some(SecretString::from("test_api_key".to_string())),
            openai_model: DEFAULT_MODEL.to_string(),
            generate_endpoint: None,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }

    #[cfg(test)]
    pub fn test_config_without_key() -> Self {
        Self {
            openai_api_key: None,
            ..Self::test_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.openai_model.is_empty());
        assert!(!config.web_server_host.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.has_api_key());
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.web_server_host, "127.0.0.1");
    }

    #[test]
    fn test_config_without_key_reports_missing() {
        let config = Config::test_config_without_key();

        assert!(!config.has_api_key());
    }
}
