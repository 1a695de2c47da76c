use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::constants::prompts::UNIQUENESS_REMINDER;
use crate::errors::GenerationError;
use crate::models::dto::response::GenerateResponse;

/// Seam to the text-generation service. Implemented by the in-process
/// OpenAI backend and by [`HttpGenerationClient`] for remote deployments;
/// tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one prompt and returns the raw text the generator produced.
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError>;
}

static OPEN_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(?i:json)?").expect("open fence pattern is valid"));
static CLOSE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```$").expect("close fence pattern is valid"));

/// Strips a leading/trailing Markdown code fence (with optional `json` tag)
/// from generator output.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let without_open = OPEN_FENCE.replace(trimmed, "");
    CLOSE_FENCE.replace(without_open.trim(), "").trim().to_string()
}

/// Calls the generator and parses its output into a list of raw items.
///
/// Transport failures and malformed JSON both degrade rather than
/// propagate: a parse failure earns exactly one retry with a uniqueness /
/// JSON-only amendment appended, and a second failure yields an empty list.
/// Accepted top-level shapes are a bare array, `{"items": [...]}` and
/// `{"questions": [...]}`; anything else counts as empty.
pub async fn fetch_and_parse(client: &dyn GenerationClient, prompt: &str, model: &str) -> Vec<Value> {
    let raw = match client.generate(prompt, model).await {
        Ok(text) => text,
        Err(err) => {
            log::warn!("generation call failed, treating as empty output: {}", err);
            "[]".to_string()
        }
    };

    match parse_items(&raw) {
        Some(value) => value,
        None => {
            let retry_prompt = format!("{}\n\n{}", prompt, UNIQUENESS_REMINDER);
            log::info!("generator output was not valid JSON, retrying once");
            match client.generate(&retry_prompt, model).await {
                Ok(text) => parse_items(&text).unwrap_or_default(),
                Err(err) => {
                    log::warn!("retry call failed: {}", err);
                    Vec::new()
                }
            }
        }
    }
}

fn parse_items(raw: &str) -> Option<Vec<Value>> {
    let stripped = strip_code_fences(raw);
    let parsed: Value = serde_json::from_str(&stripped).ok()?;
    Some(extract_items(parsed))
}

fn extract_items(parsed: Value) -> Vec<Value> {
    match parsed {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("items"), map.remove("questions")) {
            (Some(Value::Array(items)), _) => items,
            (_, Some(Value::Array(items))) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Remote transport: POSTs `{prompt, model}` to a deployed `/api/generate`
/// endpoint and relays back the `content` field, or the structured error
/// body on non-success statuses.
pub struct HttpGenerationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "prompt": prompt, "model": model }))
            .send()
            .await
            .map_err(|err| GenerationError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(GenerationError::Transport {
                message,
                details: body.get("details").cloned(),
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::transport(err.to_string()))?;
        Ok(body.content.unwrap_or_else(|| "[]".to_string()))
    }
}
