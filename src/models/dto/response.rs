use serde::{Deserialize, Serialize};

/// Success body of `POST /api/generate`: the raw text produced by the
/// upstream generator, expected (but not guaranteed) to be a JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub ok: bool,
    pub has_key: bool,
    pub model: String,
}
