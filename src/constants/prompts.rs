//! Fixed prompt text and sampling parameters for the upstream generator.

/// System message sent with every chat-completion request.
pub const SYSTEM_PROMPT: &str = "You create quiz questions. Output ONLY a valid JSON array with the exact property names. No markdown fences or extra text.";

/// Model used when the request does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Topic label used when the caller supplies a blank topic.
pub const DEFAULT_TOPIC_LABEL: &str = "this subject";

/// Appended to the prompt on the single parse-failure retry.
pub const UNIQUENESS_REMINDER: &str = "IMPORTANT: All questions must be UNIQUE. Do not reuse the same stem or template. Vary phrasing, subtopics, and structure. Return ONLY a JSON array.";

pub const GENERATION_TEMPERATURE: f32 = 0.7;
pub const GENERATION_MAX_TOKENS: u32 = 2500;
