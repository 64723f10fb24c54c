use thiserror::Error;

/// Everything that can end a translation call.
///
/// None of these are retried internally. Callers that want a retry policy
/// (for example on [`TranslateError::RateLimited`]) build it themselves.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no text provided")]
    EmptyInput,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid target language")]
    InvalidTargetLang,

    #[error("rate limited by the translation service (429 Too Many Requests)")]
    RateLimited,

    #[error("failed to decode brotli response body: {0}")]
    Decode(#[source] std::io::Error),

    #[error("failed to parse translation response: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize translation request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("translation service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("translation response contained no translated text")]
    MissingTranslation,
}

impl TranslateError {
    /// Whether the service refused the call because of request volume.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, TranslateError::RateLimited)
    }
}
