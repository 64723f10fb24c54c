use crate::config::Config;
use crate::error::TranslateError;
use crate::fingerprint::{fabricate_id, fabricate_timestamp, ios_client_headers, MethodSpacing};
use crate::language::{resolve_source_lang, resolve_target_lang};
use crate::payload::PostData;
use crate::response::{decode_body, parse_response};
use reqwest::header::CONTENT_ENCODING;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of a successful translation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    /// The fabricated JSON-RPC id the request was sent with
    pub id: i64,
    #[serde(rename = "data")]
    pub translated_text: String,
    /// Alternatives in the order the service returned them
    pub alternatives: Vec<String>,
    /// Source language code that was sent (given or detected)
    pub source_lang: String,
    /// Target language code that was sent
    pub target_lang: String,
}

/// Translate `text` through the iOS client's JSON-RPC endpoint.
///
/// An absent or empty `source_lang` is detected from the text; an absent or
/// empty `target_lang` becomes `EN`. Exactly one request is made, and no
/// request at all when `text` is empty. Failures are never retried.
pub async fn translate(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    source_lang: Option<&str>,
    target_lang: Option<&str>,
    request_alternatives: u32,
) -> Result<TranslationResult, TranslateError> {
    if text.is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let source_lang = resolve_source_lang(source_lang, text);
    let target_lang = resolve_target_lang(target_lang);

    let id = fabricate_id();
    let timestamp = fabricate_timestamp(text);
    let post_data = PostData::handle_text(
        id,
        timestamp,
        text,
        request_alternatives,
        &source_lang,
        &target_lang,
    );
    let body = post_data.to_body()?;

    debug!(
        "Sending translation request id={} timestamp={} spacing={:?} ({} -> {})",
        id,
        timestamp,
        MethodSpacing::for_id(id),
        source_lang,
        target_lang
    );

    let response = client
        .post(&config.endpoint)
        .headers(ios_client_headers())
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!("Translation request failed: {}", e);
            TranslateError::Transport(e)
        })?;

    let status = response.status();
    let content_encoding = response
        .headers()
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let raw = response.bytes().await.map_err(|e| {
        warn!("Failed to read translation response body: {}", e);
        TranslateError::Transport(e)
    })?;
    let decoded = decode_body(content_encoding.as_deref(), raw.to_vec())?;

    let translated = parse_response(status, &decoded)?;

    Ok(TranslationResult {
        id,
        translated_text: translated.text,
        alternatives: translated.alternatives,
        source_lang,
        target_lang,
    })
}
