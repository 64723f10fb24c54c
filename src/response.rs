//! Decoding and classification of the service's JSON-RPC response.

use crate::error::TranslateError;
use reqwest::StatusCode;
use serde_json::Value;
use std::io::Read;
use tracing::warn;

/// JSON-RPC "Invalid Request"; the service answers with it for unknown
/// target languages.
pub const INVALID_REQUEST_CODE: &str = "-32600";

const BROTLI_BUFFER_SIZE: usize = 4096;

/// The useful part of a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    pub text: String,
    pub alternatives: Vec<String>,
}

/// Undo `Content-Encoding: br`. Other encodings are already handled by the
/// HTTP client, so the body is returned as-is.
pub fn decode_body(content_encoding: Option<&str>, body: Vec<u8>) -> Result<Vec<u8>, TranslateError> {
    match content_encoding.map(str::trim) {
        Some(encoding) if encoding.eq_ignore_ascii_case("br") => {
            let mut decoded = Vec::new();
            brotli::Decompressor::new(body.as_slice(), BROTLI_BUFFER_SIZE)
                .read_to_end(&mut decoded)
                .map_err(TranslateError::Decode)?;
            Ok(decoded)
        }
        _ => Ok(body),
    }
}

/// Classify a decoded response body.
///
/// An invalid-target-language error in the body wins over the status code;
/// a 429 is reported even when the body is not JSON.
pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<TranslatedText, TranslateError> {
    let parsed: Result<Value, _> = serde_json::from_slice(body);

    if let Ok(json) = &parsed {
        if let Some(error) = json.get("error") {
            if error_code(error).as_deref() == Some(INVALID_REQUEST_CODE) {
                warn!("Translation service rejected the request: {}", error);
                return Err(TranslateError::InvalidTargetLang);
            }
        }
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimited);
    }

    let json = parsed.map_err(TranslateError::Parse)?;

    if let Some(error) = json.get("error") {
        warn!("Translation service returned an error: {}", error);
        return Err(TranslateError::Service {
            code: error_code(error).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }

    let first = json.pointer("/result/texts/0");
    let text = first
        .and_then(|t| t.get("text"))
        .and_then(Value::as_str)
        .ok_or(TranslateError::MissingTranslation)?
        .to_string();

    let alternatives = first
        .and_then(|t| t.get("alternatives"))
        .and_then(Value::as_array)
        .map(|alts| {
            alts.iter()
                .filter_map(|alt| alt.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(TranslatedText { text, alternatives })
}

/// The `code` of a JSON-RPC error object, whether sent as a number or a string.
fn error_code(error: &Value) -> Option<String> {
    match error.get("code")? {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}
