//! The JSON-RPC body posted to the translation endpoint.

use crate::error::TranslateError;
use crate::fingerprint::{apply_method_spacing, MethodSpacing};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

pub const JSONRPC_VERSION: &str = "2.0";
pub const METHOD_HANDLE_TEXTS: &str = "LMT_handle_texts";
pub const SPLITTING_NEWLINES: &str = "newlines";

/// Top-level JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub jsonrpc: String,
    pub method: String,
    pub id: i64,
    pub params: Params,
}

#[derive(Debug, Clone, Serialize)]
pub struct Params {
    pub texts: Vec<Text>,
    pub splitting: String,
    pub lang: Lang,
    pub timestamp: i64,
    #[serde(rename = "commonJobParams")]
    pub common_job_params: CommonJobParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct Text {
    pub text: String,
    #[serde(rename = "requestAlternatives")]
    pub request_alternatives: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lang {
    pub source_lang_user_selected: String,
    pub target_lang: String,
}

/// Job parameters the iOS client always sends with the same values
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommonJobParams {
    #[serde(rename = "wasSpoken")]
    pub was_spoken: bool,
    pub transcribe_as: String,
}

impl PostData {
    /// Build a `LMT_handle_texts` request for a single text.
    pub fn handle_text(
        id: i64,
        timestamp: i64,
        text: &str,
        request_alternatives: u32,
        source_lang: &str,
        target_lang: &str,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: METHOD_HANDLE_TEXTS.to_string(),
            id,
            params: Params {
                texts: vec![Text {
                    text: text.to_string(),
                    request_alternatives,
                }],
                splitting: SPLITTING_NEWLINES.to_string(),
                lang: Lang {
                    source_lang_user_selected: source_lang.to_string(),
                    target_lang: target_lang.to_string(),
                },
                timestamp,
                common_job_params: CommonJobParams::default(),
            },
        }
    }

    /// Serialize compactly, then apply the spacing variant chosen by `id`.
    pub fn to_body(&self) -> Result<String, TranslateError> {
        let compact = to_compact_string(self).map_err(TranslateError::Serialize)?;
        Ok(apply_method_spacing(&compact, MethodSpacing::for_id(self.id)))
    }
}

/// Compact formatter that escapes `<`, `>`, `&`, U+2028 and U+2029 inside
/// strings, the way the app's JSON encoder writes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `value` without whitespace, escaping with [`HtmlSafeFormatter`].
pub fn to_compact_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::with_capacity(256);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, HtmlSafeFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
