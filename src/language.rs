//! Source and target language resolution.

use tracing::debug;

/// Target used when the caller does not name one.
pub const DEFAULT_TARGET_LANG: &str = "EN";

/// Resolve the source language, detecting it from `text` when absent or empty.
///
/// When detection cannot name a language the source is left empty, as the
/// app sends it.
pub fn resolve_source_lang(source_lang: Option<&str>, text: &str) -> String {
    match source_lang.filter(|lang| !lang.is_empty()) {
        Some(lang) => lang.to_string(),
        None => detect_language(text).unwrap_or_default(),
    }
}

/// Resolve the target language, defaulting to `EN` when absent or empty.
pub fn resolve_target_lang(target_lang: Option<&str>) -> String {
    target_lang
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_TARGET_LANG)
        .to_string()
}

/// Detect the language of `text` as an uppercase ISO 639-1 code.
///
/// Returns `None` when whatlang finds nothing or the detected language has
/// no two-letter code.
pub fn detect_language(text: &str) -> Option<String> {
    let info = whatlang::detect(text)?;
    let code = iso639_1(info.lang().code())?;
    debug!(
        "Detected source language {} (confidence {:.2})",
        code,
        info.confidence()
    );
    Some(code.to_ascii_uppercase())
}

/// Map whatlang's ISO 639-3 codes to ISO 639-1.
fn iso639_1(code: &str) -> Option<&'static str> {
    let two = match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "nb",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        _ => return None,
    };
    Some(two)
}
