//! Request fingerprinting: the values that make a request look like it came
//! from the DeepL iOS app.
//!
//! The JSON-RPC endpoint is undocumented and only accepts traffic that
//! resembles the official client. Three things are fabricated per call:
//!
//! - the JSON-RPC `id`, shaped like the app's internal counter
//! - the `timestamp`, nudged onto a multiple of `i_count + 1`
//! - the spacing around the `"method"` key in the serialized body
//!
//! The header set sent with every request is fixed here as well.

use rand::Rng;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Lower bound of the random counter before it is scaled by 1000.
pub const ID_COUNTER_MIN: i64 = 8_300_000;

/// Upper bound (inclusive) of the random counter.
pub const ID_COUNTER_MAX: i64 = 8_399_999;

/// The character whose occurrences seed the timestamp adjustment.
pub const TIMESTAMP_SEED_CHAR: char = 'i';

/// Header set of DeepL-iOS 2.9.1 on an iPhone 12 running iOS 16.3.0.
///
/// Names are lowercase so they can be used with `HeaderName::from_static`.
pub const IOS_CLIENT_HEADERS: [(&str, &str); 11] = [
    ("content-type", "application/json"),
    ("accept", "*/*"),
    ("x-app-os-name", "iOS"),
    ("x-app-os-version", "16.3.0"),
    ("accept-language", "en-US,en;q=0.9"),
    ("accept-encoding", "gzip, deflate, br"),
    ("x-app-device", "iPhone13,2"),
    ("user-agent", "DeepL-iOS/2.9.1 iOS 16.3.0 (iPhone13,2)"),
    ("x-app-build", "510265"),
    ("x-app-version", "2.9.1"),
    ("connection", "keep-alive"),
];

/// Fabricate a request id using the thread-local generator.
pub fn fabricate_id() -> i64 {
    fabricate_id_with(&mut rand::rng())
}

/// Fabricate a request id from the given generator.
///
/// The result is always `counter * 1000 + 1` with the counter in
/// `[ID_COUNTER_MIN, ID_COUNTER_MAX]`.
pub fn fabricate_id_with<R: Rng>(rng: &mut R) -> i64 {
    let counter = rng.random_range(ID_COUNTER_MIN..=ID_COUNTER_MAX);
    counter * 1000 + 1
}

/// Number of lowercase `i` characters in the text.
pub fn count_i(text: &str) -> i64 {
    text.chars().filter(|&c| c == TIMESTAMP_SEED_CHAR).count() as i64
}

/// Fabricate the request timestamp for `text` from the current wall clock.
pub fn fabricate_timestamp(text: &str) -> i64 {
    timestamp_at(chrono::Utc::now().timestamp_millis(), count_i(text))
}

/// Adjust a millisecond timestamp for the given `i` count.
///
/// With no `i` the timestamp is returned unchanged. Otherwise it is moved to
/// the next multiple of `i_count + 1` strictly above the previous one.
pub fn timestamp_at(now_ms: i64, i_count: i64) -> i64 {
    if i_count == 0 {
        return now_ms;
    }
    let n = i_count + 1;
    now_ms - now_ms % n + n
}

/// Spacing written around the colon of the `"method"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSpacing {
    /// `"method" : "`
    BothSides,
    /// `"method": "`
    AfterColon,
}

impl MethodSpacing {
    /// Pick the spacing variant for a request id.
    pub fn for_id(id: i64) -> Self {
        if (id + 5) % 29 == 0 || (id + 3) % 13 == 0 {
            MethodSpacing::BothSides
        } else {
            MethodSpacing::AfterColon
        }
    }

    fn token(self) -> &'static str {
        match self {
            MethodSpacing::BothSides => "\"method\" : \"",
            MethodSpacing::AfterColon => "\"method\": \"",
        }
    }
}

/// Rewrite the compact `"method":"` token of a serialized request.
///
/// Nothing else in the payload is touched, so the input must come from a
/// compact serializer.
pub fn apply_method_spacing(payload: &str, spacing: MethodSpacing) -> String {
    payload.replace("\"method\":\"", spacing.token())
}

/// The fixed header set as a `HeaderMap`.
pub fn ios_client_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(IOS_CLIENT_HEADERS.len());
    for (name, value) in IOS_CLIENT_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}
