//! Client for the JSON-RPC translation endpoint used by the DeepL iOS app.
//!
//! Requests are fabricated to look like they came from the app: a shaped
//! request id, a timestamp adjusted from the input text, a per-id spacing
//! quirk in the JSON body, and the app's exact header set. One request is
//! made per call and nothing is retried.
//!
//! ```rust,no_run
//! # async fn run() -> anyhow::Result<()> {
//! use deeplx_client::{config::Config, translate};
//!
//! let config = Config::default();
//! let client = config.http_client()?;
//! let result = translate(&client, &config, "Hello", None, Some("DE"), 2).await?;
//! println!("{} {:?}", result.translated_text, result.alternatives);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod language;
pub mod payload;
pub mod response;
pub mod translation;

pub use error::TranslateError;
pub use translation::{translate, TranslationResult};
