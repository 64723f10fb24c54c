//! Command-line wrapper around `deeplx_client::translate`.
//!
//! Usage:
//!   deeplx [--from XX] [--to YY] [--alternatives N] <text...>
//!   echo "Hallo Welt" | deeplx --to EN
//!
//! Optional environment variables (also read from `.env`):
//! - DEEPLX_ENDPOINT (defaults to https://www2.deepl.com/jsonrpc)
//! - DEEPLX_TIMEOUT_SECS (no timeout when unset)
//! - RUST_LOG (defaults to deeplx_client=info)

use anyhow::{bail, Context, Result};
use deeplx_client::{config::Config, translate};
use std::io::Read;
use tracing::info;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    source_lang: Option<String>,
    target_lang: Option<String>,
    alternatives: u32,
    text: Option<String>,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut words = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--from" | "-f" => {
                    parsed.source_lang = Some(args.next().context("--from needs a language code")?)
                }
                "--to" | "-t" => {
                    parsed.target_lang = Some(args.next().context("--to needs a language code")?)
                }
                "--alternatives" | "-a" => {
                    let value = args.next().context("--alternatives needs a number")?;
                    parsed.alternatives = value
                        .parse()
                        .with_context(|| format!("Invalid --alternatives value: {}", value))?;
                }
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                word => words.push(word.to_string()),
            }
        }

        if !words.is_empty() {
            parsed.text = Some(words.join(" "));
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deeplx_client=info".parse()?),
        )
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    let client = config.http_client()?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer.trim_end_matches(&['\r', '\n'][..]).to_string()
        }
    };

    let result = translate(
        &client,
        &config,
        &text,
        args.source_lang.as_deref(),
        args.target_lang.as_deref(),
        args.alternatives,
    )
    .await
    .context("Translation failed")?;

    info!(
        "Translated {} -> {} (id {})",
        result.source_lang, result.target_lang, result.id
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_text_only() {
        let parsed = CliArgs::parse(args(&["hello", "world"])).expect("Should parse");
        assert_eq!(parsed.text.as_deref(), Some("hello world"));
        assert_eq!(parsed.source_lang, None);
        assert_eq!(parsed.target_lang, None);
        assert_eq!(parsed.alternatives, 0);
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = CliArgs::parse(args(&["--from", "EN", "-t", "DE", "-a", "3", "Good morning"]))
            .expect("Should parse");
        assert_eq!(
            parsed,
            CliArgs {
                source_lang: Some("EN".to_string()),
                target_lang: Some("DE".to_string()),
                alternatives: 3,
                text: Some("Good morning".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_no_text_reads_stdin_later() {
        let parsed = CliArgs::parse(args(&["--to", "JA"])).expect("Should parse");
        assert!(parsed.text.is_none());
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(CliArgs::parse(args(&["--to"])).is_err());
    }

    #[test]
    fn test_parse_bad_alternatives() {
        let err = CliArgs::parse(args(&["-a", "many", "hi"])).unwrap_err();
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert!(CliArgs::parse(args(&["--verbose", "hi"])).is_err());
    }
}
