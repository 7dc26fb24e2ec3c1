use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Hosted form endpoint. The contact relay is disabled when unset.
    pub contact_form_endpoint: Option<String>,
    /// JSON content table replacing the built-in one.
    pub content_path: Option<PathBuf>,
    pub cv_output_dir: PathBuf,
    pub typewriter_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            contact_form_endpoint: optional_env("CONTACT_FORM_ENDPOINT"),
            content_path: optional_env("PORTFOLIO_CONTENT").map(PathBuf::from),
            cv_output_dir: PathBuf::from(env_or("CV_OUTPUT_DIR", ".")),
            typewriter_interval: Duration::from_millis(
                env_or("TYPEWRITER_INTERVAL_MS", "5")
                    .parse::<u64>()
                    .context("TYPEWRITER_INTERVAL_MS must be a whole number of milliseconds")?,
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Unset and blank are both `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            contact_form_endpoint: None,
            content_path: None,
            cv_output_dir: PathBuf::from("."),
            typewriter_interval: Duration::from_millis(5),
        }
    }
}
