use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// How new session identifiers are allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionIdStrategy {
    /// `session_<n>` where n is the store size plus one.
    #[default]
    Sequential,
    /// `session_<uuid>`. Safe under deletion or sharding.
    Opaque,
}

impl FromStr for SessionIdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(SessionIdStrategy::Sequential),
            "opaque" => Ok(SessionIdStrategy::Opaque),
            other => Err(anyhow!(
                "unknown session id strategy '{other}' (expected 'sequential' or 'opaque')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub session_id_strategy: SessionIdStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_id_strategy: match std::env::var("SESSION_ID_STRATEGY") {
                Ok(raw) => raw
                    .parse()
                    .context("SESSION_ID_STRATEGY is not a valid strategy")?,
                Err(_) => SessionIdStrategy::default(),
            },
        })
    }
}
