use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SpeakerMode {
    /// Classify every webhook through the event table.
    #[default]
    Table,
    /// Every webhook becomes the same "new order" notification.
    Fixed,
}

impl FromStr for SpeakerMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(SpeakerMode::Table),
            "fixed" | "single" => Ok(SpeakerMode::Fixed),
            other => Err(anyhow!("Unknown SPEAKER_MODE '{}', expected 'table' or 'fixed'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub speaker_mode: SpeakerMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => 8080,
        };

        let speaker_mode = match lookup("SPEAKER_MODE") {
            Some(raw) => raw.parse()?,
            None => SpeakerMode::default(),
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            speaker_mode,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
