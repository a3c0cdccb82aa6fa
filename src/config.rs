use crate::i18n::{I18nConfig, Language, NegotiationMode, DEFAULT_COOKIE_NAME};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Language resolution
    pub i18n: I18nConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("Invalid PORT: '{}'", v))?,
                Err(_) => 8080,
            },

            // Language resolution
            i18n: I18nConfig {
                default_language: language_var("DEFAULT_LANGUAGE")?,
                fallback_language: language_var("FALLBACK_LANGUAGE")?,
                cookie_name: std::env::var("LANGUAGE_COOKIE_NAME")
                    .ok()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
                negotiation: match std::env::var("LANGUAGE_NEGOTIATION") {
                    Ok(v) => v
                        .parse::<NegotiationMode>()
                        .context("Invalid LANGUAGE_NEGOTIATION")?,
                    Err(_) => NegotiationMode::default(),
                },
                ..I18nConfig::default()
            },
        })
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn language_var(name: &str) -> Result<Language> {
    match std::env::var(name) {
        Ok(v) => v
            .parse::<Language>()
            .with_context(|| format!("Invalid {}", name)),
        Err(_) => Ok(Language::ENGLISH),
    }
}
