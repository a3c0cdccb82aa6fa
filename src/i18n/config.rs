//! Language configuration shared by the resolver.

use crate::i18n::Language;
use serde::Serialize;
use std::str::FromStr;

/// Name of the cookie holding an explicit language choice.
pub const DEFAULT_COOKIE_NAME: &str = "preferred-language";

/// Client-side storage key the language switcher writes to.
pub const DEFAULT_LOCAL_STORAGE_KEY: &str = "preferred-language";

/// How the Accept-Language scan treats an unsupported top candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegotiationMode {
    /// Only the highest-quality candidate is considered. If it is not
    /// supported the fallback language wins, even when a lower-quality
    /// candidate would match.
    #[default]
    FirstCandidate,
    /// Walk the quality-sorted candidates until one is supported.
    ScanUntilMatch,
}

impl FromStr for NegotiationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-candidate" => Ok(NegotiationMode::FirstCandidate),
            "scan-until-match" => Ok(NegotiationMode::ScanUntilMatch),
            other => anyhow::bail!(
                "Invalid negotiation mode: '{}'. Expected 'first-candidate' or 'scan-until-match'",
                other
            ),
        }
    }
}

/// Immutable language settings, built once at startup and handed to the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// Returned when the request carries no Accept-Language header
    pub default_language: Language,

    /// Display order for language switchers (not a priority order)
    pub supported_languages: Vec<Language>,

    /// Returned when lookup or negotiation yields nothing supported
    pub fallback_language: Language,

    pub cookie_name: String,

    pub local_storage_key: String,

    pub negotiation: NegotiationMode,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Language::ENGLISH,
            supported_languages: Language::all(),
            fallback_language: Language::ENGLISH,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            local_storage_key: DEFAULT_LOCAL_STORAGE_KEY.to_string(),
            negotiation: NegotiationMode::default(),
        }
    }
}

impl I18nConfig {
    pub fn with_negotiation(mut self, negotiation: NegotiationMode) -> Self {
        self.negotiation = negotiation;
        self
    }

    /// Look up `code` among the supported languages.
    pub fn supported(&self, code: &str) -> Option<Language> {
        self.supported_languages
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
    }
}
