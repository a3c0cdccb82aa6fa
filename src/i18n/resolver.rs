//! Language resolution for incoming requests.
//!
//! An explicit choice stored in a cookie beats the browser's Accept-Language
//! header, which beats the configured default. Resolution is total: every
//! header combination yields a supported language.

use crate::i18n::negotiation::{parse_accept_language, parse_accept_language_lenient};
use crate::i18n::{I18nConfig, Language, NegotiationMode};
use anyhow::{Context, Result};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::HeaderMap;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Which input decided the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A supported value in the language cookie
    Cookie,
    /// A supported primary subtag in Accept-Language
    Header,
    /// No Accept-Language header at all
    Default,
    /// Nothing usable was found
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub language: Language,
    pub source: ResolutionSource,
}

/// Resolves the content language of a request from its headers.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    config: I18nConfig,
    cookie_pattern: Regex,
}

impl LanguageResolver {
    pub fn new(config: I18nConfig) -> Result<Self> {
        let pattern = format!("{}=([^;]+)", regex::escape(&config.cookie_name));
        let cookie_pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid cookie name: '{}'", config.cookie_name))?;

        Ok(Self {
            config,
            cookie_pattern,
        })
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// Supported languages in display order, for language switchers.
    pub fn supported_languages(&self) -> &[Language] {
        &self.config.supported_languages
    }

    /// Resolve using the cookie first, then Accept-Language.
    pub fn preferred_language(&self, headers: &HeaderMap) -> Language {
        self.resolve(headers).language
    }

    /// Resolve using Accept-Language only, ignoring cookies.
    pub fn language_from_request(&self, headers: &HeaderMap) -> Language {
        self.negotiate(header_str(headers, ACCEPT_LANGUAGE).as_deref())
            .language
    }

    /// Cookie-then-header resolution, reporting which input decided.
    ///
    /// When a cookie header is present it is authoritative: a missing or
    /// unsupported language cookie yields the fallback language rather than
    /// falling through to Accept-Language.
    pub fn resolve(&self, headers: &HeaderMap) -> Resolution {
        match header_str(headers, COOKIE) {
            Some(cookie) => self.from_cookie(&cookie),
            None => self.negotiate(header_str(headers, ACCEPT_LANGUAGE).as_deref()),
        }
    }

    /// Look up the language cookie inside a raw `Cookie` header value.
    pub fn from_cookie(&self, cookie: &str) -> Resolution {
        let value = self
            .cookie_pattern
            .captures(cookie)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match value.and_then(|code| self.config.supported(code)) {
            Some(language) => {
                debug!(language = %language, "Language chosen from cookie");
                Resolution {
                    language,
                    source: ResolutionSource::Cookie,
                }
            }
            None => {
                debug!(
                    cookie_value = value.unwrap_or(""),
                    "Language cookie missing or unsupported, using fallback"
                );
                self.fallback()
            }
        }
    }

    /// Negotiate from a raw Accept-Language header value.
    ///
    /// An empty or blank value counts as no header. `FirstCandidate` matches
    /// the exact primary subtags of the header; `ScanUntilMatch` also
    /// normalizes them and skips empty segments.
    pub fn negotiate(&self, accept_language: Option<&str>) -> Resolution {
        let Some(header) = accept_language.filter(|h| !h.trim().is_empty()) else {
            return Resolution {
                language: self.config.default_language,
                source: ResolutionSource::Default,
            };
        };

        let entries = match self.config.negotiation {
            NegotiationMode::FirstCandidate => parse_accept_language(header),
            NegotiationMode::ScanUntilMatch => parse_accept_language_lenient(header),
        };

        for entry in entries {
            if let Some(language) = self.config.supported(&entry.language) {
                debug!(language = %language, quality = entry.quality, "Language negotiated from header");
                return Resolution {
                    language,
                    source: ResolutionSource::Header,
                };
            }

            if self.config.negotiation == NegotiationMode::FirstCandidate {
                debug!(candidate = %entry.language, "Top Accept-Language candidate unsupported");
                return self.fallback();
            }
        }

        self.fallback()
    }

    fn fallback(&self) -> Resolution {
        Resolution {
            language: self.config.fallback_language,
            source: ResolutionSource::Fallback,
        }
    }
}

/// All non-blank values of `name` joined with `"; "`, or `None` when there
/// are none. Bytes that are not valid UTF-8 are replaced rather than causing
/// the whole value to be dropped.
fn header_str(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .filter(|value| !value.trim().is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}
