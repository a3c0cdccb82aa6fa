//! Language registry: Single source of truth for all supported languages.
//!
//! The set of languages is closed. The registry is built once on first access
//! through `OnceLock` and never mutated afterwards, so it can be shared freely
//! between request handlers.

use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,
}

/// Global language registry.
///
/// Order of `languages` is the display order used by language switchers.
/// It carries no negotiation priority.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Lookup is exact: `"en-US"` or `"EN"` do not match `"en"`. Callers that
    /// hold a full language tag reduce it to its primary subtag first.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in display order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
    ]
}
