//! Internationalization (i18n) for English/Spanish content.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `config`: Immutable language settings injected into the resolver
//! - `negotiation`: Accept-Language header parsing
//! - `resolver`: Cookie-then-header language resolution
//! - `strings`: Localized site strings
//!
//! # Example
//!
//! ```rust,ignore
//! use links_site::i18n::{I18nConfig, LanguageResolver};
//!
//! let resolver = LanguageResolver::new(I18nConfig::default())?;
//! let language = resolver.preferred_language(&headers);
//! ```

mod config;
mod language;
pub mod negotiation;
mod registry;
mod resolver;
mod strings;

pub use config::{I18nConfig, NegotiationMode, DEFAULT_COOKIE_NAME, DEFAULT_LOCAL_STORAGE_KEY};
pub use language::{Language, LanguageError};
pub use negotiation::AcceptLanguageEntry;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{LanguageResolver, Resolution, ResolutionSource};
pub use strings::LanguageStrings;
