//! Error types for locale-standard.

use crate::Language;
use thiserror::Error;

/// Errors from parsing a language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// The code was an empty string.
    #[error("language code is empty")]
    Empty,

    /// The code is not two or three ASCII letters.
    #[error("invalid language code format: {code:?}")]
    InvalidFormat { code: String },

    /// The code is well-formed but not assigned in ISO 639.
    #[error("unknown language code: {code}")]
    Unknown { code: String },
}

/// Errors from converting between locales and BCP 47 tags.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The tag is not valid BCP 47.
    #[error("invalid language tag: {0}")]
    Tag(#[from] unic_langid::LanguageIdentifierError),

    /// The tag's language subtag is not a known ISO 639 code.
    #[error(transparent)]
    Language(#[from] LanguageError),
}

/// Errors from building or validating a fallback table.
#[derive(Debug, Error)]
pub enum FallbackError {
    /// A configured key is not a known ISO 639-1 code.
    #[error("fallback key {key:?} is not an ISO 639-1 code: {source}")]
    UnknownKey {
        key: String,
        #[source]
        source: LanguageError,
    },

    /// Two entries share the same ISO 639-1 key.
    #[error("fallback key {key} is listed more than once")]
    DuplicateKey { key: String },

    /// A key or universal language has no two-letter code.
    #[error("{language} has no ISO 639-1 code to use as a fallback key")]
    MissingKey { language: Language },

    /// A chain lists its own language.
    #[error("fallback chain for {language} contains {language} itself")]
    SelfReference { language: Language },

    /// A chain lists the same language twice.
    #[error("fallback chain for {language} lists {duplicate} more than once")]
    DuplicateEntry {
        language: Language,
        duplicate: Language,
    },

    /// A chain is longer than the allowed maximum.
    #[error("fallback chain for {language} has {len} entries, more than {max}")]
    TooLong {
        language: Language,
        len: usize,
        max: usize,
    },

    /// The universal fallback has a non-empty chain.
    #[error("universal fallback {language} must have an empty chain")]
    UniversalNotTerminal { language: Language },

    /// A chain ends at a language that falls back further.
    #[error("fallback chain for {language} ends at {last}, which falls back further")]
    DeadEnd { language: Language, last: Language },

    /// Walking chains revisits a language.
    #[error("fallback chains loop back to {language}")]
    Cycle { language: Language },

    /// The table file could not be read.
    #[error("failed to read fallback table: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    /// The table file is not valid YAML for a fallback table.
    #[error("invalid fallback YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Parse { line: Option<usize>, message: String },
}
