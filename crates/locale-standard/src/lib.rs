//! Typed languages, locales, and translation fallback chains.
//!
//! [`Language`] wraps an ISO 639 code; [`Locale`] adds an optional ISO 3166
//! region and ISO 15924 script and converts to and from BCP 47 tags. The
//! [`fallback`] module maps each language to the languages to try when a
//! translation is missing.
//!
//! ```
//! use locale_standard::Language;
//!
//! let afrikaans = Language::parse("af").unwrap();
//! let chain: Vec<String> = afrikaans
//!     .fallback_chain()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(chain, ["nl", "en"]);
//! ```

pub mod error;
pub mod fallback;
mod language;
mod locale;

pub use error::{FallbackError, LanguageError, LocaleError};
pub use fallback::{FallbackConfig, FallbackTable};
pub use language::Language;
pub use locale::Locale;

pub use unic_langid::subtags::{Region, Script};
pub use unic_langid::LanguageIdentifier;
