//! ISO 639 languages.

use crate::error::LanguageError;
use crate::fallback::FallbackTable;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Every ISO 639-1 code, ordered by English language name.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "af", "ak", "sq", "am", "ar", "an", "hy", "as", "av", "ae", "ay", "az", "ba",
    "bm", "eu", "be", "bn", "bi", "bo", "bs", "br", "bg", "my", "ca", "cs", "ch", "ce", "zh",
    "cu", "cv", "kw", "co", "cr", "cy", "da", "de", "dv", "nl", "dz", "el", "en", "eo", "et",
    "ee", "fo", "fa", "fj", "fi", "fr", "fy", "ff", "gd", "ga", "gl", "gv", "gn", "gu", "ht",
    "ha", "he", "hz", "hi", "ho", "hr", "hu", "ig", "is", "io", "ii", "iu", "ie", "ia", "id",
    "ik", "it", "jv", "ja", "kl", "kn", "ks", "kr", "ka", "kk", "km", "ki", "rw", "ky", "kv",
    "kg", "ko", "kj", "ku", "lo", "la", "lv", "li", "ln", "lt", "lb", "lu", "lg", "mk", "mh",
    "ml", "mi", "mr", "ms", "mg", "mt", "mn", "na", "nv", "nr", "nd", "ng", "ne", "nn", "nb",
    "no", "ny", "oc", "oj", "or", "om", "os", "pa", "pi", "pl", "pt", "ps", "qu", "rm", "ro",
    "rn", "ru", "sg", "sa", "si", "sk", "sl", "se", "sm", "sn", "sd", "so", "st", "es", "sc",
    "sr", "ss", "su", "sw", "sv", "ty", "ta", "tt", "te", "tg", "tl", "th", "ti", "to", "tn",
    "ts", "tk", "tr", "tw", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zu",
];

/// A language without regional or script information.
///
/// Wraps a validated ISO 639 code. Construction from an [`isolang::Language`]
/// is total; construction from text goes through [`Language::parse`] and can
/// fail.
///
/// ```
/// use locale_standard::Language;
///
/// let dutch: Language = "nl".parse().unwrap();
/// assert_eq!(dutch.alpha3(), "nld");
/// assert_eq!(dutch.fallback_chain(), &[Language::ENGLISH]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(isolang::Language);

impl Language {
    /// English, the universal fallback of the built-in table.
    pub const ENGLISH: Self = Self(isolang::Language::Eng);

    /// Create a language from an already-validated ISO 639 code.
    pub const fn new(code: isolang::Language) -> Self {
        Self(code)
    }

    /// Look up a language by its ISO 639-1 (two-letter) code.
    pub fn from_alpha2(code: &str) -> Result<Self, LanguageError> {
        let normalized = normalize(code, 2)?;
        isolang::Language::from_639_1(&normalized)
            .map(Self)
            .ok_or_else(|| LanguageError::Unknown {
                code: code.to_string(),
            })
    }

    /// Look up a language by its ISO 639-3 (three-letter) code.
    pub fn from_alpha3(code: &str) -> Result<Self, LanguageError> {
        let normalized = normalize(code, 3)?;
        isolang::Language::from_639_3(&normalized)
            .map(Self)
            .ok_or_else(|| LanguageError::Unknown {
                code: code.to_string(),
            })
    }

    /// Parse a two- or three-letter code, ignoring ASCII case.
    pub fn parse(s: &str) -> Result<Self, LanguageError> {
        match s.len() {
            0 => Err(LanguageError::Empty),
            2 => Self::from_alpha2(s),
            3 => Self::from_alpha3(s),
            _ => Err(LanguageError::InvalidFormat {
                code: s.to_string(),
            }),
        }
    }

    /// The underlying ISO 639 code.
    pub fn code(&self) -> isolang::Language {
        self.0
    }

    /// The ISO 639-1 code, if this language has one.
    pub fn alpha2(&self) -> Option<&'static str> {
        self.0.to_639_1()
    }

    /// The ISO 639-3 code.
    pub fn alpha3(&self) -> &'static str {
        self.0.to_639_3()
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        self.0.to_name()
    }

    /// All languages with an ISO 639-1 code, ordered by English name.
    pub fn all() -> impl Iterator<Item = Language> {
        ISO_639_1
            .iter()
            .filter_map(|code| isolang::Language::from_639_1(code))
            .map(Self)
    }

    /// Languages to try, in order, when content in this language is missing.
    ///
    /// Reads the built-in [`FallbackTable`]. Never empty except for
    /// [`Language::ENGLISH`].
    pub fn fallback_chain(&self) -> &'static [Language] {
        FallbackTable::global().chain(*self)
    }
}

fn normalize(code: &str, len: usize) -> Result<String, LanguageError> {
    if code.is_empty() {
        return Err(LanguageError::Empty);
    }
    if code.len() != len || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(LanguageError::InvalidFormat {
            code: code.to_string(),
        });
    }
    Ok(code.to_ascii_lowercase())
}

impl From<isolang::Language> for Language {
    fn from(code: isolang::Language) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha2().unwrap_or_else(|| self.alpha3()))
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self)
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code).map_err(de::Error::custom)
    }
}
