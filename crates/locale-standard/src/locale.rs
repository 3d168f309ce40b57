//! Locales: a language with an optional region and script.

use crate::error::LocaleError;
use crate::Language;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unic_langid::subtags::{Region, Script};
use unic_langid::LanguageIdentifier;

/// Well-known locales, as BCP 47 tags.
const COMMON: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "nl", "ru", "zh", "ja", "ko", "ar", "hi", "pl", "tr",
    "vi", "th", "sv", "da", "no", "fi", "el", "he", "id", "ms", "cs", "ro", "hu", "uk", "ca",
    "hr", "sk", "bg", "sr", "sl", "lt", "lv", "et",
    "en-US", "en-GB", "en-AU", "en-CA", "en-NZ", "en-IE", "en-ZA", "en-IN",
    "es-ES", "es-MX", "es-AR", "es-CO", "es-CL", "es-PE",
    "fr-FR", "fr-CA", "fr-BE", "fr-CH",
    "de-DE", "de-AT", "de-CH",
    "pt-BR", "pt-PT",
    "zh-Hans", "zh-Hant", "zh-Hans-CN", "zh-Hant-TW", "zh-Hant-HK", "zh-Hans-SG",
    "ar-SA", "ar-EG", "ar-AE",
    "ja-JP", "ko-KR", "ru-RU", "it-IT", "nl-NL", "nl-BE", "pl-PL", "tr-TR", "th-TH", "vi-VN",
    "hi-IN", "sv-SE", "da-DK", "no-NO", "fi-FI", "el-GR", "he-IL", "id-ID", "ms-MY", "cs-CZ",
    "ro-RO", "hu-HU", "uk-UA",
    "sr-Latn", "sr-Cyrl", "sr-Latn-RS", "sr-Cyrl-RS",
];

/// A language with an optional ISO 3166 region and ISO 15924 script.
///
/// Converts to and from BCP 47 tags. Only alpha-2 regions are represented;
/// numeric UN M.49 regions such as `419` are dropped when reading a tag.
///
/// ```
/// use locale_standard::Locale;
///
/// let locale: Locale = "zh-hans-cn".parse().unwrap();
/// assert_eq!(locale.to_string(), "zh-Hans-CN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Language,
    region: Option<Region>,
    script: Option<Script>,
}

impl Locale {
    /// A locale with only a language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            region: None,
            script: None,
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the script.
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    /// Build a locale from a parsed BCP 47 tag.
    ///
    /// Variants and numeric regions are ignored. Fails if the language
    /// subtag is not a known ISO 639 code.
    pub fn from_tag(tag: &LanguageIdentifier) -> Result<Self, LocaleError> {
        let language = Language::parse(tag.language.as_str())?;
        let region = tag
            .region
            .as_ref()
            .filter(|region| !region.as_str().bytes().all(|b| b.is_ascii_digit()))
            .cloned();

        Ok(Self {
            language,
            region,
            script: tag.script.as_ref().cloned(),
        })
    }

    /// Convert to a BCP 47 tag.
    pub fn to_tag(&self) -> Result<LanguageIdentifier, LocaleError> {
        Ok(self.to_string().parse::<LanguageIdentifier>()?)
    }

    /// Parse a BCP 47 string such as `en-US` or `sr-Latn-RS`.
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let tag: LanguageIdentifier = s.parse()?;
        Self::from_tag(&tag)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    /// Commonly used locales: major languages alone, then regional and
    /// script variants.
    pub fn common() -> impl Iterator<Item = Locale> {
        COMMON.iter().filter_map(|tag| Self::parse(tag).ok())
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Self::new(language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script.as_str())?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str) -> Region {
        code.parse().unwrap()
    }

    fn script(code: &str) -> Script {
        code.parse().unwrap()
    }

    #[test]
    fn test_builder_and_display() {
        let english = Locale::new(Language::ENGLISH);
        assert_eq!(english.to_string(), "en");

        let american = english.clone().with_region(region("US"));
        assert_eq!(american.to_string(), "en-US");

        let serbian = Locale::new(Language::parse("sr").unwrap())
            .with_region(region("RS"))
            .with_script(script("Latn"));
        assert_eq!(serbian.to_string(), "sr-Latn-RS");
        assert_ne!(english, american);
    }

    #[test]
    fn test_parse_canonicalizes_case() {
        let locale = Locale::parse("ZH-hant-tw").unwrap();
        assert_eq!(locale.language(), Language::parse("zh").unwrap());
        assert_eq!(locale.script().map(|s| s.as_str()), Some("Hant"));
        assert_eq!(locale.region().map(|r| r.as_str()), Some("TW"));
        assert_eq!(locale.to_string(), "zh-Hant-TW");
    }

    #[test]
    fn test_parse_three_letter_language() {
        let locale = Locale::parse("haw-US").unwrap();
        assert_eq!(locale.language().alpha3(), "haw");
        assert_eq!(locale.to_string(), "haw-US");
    }

    #[test]
    fn test_numeric_region_dropped() {
        let locale = Locale::parse("es-419").unwrap();
        assert_eq!(locale.region(), None);
        assert_eq!(locale.to_string(), "es");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Locale::parse("not a tag"), Err(LocaleError::Tag(_))));
        assert!(matches!(
            Locale::parse("xx-US"),
            Err(LocaleError::Language(_))
        ));
    }

    #[test]
    fn test_tag_conversion() {
        let locale = Locale::parse("pt-BR").unwrap();
        let tag = locale.to_tag().unwrap();
        assert_eq!(tag.to_string(), "pt-BR");
        assert_eq!(Locale::from_tag(&tag).unwrap(), locale);
    }

    #[test]
    fn test_common_locales_all_parse() {
        let common: Vec<_> = Locale::common().collect();
        assert_eq!(common.len(), COMMON.len());
        for (locale, tag) in common.iter().zip(COMMON) {
            assert_eq!(locale.to_string(), *tag);
        }
    }

    #[test]
    fn test_serde_as_tag_string() {
        let locale = Locale::parse("en-GB").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"en-GB\"");

        let parsed: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, locale);
    }
}
