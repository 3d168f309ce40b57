//! Test utilities for locale-standard crates.

use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a fallback table to a temporary `fallbacks.yaml`.
///
/// The directory is removed when the returned [`TempDir`] drops.
pub fn fallback_file(yaml: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fallbacks.yaml");
    std::fs::write(&path, yaml).expect("Failed to write fallback file");
    (dir, path)
}

/// Proptest strategies for languages and locales.
pub mod strategies {
    use locale_standard::{Language, Locale, Region, Script};
    use proptest::prelude::*;
    use proptest::sample::select;

    /// Languages without an ISO 639-1 code.
    const ALPHA3_ONLY: &[&str] = &["haw", "tlh", "jbo", "yue", "sco", "nds", "gsw", "ast"];

    const REGIONS: &[&str] = &["US", "GB", "DE", "FR", "BR", "CN", "TW", "JP", "RS", "ZA", "IN"];

    const SCRIPTS: &[&str] = &["Latn", "Cyrl", "Hans", "Hant", "Arab", "Deva"];

    /// Any language with an ISO 639-1 code.
    pub fn alpha2_language() -> impl Strategy<Value = Language> {
        select(Language::all().collect::<Vec<_>>())
    }

    /// A language that only has a three-letter code.
    pub fn alpha3_only_language() -> impl Strategy<Value = Language> {
        let languages: Vec<_> = ALPHA3_ONLY
            .iter()
            .filter_map(|code| Language::from_alpha3(code).ok())
            .collect();
        select(languages)
    }

    pub fn any_language() -> impl Strategy<Value = Language> {
        prop_oneof![4 => alpha2_language(), 1 => alpha3_only_language()]
    }

    pub fn region() -> impl Strategy<Value = Region> {
        select(REGIONS).prop_filter_map("invalid region", |code| code.parse::<Region>().ok())
    }

    pub fn script() -> impl Strategy<Value = Script> {
        select(SCRIPTS).prop_filter_map("invalid script", |code| code.parse::<Script>().ok())
    }

    /// A locale with an optional region and script.
    pub fn locale() -> impl Strategy<Value = Locale> {
        (any_language(), proptest::option::of(region()), proptest::option::of(script())).prop_map(
            |(language, region, script)| {
                let mut locale = Locale::new(language);
                if let Some(region) = region {
                    locale = locale.with_region(region);
                }
                if let Some(script) = script {
                    locale = locale.with_script(script);
                }
                locale
            },
        )
    }
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
