use locale_standard::fallback::MAX_CHAIN_LEN;
use locale_standard::{FallbackError, FallbackTable, Language};
use locale_standard_test_utils::strategies::{alpha2_language, alpha3_only_language, any_language};
use locale_standard_test_utils::{assert_err, assert_ok, fallback_file};
use proptest::prelude::*;
use std::collections::HashSet;
use test_case::test_case;

fn codes(chain: &[Language]) -> Vec<String> {
    chain.iter().map(ToString::to_string).collect()
}

#[test_case("nl", &["en"] ; "dutch")]
#[test_case("af", &["nl", "en"] ; "afrikaans")]
#[test_case("sr", &["sq", "en"] ; "serbian")]
#[test_case("en", &[] ; "english")]
#[test_case("rm", &["fr", "it", "de", "en"] ; "romansh")]
#[test_case("aa", &["am", "om", "so", "ti", "en"] ; "afar")]
#[test_case("nb", &["no", "en"] ; "norwegian bokmal")]
#[test_case("wo", &["fr", "ar", "en"] ; "wolof")]
#[test_case("ps", &["en"] ; "pashto without entry")]
#[test_case("tlh", &["en"] ; "klingon without alpha2")]
#[test_case("nld", &["en"] ; "dutch by alpha3")]
fn test_known_chains(code: &str, expected: &[&str]) {
    let language = Language::parse(code).unwrap();
    assert_eq!(codes(language.fallback_chain()), expected);
}

#[test]
fn test_every_language_resolves() {
    let table = FallbackTable::global();
    for language in Language::all() {
        let chain = table.chain(language);
        assert!(!chain.contains(&language), "{} falls back to itself", language);

        let unique: HashSet<_> = chain.iter().collect();
        assert_eq!(unique.len(), chain.len(), "{} has duplicate fallbacks", language);

        if language == Language::ENGLISH {
            assert!(chain.is_empty());
        } else {
            assert_eq!(chain.last(), Some(&Language::ENGLISH), "{} does not end at English", language);
        }
    }
}

/// Longest path from `language` to a terminal language, or `None` past `limit`.
fn depth(table: &FallbackTable, language: Language, limit: usize) -> Option<usize> {
    let chain = table.chain(language);
    if chain.is_empty() {
        return Some(0);
    }
    if limit == 0 {
        return None;
    }
    let mut deepest = 0;
    for &next in chain {
        deepest = deepest.max(depth(table, next, limit - 1)? + 1);
    }
    Some(deepest)
}

#[test]
fn test_recursive_walk_terminates() {
    let table = FallbackTable::global();
    for language in Language::all() {
        assert!(depth(table, language, 16).is_some(), "walk from {} does not terminate", language);
    }
    assert_eq!(depth(table, Language::ENGLISH, 0), Some(0));
    assert_eq!(depth(table, Language::parse("sr").unwrap(), 16), Some(3));
}

#[test]
fn test_chains_stay_short() {
    for (language, chain) in FallbackTable::global().iter() {
        assert!(chain.len() <= MAX_CHAIN_LEN, "{} has {} fallbacks", language, chain.len());
    }
}

#[test]
fn test_concurrent_first_access() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| FallbackTable::global() as *const FallbackTable as usize))
        .collect();
    let addresses: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addresses.len(), 1);
}

#[test]
fn test_load_custom_table_from_file() {
    let (_dir, path) = fallback_file("universal: fr\nchains:\n  br: [fr]\n  wa: [fr]\n  lb: [de, fr]\n");
    let table = assert_ok!(FallbackTable::load(&path));

    let french = Language::parse("fr").unwrap();
    assert_eq!(table.universal_fallback(), french);
    assert!(table.chain(french).is_empty());
    assert_eq!(codes(table.chain(Language::parse("lb").unwrap())), ["de", "fr"]);
    assert_eq!(table.chain(Language::ENGLISH), &[french]);
}

#[test]
fn test_load_missing_file() {
    let (dir, _path) = fallback_file("");
    let err = assert_err!(FallbackTable::load(dir.path().join("missing.yaml")));
    assert!(matches!(err, FallbackError::Read { .. }));
}

#[test]
fn test_load_rejects_dead_end() {
    let (_dir, path) = fallback_file("chains:\n  af: [nl]\n");
    let err = assert_err!(FallbackTable::load(&path));
    assert!(matches!(err, FallbackError::DeadEnd { .. }));
}

#[test]
fn test_load_rejects_overlong_chain() {
    let (_dir, path) = fallback_file("chains:\n  rm: [fr, it, de, es, pt, nl, en]\n");
    let err = assert_err!(FallbackTable::load(&path));
    assert!(matches!(err, FallbackError::TooLong { len: 7, .. }));
}

proptest! {
    #[test]
    fn test_lookup_is_deterministic(language in any_language()) {
        let table = FallbackTable::global();
        let fresh = FallbackTable::builtin();
        prop_assert_eq!(table.chain(language), table.chain(language));
        prop_assert_eq!(table.chain(language), fresh.chain(language));
    }

    #[test]
    fn test_alpha3_only_falls_back_to_english(language in alpha3_only_language()) {
        prop_assert_eq!(language.fallback_chain(), &[Language::ENGLISH]);
    }

    #[test]
    fn test_unlisted_languages_fall_back_to_english(language in alpha2_language()) {
        let table = FallbackTable::global();
        if !table.contains(language) {
            prop_assert_eq!(table.chain(language), &[Language::ENGLISH]);
        }
    }

    #[test]
    fn test_arbitrary_codes_never_panic(code in "[a-zA-Z]{2,3}") {
        if let Ok(language) = Language::parse(&code) {
            prop_assert!(!language.fallback_chain().contains(&language));
        }
    }
}
