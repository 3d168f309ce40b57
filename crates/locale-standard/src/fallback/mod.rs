//! Language fallback chains for translation resolution.
//!
//! A [`FallbackTable`] maps a language's ISO 639-1 code to the languages to
//! try, in order, when content in that language is unavailable. Lookups are
//! total: languages without an entry, or without an ISO 639-1 code at all,
//! fall back to the table's universal fallback alone.
//!
//! ```
//! use locale_standard::{FallbackTable, Language};
//!
//! let romansh = Language::parse("rm").unwrap();
//! let chain: Vec<String> = FallbackTable::global()
//!     .chain(romansh)
//!     .iter()
//!     .map(|l| l.to_string())
//!     .collect();
//! assert_eq!(chain, ["fr", "it", "de", "en"]);
//! ```

mod config;
mod data;

pub use config::FallbackConfig;

use crate::error::FallbackError;
use crate::Language;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

static GLOBAL: OnceLock<FallbackTable> = OnceLock::new();

/// Longest chain a table may hold.
pub const MAX_CHAIN_LEN: usize = 5;

/// Immutable mapping from language to ordered fallback chain.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    universal: Language,
    default_chain: [Language; 1],
    chains: HashMap<&'static str, Box<[Language]>>,
}

impl FallbackTable {
    /// The built-in table, built on first use.
    pub fn global() -> &'static FallbackTable {
        GLOBAL.get_or_init(Self::builtin)
    }

    /// Build a fresh copy of the built-in table.
    ///
    /// Entries naming codes unknown to ISO 639 are logged and skipped.
    pub fn builtin() -> Self {
        let mut chains = HashMap::with_capacity(data::CHAINS.len());

        for &(key, codes) in data::CHAINS {
            let Some(alpha2) = Language::from_alpha2(key).ok().and_then(|l| l.alpha2()) else {
                warn!(key, "skipping fallback entry with unknown key");
                continue;
            };

            let chain: Box<[Language]> = codes
                .iter()
                .filter_map(|code| match Language::from_alpha2(code) {
                    Ok(language) => Some(language),
                    Err(err) => {
                        warn!(key, code, %err, "dropping unknown fallback language");
                        None
                    }
                })
                .collect();

            chains.insert(alpha2, chain);
        }

        debug!(entries = chains.len(), "built fallback table");

        Self {
            universal: Language::ENGLISH,
            default_chain: [Language::ENGLISH],
            chains,
        }
    }

    /// Build and validate a table from explicit entries.
    ///
    /// The universal fallback gets an empty chain if the entries leave it
    /// out.
    pub fn new(
        universal: Language,
        entries: impl IntoIterator<Item = (Language, Vec<Language>)>,
    ) -> Result<Self, FallbackError> {
        let universal_key = universal
            .alpha2()
            .ok_or(FallbackError::MissingKey { language: universal })?;

        let mut chains = HashMap::new();
        for (language, chain) in entries {
            let key = language
                .alpha2()
                .ok_or(FallbackError::MissingKey { language })?;
            if chains.insert(key, chain.into_boxed_slice()).is_some() {
                return Err(FallbackError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        chains.entry(universal_key).or_default();

        let table = Self {
            universal,
            default_chain: [universal],
            chains,
        };
        table.validate()?;
        debug!(entries = table.len(), %universal, "built custom fallback table");
        Ok(table)
    }

    /// The languages to try, in order, when `language` is unavailable.
    ///
    /// Never contains `language` itself. Empty only for the universal
    /// fallback.
    pub fn chain(&self, language: Language) -> &[Language] {
        let Some(key) = language.alpha2() else {
            trace!(%language, "no ISO 639-1 code, using universal fallback");
            return &self.default_chain;
        };

        match self.chains.get(key) {
            Some(chain) => chain,
            None => {
                trace!(%language, "no fallback entry, using universal fallback");
                &self.default_chain
            }
        }
    }

    /// The terminal language every chain ends at.
    pub fn universal_fallback(&self) -> Language {
        self.universal
    }

    /// Whether `language` has its own entry.
    pub fn contains(&self, language: Language) -> bool {
        language
            .alpha2()
            .is_some_and(|key| self.chains.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Entries ordered by ISO 639-1 key.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &[Language])> + '_ {
        let mut keys: Vec<_> = self.chains.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter().filter_map(move |key| {
            let language = Language::from_alpha2(key).ok()?;
            Some((language, self.chain(language)))
        })
    }

    /// Check the table's invariants, reporting the first violation.
    ///
    /// Chains must hold at most [`MAX_CHAIN_LEN`] languages and must not
    /// contain their own language or repeat an entry. The universal fallback
    /// must have an empty chain, every chain must end at a language with no
    /// further fallback, and walking chains must never loop.
    pub fn validate(&self) -> Result<(), FallbackError> {
        if !self.chain(self.universal).is_empty() {
            return Err(FallbackError::UniversalNotTerminal {
                language: self.universal,
            });
        }

        for (language, chain) in self.iter() {
            if chain.len() > MAX_CHAIN_LEN {
                return Err(FallbackError::TooLong {
                    language,
                    len: chain.len(),
                    max: MAX_CHAIN_LEN,
                });
            }

            let mut seen = HashSet::with_capacity(chain.len());
            for &entry in chain {
                if entry == language {
                    return Err(FallbackError::SelfReference { language });
                }
                if !seen.insert(entry) {
                    return Err(FallbackError::DuplicateEntry {
                        language,
                        duplicate: entry,
                    });
                }
            }

            if let Some(&last) = chain.last() {
                if last != self.universal && !self.chain(last).is_empty() {
                    return Err(FallbackError::DeadEnd { language, last });
                }
            }
        }

        let mut done = HashSet::new();
        for (language, _) in self.iter() {
            self.walk(language, &mut Vec::new(), &mut done)?;
        }

        Ok(())
    }

    fn walk(
        &self,
        language: Language,
        path: &mut Vec<Language>,
        done: &mut HashSet<Language>,
    ) -> Result<(), FallbackError> {
        if done.contains(&language) {
            return Ok(());
        }
        if path.contains(&language) {
            return Err(FallbackError::Cycle { language });
        }

        path.push(language);
        for &next in self.chain(language) {
            self.walk(next, path, done)?;
        }
        path.pop();

        done.insert(language);
        Ok(())
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}
