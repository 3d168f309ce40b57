//! Loading fallback tables from YAML.

use super::FallbackTable;
use crate::error::FallbackError;
use crate::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Serializable form of a [`FallbackTable`].
///
/// ```yaml
/// universal: en
/// chains:
///   af: [nl, en]
///   nl: [en]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Terminal language. Defaults to English.
    #[serde(default = "default_universal")]
    pub universal: Language,
    /// Chains keyed by ISO 639-1 code.
    #[serde(default)]
    pub chains: BTreeMap<String, Vec<Language>>,
}

fn default_universal() -> Language {
    Language::ENGLISH
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            universal: default_universal(),
            chains: BTreeMap::new(),
        }
    }
}

impl FallbackTable {
    /// Build and validate a table from its serializable form.
    pub fn from_config(config: FallbackConfig) -> Result<Self, FallbackError> {
        let entries = config
            .chains
            .into_iter()
            .map(|(key, chain)| match Language::from_alpha2(&key) {
                Ok(language) => Ok((language, chain)),
                Err(source) => Err(FallbackError::UnknownKey { key, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(config.universal, entries)
    }

    /// Parse and validate a table from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FallbackError> {
        let config: FallbackConfig =
            serde_yaml::from_str(yaml).map_err(|e| FallbackError::Parse {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Load a table from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FallbackError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Export the table, e.g. to review the built-in data.
    pub fn to_config(&self) -> FallbackConfig {
        let chains = self
            .iter()
            .filter_map(|(language, chain)| {
                let key = language.alpha2()?;
                Some((key.to_string(), chain.to_vec()))
            })
            .collect();

        FallbackConfig {
            universal: self.universal,
            chains,
        }
    }
}
