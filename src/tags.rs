//! Turning a free-text purpose into a set of tags which select layout templates.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use itertools::Itertools;
use log::{debug, warn};
use serde::Deserialize;

use crate::{Error, Result};

/// A set of lowercase tags, in no particular order
pub type TagSet = HashSet<String>;

/// Optional external configuration which widens the set of tags a purpose produces.
///
/// Stored as JSON, e.g. `{"synonyms": {"fitness": ["gym", "run"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PromptConfig {
    /// Maps a tag to words which should also produce that tag
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl PromptConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a `PromptConfig` from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(Error::io(path))?;
        Self::from_json_str(&json)
    }

    /// Like [`PromptConfig::load`], but a missing or broken config is only worth a warning: tags
    /// are then synthesized from the purpose alone.
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(config) => {
                debug!(
                    "Loaded {} synonym groups from {}",
                    config.synonyms.len(),
                    path.display()
                );
                Some(config)
            }
            Err(e) => {
                warn!("Prompt config not loaded: {}", e);
                None
            }
        }
    }
}

/// Computes the tags for a (lowercased) purpose.  Every alphanumeric token is a tag, and each
/// synonym group in `config` adds its tag if any of its words appears among the tokens.
pub fn synthesize_tags(purpose: &str, config: Option<&PromptConfig>) -> TagSet {
    let tokens = purpose
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect_vec();

    let mut tags: TagSet = tokens.iter().cloned().collect();
    if let Some(config) = config {
        for (tag, words) in &config.synonyms {
            if words.iter().any(|w| tokens.contains(&w.to_lowercase())) {
                tags.insert(tag.to_lowercase());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &[&str])]) -> PromptConfig {
        PromptConfig {
            synonyms: pairs
                .iter()
                .map(|(tag, words)| {
                    let words = words.iter().map(|w| w.to_string()).collect();
                    (tag.to_string(), words)
                })
                .collect(),
        }
    }

    #[test]
    fn tokens_become_tags() {
        let tags = synthesize_tags("daily meal prep", None);
        assert!(tags.contains("meal"));
        assert!(tags.contains("daily"));
        assert!(tags.contains("prep"));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn punctuation_runs_split_tokens() {
        let tags = synthesize_tags("  budget--&&travel!!2024 ", None);
        let mut tags = tags.into_iter().collect_vec();
        tags.sort();
        assert_eq!(tags, vec!["2024", "budget", "travel"]);
    }

    #[test]
    fn synonyms_add_tags() {
        let cfg = config(&[("nutrition", &["prep"]), ("sleep", &["nap"])]);
        let tags = synthesize_tags("daily meal prep", Some(&cfg));
        assert!(tags.contains("meal"));
        assert!(tags.contains("nutrition"));
        assert!(!tags.contains("sleep"));
    }

    #[test]
    fn synonym_matching_ignores_case() {
        let cfg = config(&[("Fitness", &["GYM"])]);
        let tags = synthesize_tags("gym log", Some(&cfg));
        assert!(tags.contains("fitness"));
    }

    #[test]
    fn empty_purpose_has_no_tags() {
        assert!(synthesize_tags("", None).is_empty());
        assert!(synthesize_tags("!!!", None).is_empty());
    }

    #[test]
    fn config_parses_from_json() {
        let cfg = PromptConfig::from_json_str(r#"{"synonyms": {"fitness": ["gym", "run"]}}"#)
            .unwrap();
        assert_eq!(cfg.synonyms["fitness"], vec!["gym", "run"]);
        // Missing `synonyms` and unknown fields are fine
        let cfg = PromptConfig::from_json_str(r#"{"version": 2}"#).unwrap();
        assert!(cfg.synonyms.is_empty());
    }

    #[test]
    fn broken_config_is_an_error() {
        assert!(matches!(
            PromptConfig::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn missing_config_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            PromptConfig::load_optional(&dir.path().join("prompt-config.json")),
            None
        );
    }

    #[test]
    fn config_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt-config.json");
        std::fs::write(&path, r#"{"synonyms": {"nutrition": ["prep"]}}"#).unwrap();
        let cfg = PromptConfig::load_optional(&path).unwrap();
        assert!(synthesize_tags("meal prep", Some(&cfg)).contains("nutrition"));
    }
}
