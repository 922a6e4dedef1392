use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use super::words::{default_words, MAX_NO_OF_WORDS, SCORE_INCREASE};

/// Word list and scoring rules for one game.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "words": ["cat", "dog"], "max_rounds": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub words: Vec<String>,
    pub max_rounds: u32,
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            max_rounds: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), words = config.words.len(), "loaded game config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("malformed game config JSON")
    }

    /// Normalise the word list and reject configs no game can be played with
    pub fn validate(mut self) -> Result<Self> {
        let before = self.words.len();
        self.words = self
            .words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if self.words.len() != before {
            warn!(dropped = before - self.words.len(), "ignoring blank words in word list");
        }

        if self.words.is_empty() {
            bail!("word list is empty");
        }
        if self.max_rounds == 0 {
            bail!("max_rounds must be at least 1");
        }

        let playable = self.playable_rounds();
        if playable < self.max_rounds {
            warn!(
                max_rounds = self.max_rounds,
                distinct_words = playable,
                "not enough distinct words; capping rounds"
            );
        }
        Ok(self)
    }

    /// Rounds a game actually lasts: a word is never shown twice, so a small
    /// pool caps the game length.
    pub fn playable_rounds(&self) -> u32 {
        let distinct = self.words.iter().collect::<HashSet<_>>().len();
        let distinct = u32::try_from(distinct).unwrap_or(u32::MAX);
        self.max_rounds.min(distinct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(words: &[&str], max_rounds: u32) -> GameConfig {
        GameConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            max_rounds,
            score_increase: 20,
        }
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default().validate().unwrap();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.score_increase, 20);
        assert_eq!(config.playable_rounds(), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "max_rounds": 3 }"#).unwrap();
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.score_increase, SCORE_INCREASE);
        assert_eq!(config.words, default_words());
    }

    #[test]
    fn test_full_json() {
        let config = GameConfig::from_json(
            r#"{ "words": ["cat", "dog"], "max_rounds": 2, "score_increase": 5 }"#,
        )
        .unwrap();
        assert_eq!(config, config_with_increase(&["cat", "dog"], 2, 5));
    }

    fn config_with_increase(words: &[&str], max_rounds: u32, score_increase: u32) -> GameConfig {
        GameConfig {
            score_increase,
            ..config(words, max_rounds)
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(GameConfig::from_json("{ words: ").is_err());
        assert!(GameConfig::from_json(r#"{ "max_rounds": -1 }"#).is_err());
    }

    #[test]
    fn test_validate_trims_and_drops_blanks() {
        let config = config(&[" cat ", "", "   ", "dog"], 2).validate().unwrap();
        assert_eq!(config.words, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let err = config(&["", " "], 2).validate().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_rejects_zero_rounds() {
        assert!(config(&["cat"], 0).validate().is_err());
    }

    #[test]
    fn test_small_pool_caps_rounds() {
        let config = config(&["cat", "dog", "cat"], 10).validate().unwrap();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.playable_rounds(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("unscramble-missing-config.json");
        let err = GameConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("unscramble-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "words": ["tea"], "max_rounds": 1 }"#).unwrap();
        let loaded = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.words, vec!["tea".to_string()]);
        assert_eq!(loaded.max_rounds, 1);
    }
}
