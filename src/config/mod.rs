//! Tool configuration, read from `.teatool.toml` and overridden by CLI flags.
//!
//! ```toml
//! report_path = "translation_stats.csv"
//! batch_size = 512
//!
//! [languages]
//! de = "German"
//!
//! [scorer]
//! kind = "command"
//! program = "python3"
//! args = ["comet_scorer.py"]
//!
//! [language_id]
//! min_confidence = 0.0
//! ```

pub mod loader;

pub use loader::{load_config, load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME};

use crate::analysis::paraphrase::DEFAULT_BATCH_SIZE;
use crate::analysis::WhatlangIdentifier;
use crate::core::LanguageRegistry;
use crate::errors::{Error, Result};
use crate::io::DEFAULT_REPORT_PATH;
use crate::scoring::{ChrfScorer, CommandScorer, ParaphraseScorer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeatoolConfig {
    pub report_path: PathBuf,
    pub batch_size: usize,
    pub languages: BTreeMap<String, String>,
    pub scorer: ScorerConfig,
    pub language_id: LanguageIdConfig,
}

impl Default for TeatoolConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            batch_size: DEFAULT_BATCH_SIZE,
            languages: BTreeMap::new(),
            scorer: ScorerConfig::default(),
            language_id: LanguageIdConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScorerConfig {
    /// In-process character n-gram F-score.
    #[default]
    Chrf,
    /// External scoring process speaking JSON lines.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LanguageIdConfig {
    pub min_confidence: f64,
}

impl TeatoolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Configuration("batch_size must be > 0".into()));
        }
        if let ScorerConfig::Command { program, .. } = &self.scorer {
            if program.trim().is_empty() {
                return Err(Error::Configuration(
                    "scorer.program must name an executable".into(),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.language_id.min_confidence) {
            return Err(Error::Configuration(format!(
                "language_id.min_confidence must be within [0, 1], got {}",
                self.language_id.min_confidence
            )));
        }
        if let Some((code, _)) = self.languages.iter().find(|(code, _)| code.is_empty()) {
            return Err(Error::Configuration(format!(
                "language code '{code}' must not be empty"
            )));
        }
        Ok(())
    }

    /// Built-in registry extended with the `[languages]` table.
    pub fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::builtin().with_entries(self.languages.clone())
    }

    pub fn build_scorer(&self) -> Box<dyn ParaphraseScorer> {
        match &self.scorer {
            ScorerConfig::Chrf => Box::new(ChrfScorer::default()),
            ScorerConfig::Command { program, args } => {
                Box::new(CommandScorer::new(program.clone(), args.clone()))
            }
        }
    }

    pub fn build_identifier(&self) -> WhatlangIdentifier {
        WhatlangIdentifier::new(self.language_id.min_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TeatoolConfig::default();
        config.validate().unwrap();
        assert_eq!(config.batch_size, 512);
        assert_eq!(config.report_path, PathBuf::from("translation_stats.csv"));
        assert_eq!(config.scorer, ScorerConfig::Chrf);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = TeatoolConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn blank_command_is_rejected() {
        let config = TeatoolConfig {
            scorer: ScorerConfig::Command {
                program: " ".into(),
                args: vec![],
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn confidence_must_be_a_probability() {
        let config = TeatoolConfig {
            language_id: LanguageIdConfig {
                min_confidence: 1.5,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn registry_includes_configured_languages() {
        let mut config = TeatoolConfig::default();
        config.languages.insert("de".into(), "German".into());
        let registry = config.registry();
        assert_eq!(registry.name("de"), Some("German"));
        assert_eq!(registry.name("hi"), Some("Hindi"));
    }
}
