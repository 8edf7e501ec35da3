//! TOML-based configuration for nomen.
//!
//! Example configuration:
//! ```toml
//! [naming]
//! style = "snake"
//! pluralize = true
//!
//! [vocabulary]
//! extend_default = true
//! uncountables = ["metadata"]
//!
//! [[vocabulary.irregulars]]
//! singular = "cactus"
//! plural = "cacti"
//!
//! [[vocabulary.plurals]]
//! pattern = "(octop)us$"
//! replacement = "${1}odes"
//!
//! [[vocabulary.singulars]]
//! pattern = "(octop)odes$"
//! replacement = "${1}us"
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::inflection::{default_vocabulary, InflectionError, Vocabulary};
use crate::naming::{CaseStyle, CollectionNamer};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] InflectionError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Collection naming options.
    pub naming: NamingSettings,

    /// Additions to the inflection rules.
    pub vocabulary: VocabularySettings,
}

/// Collection naming options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Case style of derived collection names.
    pub style: CaseStyle,

    /// Pluralize type names.
    pub pluralize: bool,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            style: CaseStyle::Camel,
            pluralize: true,
        }
    }
}

/// Additions to the inflection rules.
///
/// Entries are registered after the built-in rules, so they take priority.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularySettings {
    /// Start from the built-in English vocabulary instead of an empty one.
    pub extend_default: bool,

    /// Extra singular → plural rules, in registration order.
    pub plurals: Vec<RuleSettings>,

    /// Extra plural → singular rules, in registration order.
    pub singulars: Vec<RuleSettings>,

    /// Extra irregular pairs.
    pub irregulars: Vec<IrregularSettings>,

    /// Extra uncountable words.
    pub uncountables: Vec<String>,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self {
            extend_default: true,
            plurals: Vec::new(),
            singulars: Vec::new(),
            irregulars: Vec::new(),
            uncountables: Vec::new(),
        }
    }
}

impl VocabularySettings {
    /// True when these settings describe exactly the built-in vocabulary.
    pub fn is_default(&self) -> bool {
        self.extend_default
            && self.plurals.is_empty()
            && self.singulars.is_empty()
            && self.irregulars.is_empty()
            && self.uncountables.is_empty()
    }
}

/// A single regex rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleSettings {
    /// Case-insensitive pattern.
    pub pattern: String,

    /// Replacement template (`${1}` for capture groups).
    pub replacement: String,
}

/// An irregular singular/plural pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IrregularSettings {
    pub singular: String,
    pub plural: String,

    /// Also match as the ending of longer words.
    #[serde(default = "default_match_ending")]
    pub match_ending: bool,
}

fn default_match_ending() -> bool {
    true
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `NOMEN_CONFIG`
    /// 2. `./nomen.toml`
    /// 3. `~/.config/nomen/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("NOMEN_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("nomen.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("nomen").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Settings::default())
    }

    /// Build the vocabulary these settings describe.
    ///
    /// The shared default vocabulary is never modified; extensions are
    /// applied to a copy.
    pub fn build_vocabulary(&self) -> Result<Vocabulary, SettingsError> {
        let settings = &self.vocabulary;
        let mut vocab = if settings.extend_default {
            default_vocabulary().clone()
        } else {
            Vocabulary::new()
        };

        for rule in &settings.plurals {
            vocab.add_plural(&rule.pattern, &rule.replacement)?;
        }
        for rule in &settings.singulars {
            vocab.add_singular(&rule.pattern, &rule.replacement)?;
        }
        for irregular in &settings.irregulars {
            vocab.add_irregular(&irregular.singular, &irregular.plural, irregular.match_ending)?;
        }
        for word in &settings.uncountables {
            vocab.add_uncountable(word);
        }

        debug!(
            plurals = settings.plurals.len(),
            singulars = settings.singulars.len(),
            irregulars = settings.irregulars.len(),
            uncountables = settings.uncountables.len(),
            "applied vocabulary settings"
        );
        Ok(vocab)
    }

    /// The configured vocabulary, borrowing the shared default when there
    /// is nothing to add.
    pub fn vocabulary(&self) -> Result<Cow<'static, Vocabulary>, SettingsError> {
        if self.vocabulary.is_default() {
            Ok(Cow::Borrowed(default_vocabulary()))
        } else {
            Ok(Cow::Owned(self.build_vocabulary()?))
        }
    }

    /// A collection namer over `vocabulary` with the configured options.
    pub fn collection_namer<'a>(&self, vocabulary: &'a Vocabulary) -> CollectionNamer<'a> {
        CollectionNamer::new(vocabulary)
            .with_style(self.naming.style)
            .with_pluralize(self.naming.pluralize)
    }
}
