//! Configuration module for nomen.
//!
//! Handles the optional TOML config file: vocabulary extensions and
//! collection naming options.

mod settings;

pub use settings::{
    IrregularSettings, NamingSettings, RuleSettings, Settings, SettingsError, VocabularySettings,
};
