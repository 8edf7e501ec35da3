//! A single pattern-to-replacement inflection rule.

use regex::{Regex, RegexBuilder};

use super::error::{InflectionError, InflectionResult};

/// A case-insensitive regex rewrite.
///
/// The replacement template uses `regex` syntax, so capture groups are
/// written `${1}`. A group that did not take part in the match expands to
/// the empty string.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. The pattern is always matched case-insensitively.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> InflectionResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| InflectionError::invalid_pattern(pattern, e))?;

        Ok(Self {
            regex,
            replacement: replacement.into(),
        })
    }

    /// The pattern this rule was built from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The replacement template.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to a word.
    ///
    /// Returns `None` when the pattern does not match. Otherwise every
    /// match is substituted with the replacement template.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.regex.is_match(word) {
            return None;
        }
        Some(
            self.regex
                .replace_all(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}
