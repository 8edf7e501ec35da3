//! Ordered rule tables for one language.
//!
//! A [`Vocabulary`] holds two rule lists, one per direction, plus a set of
//! uncountable words. Lookups walk a list from the most recently added rule
//! back to the first, so rules registered later override earlier, more
//! generic ones. Irregular pairs are not stored separately; they become
//! ordinary rules in both lists.

use std::collections::HashSet;

use tracing::trace;

use super::error::{InflectionError, InflectionResult};
use super::rule::Rule;

/// A set of inflection rules.
///
/// Build it up with the `add_*` methods, then only read from it. The
/// process-wide English instance is [`super::default_vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary. With no rules, every word is returned
    /// unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a singular → plural rule.
    pub fn add_plural(&mut self, pattern: &str, replacement: &str) -> InflectionResult<()> {
        self.plurals.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register a plural → singular rule.
    pub fn add_singular(&mut self, pattern: &str, replacement: &str) -> InflectionResult<()> {
        self.singulars.push(Rule::new(pattern, replacement)?);
        Ok(())
    }

    /// Register an irregular singular/plural pair.
    ///
    /// With `match_ending` the pair also fires as the tail of a longer word
    /// ("superman" → "supermen"); the first letter is captured so its case
    /// survives. Without it only the exact word matches, which is needed
    /// for short words like "is" that appear inside other words.
    pub fn add_irregular(
        &mut self,
        singular: &str,
        plural: &str,
        match_ending: bool,
    ) -> InflectionResult<()> {
        let (Some((s_head, s_tail)), Some((p_head, p_tail))) =
            (split_first(singular), split_first(plural))
        else {
            return Err(InflectionError::EmptyIrregular {
                singular: singular.to_string(),
                plural: plural.to_string(),
            });
        };

        if match_ending {
            self.add_plural(
                &format!("({}){}$", regex::escape(s_head), regex::escape(s_tail)),
                &format!("${{1}}{}", escape_replacement(p_tail)),
            )?;
            self.add_singular(
                &format!("({}){}$", regex::escape(p_head), regex::escape(p_tail)),
                &format!("${{1}}{}", escape_replacement(s_tail)),
            )?;
        } else {
            self.add_plural(
                &format!("^{}$", regex::escape(singular)),
                &escape_replacement(plural),
            )?;
            self.add_singular(
                &format!("^{}$", regex::escape(plural)),
                &escape_replacement(singular),
            )?;
        }
        Ok(())
    }

    /// Register a word whose singular and plural forms are the same.
    pub fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    /// Whether `word` is uncountable (case-insensitive).
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    /// Plural rules in registration order.
    pub fn plural_rules(&self) -> &[Rule] {
        &self.plurals
    }

    /// Singular rules in registration order.
    pub fn singular_rules(&self) -> &[Rule] {
        &self.singulars
    }

    /// Number of uncountable words.
    pub fn uncountable_count(&self) -> usize {
        self.uncountables.len()
    }

    /// Pluralize a word known to be singular.
    ///
    /// Returns the word unchanged when no rule applies.
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralize_with(word, true)
    }

    /// Pluralize a word, optionally without knowing its grammatical number.
    ///
    /// When `input_is_known_to_be_singular` is false, a word that looks
    /// plural already is left alone: if singularizing it gives a different
    /// word (other than just dropping a trailing "s") that pluralizes back
    /// to the input, and direct pluralization would have changed it, the
    /// input is returned as is.
    pub fn pluralize_with(&self, word: &str, input_is_known_to_be_singular: bool) -> String {
        let result = self.try_pluralize(word);

        if input_is_known_to_be_singular {
            return result.unwrap_or_else(|| word.to_string());
        }

        let as_singular = self.try_singularize(word);
        let as_singular_as_plural = as_singular.as_deref().and_then(|s| self.try_pluralize(s));

        if let Some(singular) = as_singular.as_deref() {
            if singular != word
                && format!("{singular}s") != word
                && as_singular_as_plural.as_deref() == Some(word)
                && result.as_deref() != Some(word)
            {
                return word.to_string();
            }
        }

        result.unwrap_or_else(|| word.to_string())
    }

    /// Singularize a word known to be plural.
    ///
    /// Returns the word unchanged when no rule applies.
    pub fn singularize(&self, word: &str) -> String {
        self.singularize_with(word, true)
    }

    /// Singularize a word, optionally without knowing its grammatical number.
    ///
    /// Mirror of [`Vocabulary::pluralize_with`]: a word whose plural
    /// (other than just appending "s") singularizes back to itself, and
    /// which a singular rule would have changed, is returned as is.
    pub fn singularize_with(&self, word: &str, input_is_known_to_be_plural: bool) -> String {
        let result = self.try_singularize(word);

        if input_is_known_to_be_plural {
            return result.unwrap_or_else(|| word.to_string());
        }

        let as_plural = self.try_pluralize(word);
        let as_plural_as_singular = as_plural.as_deref().and_then(|p| self.try_singularize(p));

        if as_plural.as_deref() != Some(word)
            && as_plural.as_deref() != Some(format!("{word}s").as_str())
            && as_plural_as_singular.as_deref() == Some(word)
            && result.as_deref() != Some(word)
        {
            return word.to_string();
        }

        result.unwrap_or_else(|| word.to_string())
    }

    /// Resolve the plural rules against `word`.
    ///
    /// `None` means no rule matched. Empty and uncountable words resolve to
    /// themselves.
    pub fn try_pluralize(&self, word: &str) -> Option<String> {
        self.apply_rules(&self.plurals, word)
    }

    /// Resolve the singular rules against `word`.
    ///
    /// `None` means no rule matched. Empty and uncountable words resolve to
    /// themselves.
    pub fn try_singularize(&self, word: &str) -> Option<String> {
        self.apply_rules(&self.singulars, word)
    }

    fn apply_rules(&self, rules: &[Rule], word: &str) -> Option<String> {
        if word.is_empty() || self.is_uncountable(word) {
            return Some(word.to_string());
        }

        rules.iter().rev().find_map(|rule| {
            let result = rule.apply(word)?;
            trace!(word, pattern = rule.pattern(), result = %result, "inflection rule matched");
            Some(result)
        })
    }
}

fn split_first(word: &str) -> Option<(&str, &str)> {
    let first = word.chars().next()?;
    Some(word.split_at(first.len_utf8()))
}

fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}
