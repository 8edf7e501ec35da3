//! English noun inflection.
//!
//! Converts nouns between singular and plural using ordered regex rules,
//! irregular pairs and a set of uncountable words.
//!
//! ```text
//! pluralize / singularize (facade)
//!          │
//!          ▼
//! default_vocabulary()  ── built once per process
//!          │
//!          ▼
//! Vocabulary: uncountables → rules, newest first
//! ```
//!
//! # Example
//!
//! ```
//! use nomen::inflection::{pluralize, singularize};
//!
//! assert_eq!(pluralize("person"), "people");
//! assert_eq!(pluralize("Box"), "Boxes");
//! assert_eq!(singularize("children"), "child");
//! assert_eq!(pluralize("sheep"), "sheep");
//! ```

mod defaults;
mod error;
mod rule;
mod vocabulary;

pub use defaults::{build_default, default_vocabulary, EXACT_IRREGULARS, IRREGULARS, UNCOUNTABLES};
pub use error::{InflectionError, InflectionResult};
pub use rule::Rule;
pub use vocabulary::Vocabulary;

/// Pluralize a singular word with the default vocabulary.
pub fn pluralize(word: &str) -> String {
    default_vocabulary().pluralize(word)
}

/// Pluralize with the default vocabulary, stating whether the input is
/// known to be singular. See [`Vocabulary::pluralize_with`].
pub fn pluralize_with(word: &str, input_is_known_to_be_singular: bool) -> String {
    default_vocabulary().pluralize_with(word, input_is_known_to_be_singular)
}

/// Singularize a plural word with the default vocabulary.
pub fn singularize(word: &str) -> String {
    default_vocabulary().singularize(word)
}

/// Singularize with the default vocabulary, stating whether the input is
/// known to be plural. See [`Vocabulary::singularize_with`].
pub fn singularize_with(word: &str, input_is_known_to_be_plural: bool) -> String {
    default_vocabulary().singularize_with(word, input_is_known_to_be_plural)
}

/// Pluralize an optional word; `None` passes through.
pub fn pluralize_opt(word: Option<&str>) -> Option<String> {
    word.map(pluralize)
}

/// Singularize an optional word; `None` passes through.
pub fn singularize_opt(word: Option<&str>) -> Option<String> {
    word.map(singularize)
}
