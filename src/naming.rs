//! Collection names derived from type names.
//!
//! A document store keeps `UserAccount` values in a collection such as
//! `userAccounts` or `user_accounts`. The namer pluralizes the type name
//! and then applies a case style.

use serde::{Deserialize, Serialize};

use crate::casing;
use crate::inflection::{default_vocabulary, Vocabulary};

/// Case style applied to a collection name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// Keep the type name's casing (e.g., UserAccounts)
    Preserve,
    /// PascalCase (e.g., UserAccounts)
    Pascal,
    /// camelCase (e.g., userAccounts)
    #[default]
    Camel,
    /// snake_case (e.g., user_accounts)
    Snake,
    /// kebab-case (e.g., user-accounts)
    Kebab,
}

impl CaseStyle {
    /// Apply this style to a name.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::Pascal => casing::pascalize(name),
            Self::Camel => casing::camelize(name),
            Self::Snake => casing::underscore(name),
            Self::Kebab => casing::dasherize(&casing::underscore(name)),
        }
    }
}

/// Derives collection names with a given vocabulary and style.
#[derive(Debug, Clone, Copy)]
pub struct CollectionNamer<'a> {
    vocabulary: &'a Vocabulary,
    style: CaseStyle,
    pluralize: bool,
}

impl Default for CollectionNamer<'static> {
    fn default() -> Self {
        Self::new(default_vocabulary())
    }
}

impl<'a> CollectionNamer<'a> {
    /// Namer over `vocabulary` with camelCase, pluralizing names.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            style: CaseStyle::default(),
            pluralize: true,
        }
    }

    /// Set the case style.
    pub fn with_style(mut self, style: CaseStyle) -> Self {
        self.style = style;
        self
    }

    /// Turn pluralization on or off.
    pub fn with_pluralize(mut self, pluralize: bool) -> Self {
        self.pluralize = pluralize;
        self
    }

    /// The configured case style.
    pub fn style(&self) -> CaseStyle {
        self.style
    }

    /// Derive the collection name for a type name.
    ///
    /// Type names may already be plural ("UserSettings"), so the number of
    /// the input is treated as unknown.
    pub fn name(&self, type_name: &str) -> String {
        if self.pluralize {
            self.style
                .apply(&self.vocabulary.pluralize_with(type_name, false))
        } else {
            self.style.apply(type_name)
        }
    }

    /// Derive the collection name for `T`.
    pub fn name_of<T: ?Sized>(&self) -> String {
        self.name(short_type_name::<T>())
    }
}

/// Collection name for a type name, using the default vocabulary and
/// camelCase.
///
/// ```
/// assert_eq!(nomen::naming::collection_name("Person"), "people");
/// assert_eq!(nomen::naming::collection_name("UserSettings"), "userSettings");
/// ```
pub fn collection_name(type_name: &str) -> String {
    CollectionNamer::default().name(type_name)
}

/// Collection name for `T`, using the default vocabulary and camelCase.
pub fn collection_name_of<T: ?Sized>() -> String {
    CollectionNamer::default().name_of::<T>()
}

/// The bare name of `T`: no module path, no generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
