//! # nomen
//!
//! Rule-based English noun inflection for deriving collection names from
//! type names.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Facade / Inflector trait / CollectionNamer        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [default_vocabulary(), built once]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Vocabulary                          │
//! │   uncountables → plural / singular rules, newest first   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [casing]
//! ┌─────────────────────────────────────────────────────────┐
//! │      pascalize / camelize / underscore / dasherize       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A TOML config file ([`config::Settings`]) can add rules on top of the
//! built-in English vocabulary and choose the collection name style.

pub mod casing;
pub mod config;
pub mod inflection;
pub mod inflector;
pub mod naming;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::casing::{camelize, dasherize, hyphenate, pascalize, underscore};
    pub use crate::inflection::{
        default_vocabulary, pluralize, pluralize_with, singularize, singularize_with, Vocabulary,
    };
    pub use crate::inflector::Inflector;
    pub use crate::naming::{collection_name, collection_name_of, CaseStyle, CollectionNamer};
}

// Also export at crate root for convenience
pub use inflection::{pluralize, singularize, Vocabulary};
pub use inflector::Inflector;
pub use naming::{collection_name, CaseStyle};
