//! Method-call access to inflection and casing.
//!
//! ```
//! use nomen::Inflector;
//!
//! assert_eq!("person".pluralize(), "people");
//! assert_eq!("customer_orders".pascalize(), "CustomerOrders");
//! assert_eq!("OrderLine".to_collection_name(), "orderLines");
//! ```

use crate::{casing, inflection, naming};

/// String inflection methods backed by the default vocabulary.
pub trait Inflector {
    /// See [`inflection::pluralize`].
    fn pluralize(&self) -> String;
    /// See [`inflection::singularize`].
    fn singularize(&self) -> String;
    /// See [`casing::pascalize`].
    fn pascalize(&self) -> String;
    /// See [`casing::camelize`].
    fn camelize(&self) -> String;
    /// See [`casing::underscore`].
    fn underscore(&self) -> String;
    /// See [`casing::dasherize`].
    fn dasherize(&self) -> String;
    /// See [`casing::hyphenate`].
    fn hyphenate(&self) -> String;
    /// See [`naming::collection_name`].
    fn to_collection_name(&self) -> String;
}

impl Inflector for str {
    fn pluralize(&self) -> String {
        inflection::pluralize(self)
    }

    fn singularize(&self) -> String {
        inflection::singularize(self)
    }

    fn pascalize(&self) -> String {
        casing::pascalize(self)
    }

    fn camelize(&self) -> String {
        casing::camelize(self)
    }

    fn underscore(&self) -> String {
        casing::underscore(self)
    }

    fn dasherize(&self) -> String {
        casing::dasherize(self)
    }

    fn hyphenate(&self) -> String {
        casing::hyphenate(self)
    }

    fn to_collection_name(&self) -> String {
        naming::collection_name(self)
    }
}
