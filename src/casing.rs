//! Identifier casing conversions.
//!
//! Total functions over any string; none of them fail.

use regex::Regex;
use std::sync::LazyLock;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Lu}+)(\p{Lu}\p{Ll})").unwrap());
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}\d])(\p{Lu})").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Convert `snake_case` to `PascalCase`.
///
/// The first character and every character after an underscore are
/// upper-cased. All underscores are removed, including leading, trailing
/// and repeated ones.
///
/// ```
/// assert_eq!(nomen::casing::pascalize("customer_first_name"), "CustomerFirstName");
/// ```
pub fn pascalize(input: &str) -> String {
    input
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `snake_case` to `camelCase`.
pub fn camelize(input: &str) -> String {
    let pascal = pascalize(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `PascalCase`, `camelCase`, dashed or spaced text to `snake_case`.
///
/// Acronyms stay together ("HTMLParser" → "html_parser").
pub fn underscore(input: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(input, "${1}_${2}");
    let split = CAMEL_BOUNDARY.replace_all(&split, "${1}_${2}");
    SEPARATOR_RUN.replace_all(&split, "_").to_lowercase()
}

/// Replace underscores with dashes.
pub fn dasherize(input: &str) -> String {
    input.replace('_', "-")
}

/// Same as [`dasherize`].
pub fn hyphenate(input: &str) -> String {
    dasherize(input)
}
