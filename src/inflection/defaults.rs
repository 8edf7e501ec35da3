//! The built-in English vocabulary.
//!
//! The tables below are registered in order, and order is precedence: a
//! later entry is tried before an earlier one. Irregular pairs come after
//! the generic rules so they override them.

use std::sync::OnceLock;

use tracing::debug;

use super::error::InflectionResult;
use super::vocabulary::Vocabulary;

static DEFAULT: OnceLock<Vocabulary> = OnceLock::new();

/// Singular → plural rules, generic first.
static PLURAL_RULES: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    ("(ax|test)is$", "${1}es"),
    ("(octop|vir|alumn|fung)us$", "${1}i"),
    ("(alias|status)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat|volcan)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)ix|ex$", "${1}ices"),
    ("([m|l])ouse$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("(quiz)$", "${1}zes"),
    ("(campus)$", "${1}es"),
    ("^is$", "are"),
];

/// Plural → singular rules, generic first.
static SINGULAR_RULES: &[(&str, &str)] = &[
    ("s$", ""),
    ("(n)ews$", "${1}ews"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}sis",
    ),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("([m|l])ice$", "${1}ouse"),
    ("(bus)es$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|ax|test)es$", "${1}is"),
    ("(octop|vir|alumn|fung)i$", "${1}us"),
    ("(alias|status)es$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
    ("(campus)es$", "${1}"),
    ("^are$", "is"),
];

/// Irregular pairs that also match as the end of a longer word.
pub static IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("human", "humans"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("goose", "geese"),
    ("wave", "waves"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("curriculum", "curricula"),
    ("database", "databases"),
    ("criterion", "criteria"),
];

/// Irregular pairs that only match the whole word.
pub static EXACT_IRREGULARS: &[(&str, &str)] = &[
    ("is", "are"),
    ("that", "those"),
    ("this", "these"),
    ("bus", "buses"),
];

/// Words with the same singular and plural form.
pub static UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "aircraft",
    "oz",
    "tsp",
    "tbsp",
    "ml",
    "l",
    "water",
    "waters",
    "semen",
    "sperm",
    "bison",
    "grass",
    "hair",
    "mud",
    "elk",
    "luggage",
    "moose",
    "offspring",
    "salmon",
    "shrimp",
    "someone",
    "swine",
    "trout",
    "tuna",
    "corps",
    "scissors",
    "means",
    "mail",
    "metadata",
];

/// The process-wide English vocabulary.
///
/// Built on first use; concurrent first callers block until the single
/// build finishes and then all see the same instance. Read-only after that.
pub fn default_vocabulary() -> &'static Vocabulary {
    DEFAULT.get_or_init(|| {
        let vocab = build_default().expect("built-in inflection rules must compile");
        debug!(
            plurals = vocab.plural_rules().len(),
            singulars = vocab.singular_rules().len(),
            uncountables = vocab.uncountable_count(),
            "built default vocabulary"
        );
        vocab
    })
}

/// Build a fresh copy of the English vocabulary.
pub fn build_default() -> InflectionResult<Vocabulary> {
    let mut vocab = Vocabulary::new();

    for (pattern, replacement) in PLURAL_RULES {
        vocab.add_plural(pattern, replacement)?;
    }
    for (pattern, replacement) in SINGULAR_RULES {
        vocab.add_singular(pattern, replacement)?;
    }
    for (singular, plural) in IRREGULARS {
        vocab.add_irregular(singular, plural, true)?;
    }
    for (singular, plural) in EXACT_IRREGULARS {
        vocab.add_irregular(singular, plural, false)?;
    }
    for word in UNCOUNTABLES {
        vocab.add_uncountable(word);
    }

    Ok(vocab)
}
