//! Integration tests for identifier casing.

use nomen::casing::{camelize, dasherize, hyphenate, pascalize, underscore};

#[test]
fn test_pascalize() {
    assert_eq!(pascalize("customer"), "Customer");
    assert_eq!(pascalize("customer_first_name"), "CustomerFirstName");
    assert_eq!(pascalize("alreadyPascal"), "AlreadyPascal");
    assert_eq!(pascalize("order_v2"), "OrderV2");
}

#[test]
fn test_pascalize_drops_every_underscore() {
    assert_eq!(pascalize("a__b"), "AB");
    assert_eq!(pascalize("trailing_"), "Trailing");
    assert_eq!(pascalize("_id"), "Id");
    assert_eq!(pascalize("__"), "");
    assert_eq!(camelize("_user__id_"), "userId");
}

#[test]
fn test_camelize() {
    assert_eq!(camelize("customer_first_name"), "customerFirstName");
    assert_eq!(camelize("Some_title"), "someTitle");
    assert_eq!(camelize("x"), "x");
}

#[test]
fn test_underscore() {
    assert_eq!(underscore("SomeTitle"), "some_title");
    assert_eq!(underscore("someTitle"), "some_title");
    assert_eq!(underscore("some title"), "some_title");
    assert_eq!(underscore("some-title"), "some_title");
    assert_eq!(underscore("some  -  title"), "some_title");
    assert_eq!(underscore("already_snake"), "already_snake");
    assert_eq!(underscore("HTMLParser"), "html_parser");
    assert_eq!(underscore("OrderV2Line"), "order_v2_line");
}

#[test]
fn test_dasherize_and_hyphenate_match() {
    assert_eq!(dasherize("some_title"), "some-title");
    assert_eq!(hyphenate("some_title"), "some-title");
    assert_eq!(dasherize("no_under_scores_left"), hyphenate("no_under_scores_left"));
    assert_eq!(dasherize("plain"), "plain");
}

#[test]
fn test_underscore_of_pascalize_is_snake() {
    for input in ["customer", "customer_first_name", "user_account_v2", "order_line"] {
        assert_eq!(underscore(&pascalize(input)), input, "round trip for '{input}'");
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(pascalize(""), "");
    assert_eq!(camelize(""), "");
    assert_eq!(underscore(""), "");
    assert_eq!(dasherize(""), "");
}
