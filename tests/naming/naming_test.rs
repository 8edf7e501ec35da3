//! Integration tests for collection naming.

use insta::assert_snapshot;
use nomen::inflection::Vocabulary;
use nomen::naming::{collection_name, collection_name_of, CaseStyle, CollectionNamer};
use nomen::Inflector;

#[allow(dead_code)]
struct UserAccount;
#[allow(dead_code)]
struct Person;

#[test]
fn test_default_collection_names() {
    assert_eq!(collection_name("UserAccount"), "userAccounts");
    assert_eq!(collection_name("Person"), "people");
    assert_eq!(collection_name("Category"), "categories");
    assert_eq!(collection_name("Address"), "addresses");
    assert_eq!(collection_name("Status"), "statuses");
}

#[test]
fn test_plural_type_names_are_kept() {
    assert_eq!(collection_name("UserSettings"), "userSettings");
    assert_eq!(collection_name("Data"), "data");
    assert_eq!(collection_name("Fish"), "fish");
}

#[test]
fn test_collection_name_of_type() {
    assert_eq!(collection_name_of::<UserAccount>(), "userAccounts");
    assert_eq!(collection_name_of::<Person>(), "people");
    assert_eq!("UserAccount".to_collection_name(), "userAccounts");
}

#[test]
fn test_styles() {
    let names = ["UserAccount", "Person", "HTMLDocument"];
    let styles = [
        CaseStyle::Preserve,
        CaseStyle::Pascal,
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Kebab,
    ];

    let rendered: Vec<String> = styles
        .iter()
        .map(|style| {
            let namer = CollectionNamer::default().with_style(*style);
            let converted: Vec<String> = names.iter().map(|n| namer.name(n)).collect();
            format!("{:?}: {}", style, converted.join(", "))
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    Preserve: UserAccounts, People, HTMLDocuments
    Pascal: UserAccounts, People, HTMLDocuments
    Camel: userAccounts, people, hTMLDocuments
    Snake: user_accounts, people, html_documents
    Kebab: user-accounts, people, html-documents
    ");
}

#[test]
fn test_without_pluralization() {
    let namer = CollectionNamer::default()
        .with_pluralize(false)
        .with_style(CaseStyle::Snake);
    assert_eq!(namer.name("OrderLine"), "order_line");
    assert_eq!(namer.name_of::<Person>(), "person");
}

#[test]
fn test_custom_vocabulary() {
    let mut vocab = Vocabulary::new();
    vocab.add_plural("$", "z").unwrap();
    let namer = CollectionNamer::new(&vocab).with_style(CaseStyle::Kebab);

    assert_eq!(namer.name("UserAccount"), "user-accountz");
    assert_eq!(namer.style(), CaseStyle::Kebab);
}
