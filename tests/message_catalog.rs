use practice_errors_wasm::domain::error_classification::{
    ErrorCategory, GENERIC_MESSAGE_KEY, MessageLookup, NETWORK_MESSAGE_KEY, StatusCodeTable,
};
use practice_errors_wasm::infrastructure::i18n::MessageCatalog;
use strum::IntoEnumIterator;

#[test]
fn english_catalog_covers_every_key() {
    let catalog = MessageCatalog::english();

    for (_, key) in StatusCodeTable.entries() {
        assert!(catalog.get(key).is_some(), "missing {}", key);
    }
    for key in [NETWORK_MESSAGE_KEY, GENERIC_MESSAGE_KEY] {
        assert!(catalog.get(key).is_some(), "missing {}", key);
    }
    for category in ErrorCategory::iter() {
        let key = category.title_key();
        assert!(catalog.get(&key).is_some(), "missing {}", key);
    }
}

#[test]
fn english_catalog_snapshot() {
    let rendered = MessageCatalog::english()
        .iter()
        .map(|(key, text)| format!("{} = {}", key, text))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered);
}

#[test]
fn overrides_replace_defaults() {
    let overrides = MessageCatalog::from_json(r#"{"errors":{"network":"Keine Verbindung"}}"#).unwrap();
    let catalog = MessageCatalog::english().merge(overrides);

    assert_eq!(catalog.lookup("errors.network"), "Keine Verbindung");
    assert_eq!(catalog.lookup("errors.notFound"), "The requested record could not be found.");
}

#[test]
fn flat_keys_are_accepted() {
    let catalog = MessageCatalog::from_json(r#"{"errors.generic":"Oops"}"#).unwrap();
    assert_eq!(catalog.lookup("errors.generic"), "Oops");
    assert_eq!(catalog.lookup("errors.unknownKey"), "errors.unknownKey");
}
