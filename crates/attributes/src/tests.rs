use std::collections::HashMap;

use serde_json::json;
use weft_core_types::{Attribute, CallSite};

use crate::errors::AttributeError;
use crate::exact::ExactAttributeRegistry;
use crate::loader::load_bindings;
use crate::source::AttributeSource;
use crate::wildcard::WildcardAttributeRegistry;

fn traced() -> Attribute {
    Attribute::marker("traced")
}

fn publishes(kind: &str) -> Attribute {
    Attribute::new("publishes", json!({ "event": kind }))
}

#[test]
fn unknown_site_resolves_to_empty_set() {
    let registry = ExactAttributeRegistry::empty();
    let site = CallSite::new("Account", "withdraw");
    assert_eq!(registry.resolve(&site), vec![]);

    let wildcard = WildcardAttributeRegistry::empty();
    assert_eq!(wildcard.resolve(&site), vec![]);
    assert_eq!(wildcard.resolve_name("anything"), vec![]);
}

#[test]
fn exact_lookup_matches_only_the_registered_site() {
    let site = CallSite::new("Account", "withdraw");
    let other = CallSite::new("Account", "deposit");
    let mut entries = HashMap::new();
    entries.insert(site.clone(), vec![traced()]);
    let registry = ExactAttributeRegistry::new(entries);

    assert_eq!(registry.resolve(&site), vec![traced()]);
    assert_eq!(registry.resolve(&other), vec![]);
    assert_eq!(registry.resolve_name("Account::withdraw"), vec![traced()]);
}

#[test]
fn single_value_and_unit_sequence_are_indistinguishable() {
    let one = WildcardAttributeRegistry::builder()
        .insert_one("Account::withdraw", traced())
        .unwrap()
        .build();
    let many = WildcardAttributeRegistry::builder()
        .insert_many("Account::withdraw", vec![traced()])
        .unwrap()
        .build();

    assert_eq!(
        one.resolve_name("Account::withdraw"),
        many.resolve_name("Account::withdraw")
    );
    assert_eq!(one.resolve_name("Account::withdraw"), vec![traced()]);
}

#[test]
fn literal_entry_beats_wildcard_entry() {
    let registry = WildcardAttributeRegistry::builder()
        .insert_one("Account::*", publishes("account.touched"))
        .unwrap()
        .insert_one("Account::withdraw", traced())
        .unwrap()
        .build();

    assert_eq!(registry.resolve_name("Account::withdraw"), vec![traced()]);
    assert_eq!(
        registry.resolve_name("Account::deposit"),
        vec![publishes("account.touched")]
    );
}

#[test]
fn longest_prefix_wildcard_wins() {
    let registry = WildcardAttributeRegistry::builder()
        .insert_one("*", Attribute::marker("catch-all"))
        .unwrap()
        .insert_one("Account::get*", Attribute::marker("read-only"))
        .unwrap()
        .insert_one("Account::*", Attribute::marker("account"))
        .unwrap()
        .build();

    assert_eq!(
        registry.resolve_name("Account::getBalance"),
        vec![Attribute::marker("read-only")]
    );
    assert_eq!(
        registry.resolve_name("Account::close"),
        vec![Attribute::marker("account")]
    );
    assert_eq!(
        registry.resolve_name("Ledger::post"),
        vec![Attribute::marker("catch-all")]
    );
}

#[test]
fn prefix_ties_fall_back_to_literal_length_then_insertion() {
    // Same empty prefix; "*::close" carries more literal characters.
    let registry = WildcardAttributeRegistry::builder()
        .insert_one("*se", Attribute::marker("short"))
        .unwrap()
        .insert_one("*::close", Attribute::marker("long"))
        .unwrap()
        .build();
    assert_eq!(
        registry.resolve_name("Account::close"),
        vec![Attribute::marker("long")]
    );

    // Fully tied patterns: first registered wins.
    let registry = WildcardAttributeRegistry::builder()
        .insert_one("Account::*", Attribute::marker("first"))
        .unwrap()
        .insert_one("Account::*", Attribute::marker("second"))
        .unwrap()
        .build();
    assert_eq!(
        registry.resolve_name("Account::audit"),
        vec![Attribute::marker("first")]
    );
}

#[test]
fn last_literal_insert_wins_for_same_name() {
    let registry = WildcardAttributeRegistry::builder()
        .insert_one("Account::withdraw", Attribute::marker("old"))
        .unwrap()
        .insert_one("Account::withdraw", Attribute::marker("new"))
        .unwrap()
        .build();
    assert_eq!(
        registry.resolve_name("Account::withdraw"),
        vec![Attribute::marker("new")]
    );
}

#[test]
fn type_level_lookup_fails_loudly() {
    let registry = WildcardAttributeRegistry::empty();
    let err = registry.resolve_type("Account").unwrap_err();
    assert!(matches!(err, AttributeError::TypeLevelUnsupported(_)));
    assert!(err.to_string().contains("Account"));

    let exact = ExactAttributeRegistry::empty();
    assert!(exact.resolve_type("Account").is_err());
}

#[test]
fn install_replaces_the_whole_snapshot() {
    let site = CallSite::new("Account", "withdraw");
    let registry = ExactAttributeRegistry::empty();
    assert_eq!(registry.resolve(&site), vec![]);

    let mut entries = HashMap::new();
    entries.insert(site.clone(), vec![traced()]);
    registry.install(entries);
    assert_eq!(registry.resolve(&site), vec![traced()]);

    registry.install(HashMap::new());
    assert_eq!(registry.resolve(&site), vec![]);
}

#[test]
fn bindings_load_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("attributes.yaml");
    std::fs::write(
        &file_path,
        r#"bindings:
  - pattern: "Account::withdraw"
    attributes:
      - kind: traced
        payload: null
  - pattern: "Account::*"
    attributes:
      - kind: publishes
        payload:
          event: account.touched
"#,
    )
    .unwrap();

    let bindings = load_bindings(&file_path).unwrap();
    assert_eq!(bindings.len(), 2);

    let registry = WildcardAttributeRegistry::from_bindings(&bindings).unwrap();
    assert_eq!(registry.resolve_name("Account::withdraw"), vec![traced()]);
    assert_eq!(
        registry.resolve_name("Account::deposit"),
        vec![publishes("account.touched")]
    );
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("attributes.yaml");
    std::fs::write(&file_path, "bindings: [not a binding").unwrap();
    assert!(matches!(
        load_bindings(&file_path),
        Err(AttributeError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let missing = std::path::Path::new("/definitely/not/here.yaml");
    assert!(matches!(
        load_bindings(missing),
        Err(AttributeError::Io(_))
    ));
}
