//! Schema loader error-message and validation tests.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;
use tabsync_core::{schema, SchemaError, TabName};

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("schema.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = schema::load(file.path()).unwrap_err();
    assert!(matches!(err, SchemaError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("schema.yaml"), "must contain file path, got: {msg}");
}

#[test]
fn load_list_root_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("schema.yaml");
    file.write_str("- name: Users\n  columns: [id]\n").expect("write");

    let err = schema::load(file.path()).unwrap_err();
    assert!(matches!(err, SchemaError::Parse { .. }), "got: {err}");
}

#[test]
fn not_found_message_mentions_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let missing = dir.child("missing.yaml");
    missing.assert(predicate::path::missing());

    let err = schema::load(missing.path()).unwrap_err();
    assert!(err.to_string().starts_with("schema file not found at path:"));
}

#[test]
fn load_does_not_modify_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("schema.yaml");
    let body = "tabs:\n  - name: Users\n    columns: [id, email]\n";
    file.write_str(body).expect("write");

    schema::load(file.path()).expect("load");
    file.assert(body);
}

// ---------------------------------------------------------------------------
// 2. Validation table
// ---------------------------------------------------------------------------

#[rstest]
#[case::entry_without_columns("tabs:\n  - name: Users\n")]
#[case::entry_without_name("tabs:\n  - columns: [id]\n")]
#[case::columns_not_a_list("tabs:\n  - name: Users\n    columns: id\n")]
#[case::unknown_field("tabs:\n  - name: Users\n    columns: [id]\n    colour: red\n")]
#[case::tabs_not_a_list("tabs: Users\n")]
fn malformed_entries_are_parse_errors(#[case] yaml: &str) {
    let err = schema::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, SchemaError::Parse { .. }), "got: {err}");
}

#[rstest]
#[case::blank_name("tabs:\n  - name: \"  \"\n    columns: [id]\n", 1)]
#[case::empty_columns("tabs:\n  - name: Users\n    columns: []\n", 1)]
#[case::second_entry("tabs:\n  - name: Users\n    columns: [id]\n  - name: Orders\n    columns: []\n", 2)]
fn unusable_entries_load_and_are_left_to_reconciliation(#[case] yaml: &str, #[case] tabs: usize) {
    let schema = schema::from_yaml_str(yaml).expect("parse");
    assert_eq!(schema.len(), tabs);
}

#[test]
fn duplicate_tab_names_are_rejected() {
    let yaml = "tabs:\n  - name: Users\n    columns: [id]\n  - name: Users\n    columns: [email]\n";
    let err = schema::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateTab { ref name } if name == "Users"));
}

#[test]
fn tab_names_are_case_sensitive_for_uniqueness() {
    let yaml = "tabs:\n  - name: Users\n    columns: [id]\n  - name: users\n    columns: [id]\n";
    let schema = schema::from_yaml_str(yaml).expect("parse");
    assert!(schema.find(&TabName::from("users")).is_some());
}

#[test]
fn column_text_is_kept_verbatim() {
    let yaml = "tabs:\n  - name: Users\n    columns: [\"Email Address\", \" padded \", \"=SUM(A1)\", \"123\"]\n";
    let schema = schema::from_yaml_str(yaml).expect("parse");
    assert_eq!(
        schema.tabs[0].columns,
        ["Email Address", " padded ", "=SUM(A1)", "123"]
    );
}
