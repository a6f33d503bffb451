//! Integration tests for the `#[derive(Record)]` marshalling code.
//!
//! These tests verify the generated record implementations:
//! - Field descriptor tables
//! - Record-to-row marshalling order
//! - Row-to-record coercion and its failure modes
//! - Table and column naming conventions and overrides

use pretty_assertions::assert_eq;

use loam::{FieldKind, Record, Row, Value};

#[derive(Debug, Default, PartialEq, Record)]
struct UserAccount {
    id: i64,
    email: String,
    active: bool,
}

#[derive(Debug, Default, PartialEq, Record)]
#[loam(table = "people")]
struct Person {
    id: i64,
    first_name: String,
    age: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Gadget {
    id: i64,
    #[loam(column = "display_name")]
    name: String,
    ratio: f64,
    count: i32,
    payload: Vec<u8>,
}

#[test]
fn test_field_descriptor_table() {
    let specs = UserAccount::FIELDS;
    let names: Vec<_> = specs.iter().map(|s| s.name).collect();
    let columns: Vec<_> = specs.iter().map(|s| s.column).collect();
    let kinds: Vec<_> = specs.iter().map(|s| s.kind).collect();

    assert_eq!(names, vec!["id", "email", "active"]);
    assert_eq!(columns, vec!["id", "email", "active"]);
    assert_eq!(kinds, vec![FieldKind::Int, FieldKind::Text, FieldKind::Bool]);
}

#[test]
fn test_table_name_convention() {
    assert_eq!(UserAccount::table_name(), "user_accounts");
    assert_eq!(Gadget::table_name(), "gadgets");
}

#[test]
fn test_table_name_override() {
    assert_eq!(Person::table_name(), "people");
}

#[test]
fn test_to_row_follows_declaration_order() {
    let ada = Person {
        id: 0,
        first_name: "Ada".into(),
        age: 30,
    };

    let row = ada.to_row();
    let columns: Vec<_> = row.columns().collect();
    assert_eq!(columns, vec!["id", "first_name", "age"]);
    assert_eq!(row.get("id"), Some(&Value::Int(0)));
    assert_eq!(row.get("first_name"), Some(&Value::Text("Ada".into())));
    assert_eq!(row.get("age"), Some(&Value::Int(30)));
}

#[test]
fn test_column_override_in_row() {
    let gadget = Gadget {
        id: 1,
        name: "widget".into(),
        ratio: 0.5,
        count: 3,
        payload: vec![1, 2, 3],
    };

    let row = gadget.to_row();
    assert_eq!(row.get("display_name"), Some(&Value::Text("widget".into())));
    assert_eq!(row.get("name"), None);
}

#[test]
fn test_load_row_round_trip() {
    let original = Gadget {
        id: 9,
        name: "widget".into(),
        ratio: 0.5,
        count: 3,
        payload: vec![1, 2, 3],
    };

    let mut loaded = Gadget::default();
    loaded.load_row(&original.to_row()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_load_row_coerces_textual_numbers() {
    let mut row = Row::new();
    row.set("id", Value::Int(1));
    row.set("first_name", Value::Text("Ada".into()));
    row.set("age", Value::Text("30".into()));

    let mut person = Person::default();
    person.load_row(&row).unwrap();
    assert_eq!(person.age, 30);
}

#[test]
fn test_load_row_coerces_integer_bools() {
    // Booleans are stored as integer columns and come back as integers.
    let mut row = Row::new();
    row.set("id", Value::Int(1));
    row.set("email", Value::Text("ada@example.com".into()));
    row.set("active", Value::Int(1));

    let mut account = UserAccount::default();
    account.load_row(&row).unwrap();
    assert!(account.active);
}

#[test]
fn test_load_row_skips_unknown_columns() {
    let mut row = Row::new();
    row.set("id", Value::Int(1));
    row.set("first_name", Value::Text("Ada".into()));
    row.set("age", Value::Int(30));
    row.set("created_at", Value::Text("2026-01-01".into()));

    let mut person = Person::default();
    person.load_row(&row).unwrap();
    assert_eq!(person.first_name, "Ada");
}

#[test]
fn test_load_row_failure_names_column() {
    let mut row = Row::new();
    row.set("id", Value::Int(1));
    row.set("age", Value::Text("thirty".into()));

    let mut person = Person::default();
    let err = person.load_row(&row).unwrap_err();
    assert!(matches!(&err, loam::Error::TypeCoercion { column, .. } if column == "age"));
}

#[test]
fn test_load_row_narrowing_overflow_fails() {
    let mut row = Row::new();
    row.set("count", Value::Int(i64::from(i32::MAX) + 1));

    let mut gadget = Gadget::default();
    let err = gadget.load_row(&row).unwrap_err();
    assert!(matches!(&err, loam::Error::TypeCoercion { column, .. } if column == "count"));
}

#[test]
fn test_id_accessors() {
    let mut person = Person::default();
    assert_eq!(person.id(), 0);
    person.set_id(42);
    assert_eq!(person.id, 42);
}
