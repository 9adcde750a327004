//! Type registry and checker tests

use chrono::{NaiveDate, NaiveTime};
use configtree::checker::validate;
use configtree::registry::{self, TypeDef};
use configtree::*;
use rstest::rstest;
use rust_decimal::Decimal;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_registry_lists_base_and_composite_tags() {
    let tags: Vec<_> = registry::tags().collect();
    for tag in ["int", "str", "sym", "null", "any", "bool", "numeric", "kernel_num", "chrono"] {
        assert!(tags.contains(&tag), "missing tag {}", tag);
    }
}

#[test]
fn test_registry_resolves_concrete() {
    assert_eq!(
        registry::resolve("int"),
        Some(TypeDef::Concrete(ValueType::Integer))
    );
    assert_eq!(
        registry::resolve("date_time"),
        Some(TypeDef::Concrete(ValueType::DateTime))
    );
}

#[test]
fn test_registry_resolves_composites() {
    assert_eq!(
        registry::resolve("numeric"),
        Some(TypeDef::Composite(&["int", "float", "big_decimal"]))
    );
    assert_eq!(
        registry::resolve("bool"),
        Some(TypeDef::Composite(&["true", "false"]))
    );
}

#[test]
fn test_registry_unknown_is_none() {
    assert_eq!(registry::resolve("Integer"), None);
    assert!(!registry::is_known("uint"));
}

// ═══════════════════════════════════════════════════════════════════════
// Tags
// ═══════════════════════════════════════════════════════════════════════

#[rstest]
#[case(Value::Integer(1), "int", true)]
#[case(Value::Float(1.0), "int", false)]
#[case(Value::string("x"), "str", true)]
#[case(Value::symbol("x"), "str", false)]
#[case(Value::symbol("x"), "sym", true)]
#[case(Value::Null, "null", true)]
#[case(Value::Bool(true), "true", true)]
#[case(Value::Bool(false), "true", false)]
#[case(Value::Bool(false), "false", true)]
#[case(Value::map(Mapping::new()), "hash", true)]
#[case(Value::list(vec![]), "array", true)]
#[case(Value::Decimal(Decimal::new(15, 1)), "big_decimal", true)]
#[case(Value::Float(2.5), "float", true)]
#[case(Value::complex(1.0, 1.0), "complex", true)]
#[case(Value::rational(1, 3).unwrap(), "rational", true)]
#[case(Value::Date(date()), "date", true)]
#[case(Value::DateTime(date().and_hms_opt(1, 2, 3).unwrap()), "date", true)]
#[case(Value::Date(date()), "date_time", false)]
#[case(Value::Time(NaiveTime::from_hms_opt(9, 30, 0).unwrap()), "time", true)]
#[case(Value::string("anything"), "any", true)]
#[case(Value::Null, "any", true)]
fn test_base_tags(#[case] value: Value, #[case] tag: &str, #[case] expected: bool) {
    assert_eq!(validate(&value, &TypeSpec::from(tag)), Ok(expected));
}

#[rstest]
#[case(Value::Integer(1), "numeric", true)]
#[case(Value::Float(1.5), "numeric", true)]
#[case(Value::Decimal(Decimal::ONE), "numeric", true)]
#[case(Value::string("x"), "numeric", false)]
#[case(Value::complex(0.0, 1.0), "numeric", false)]
#[case(Value::complex(0.0, 1.0), "kernel_num", true)]
#[case(Value::rational(2, 3).unwrap(), "kernel_num", true)]
#[case(Value::Integer(2), "kernel_num", true)]
#[case(Value::Bool(true), "bool", true)]
#[case(Value::Bool(false), "bool", true)]
#[case(Value::Integer(0), "bool", false)]
#[case(Value::Date(date()), "chrono", true)]
#[case(Value::Time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "chrono", true)]
#[case(Value::string("2024-02-29"), "chrono", false)]
fn test_composite_tags(#[case] value: Value, #[case] tag: &str, #[case] expected: bool) {
    assert_eq!(validate(&value, &TypeSpec::from(tag)), Ok(expected));
}

#[rstest]
#[case("integer")]
#[case("Int")]
#[case("")]
fn test_unknown_tags_fail(#[case] tag: &str) {
    let err = validate(&Value::Integer(1), &TypeSpec::from(tag)).unwrap_err();
    assert_eq!(err.tag, tag);
}

#[test]
fn test_unknown_tag_fails_for_every_value() {
    for value in [Value::Null, Value::Integer(1), Value::string("x")] {
        assert!(validate(&value, &TypeSpec::from("wat")).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Lists and Concrete Types
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_list_spec_matches_any_member() {
    let spec = TypeSpec::from(vec!["int", "str"]);
    assert_eq!(validate(&Value::Integer(1), &spec), Ok(true));
    assert_eq!(validate(&Value::string("x"), &spec), Ok(true));
    assert_eq!(validate(&Value::Float(1.0), &spec), Ok(false));
}

#[test]
fn test_list_spec_mixes_tags_and_types() {
    let spec = TypeSpec::from(vec![
        TypeSpec::from("bool"),
        TypeSpec::from(ValueType::custom("Endpoint")),
    ]);
    let endpoint = Value::custom(CustomValue::new("Endpoint"));
    assert_eq!(validate(&endpoint, &spec), Ok(true));
    assert_eq!(validate(&Value::Bool(true), &spec), Ok(true));
    assert_eq!(validate(&Value::Integer(1), &spec), Ok(false));
}

#[test]
fn test_list_with_unknown_tag_fails() {
    let spec = TypeSpec::from(vec!["str", "strng"]);
    let err = validate(&Value::string("x"), &spec).unwrap_err();
    assert_eq!(err.tag, "strng");
}

#[test]
fn test_concrete_custom_type_and_ancestors() {
    let pg = Value::custom(CustomValue::new("Postgres").with_ancestor("Database"));

    assert_eq!(validate(&pg, &ValueType::custom("Postgres").into()), Ok(true));
    assert_eq!(validate(&pg, &ValueType::custom("Database").into()), Ok(true));
    assert_eq!(validate(&pg, &ValueType::custom("Cache").into()), Ok(false));
    assert_eq!(
        validate(&Value::Integer(5), &ValueType::custom("Database").into()),
        Ok(false)
    );
}

#[test]
fn test_validate_is_deterministic() {
    let spec = TypeSpec::from("numeric");
    let value = Value::Float(0.5);
    let first = validate(&value, &spec);
    for _ in 0..10 {
        assert_eq!(validate(&value, &spec), first);
    }
}
