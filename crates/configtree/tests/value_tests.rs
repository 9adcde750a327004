//! Tests for the Value type

use chrono::{NaiveDate, NaiveTime};
use configtree::*;
use rust_decimal::Decimal;

#[test]
fn test_primitive_values() {
    assert_eq!(Value::Null, Value::Null);

    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Bool(true), Value::Bool(false));

    assert_eq!(Value::Integer(42), Value::Integer(42));
    assert_ne!(Value::Integer(42), Value::Integer(43));

    // Integer and float are distinct types
    assert_ne!(Value::Integer(1), Value::Float(1.0));
}

#[test]
fn test_string_and_symbol_values() {
    let s1 = Value::string("hello");
    let s2 = Value::string("hello");
    let sym = Value::symbol("hello");

    assert_eq!(s1, s2);
    assert_ne!(s1, sym);

    assert_eq!(s1.as_str(), Some("hello"));
    assert_eq!(sym.as_str(), Some("hello"));
    assert!(s1.is_string());
    assert!(!sym.is_string());
}

#[test]
fn test_list_values() {
    let l1 = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
    let l2 = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
    let l3 = Value::list(vec![Value::Integer(1)]);

    assert_eq!(l1, l2);
    assert_ne!(l1, l3);
    assert_eq!(l3.as_list(), Some(&[Value::Integer(1)][..]));
}

#[test]
fn test_map_values_keep_order() {
    let mut entries = Mapping::new();
    entries.insert("z".into(), Value::Integer(1));
    entries.insert("a".into(), Value::Integer(2));
    let map = Value::map(entries);

    assert!(map.is_map());
    let keys: Vec<_> = map.as_map().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[test]
fn test_custom_values() {
    let record = CustomValue::new("Endpoint")
        .with_ancestor("Service")
        .with_field("host", "db")
        .with_field("port", 5432);

    assert_eq!(record.get("port"), Some(&Value::Integer(5432)));
    assert_eq!(record.get("missing"), None);
    assert!(record.is_a("Endpoint"));
    assert!(record.is_a("Service"));
    assert!(!record.is_a("Cache"));

    let value = Value::custom(record.clone());
    assert_eq!(value, Value::custom(record));
    assert_eq!(value.type_name(), "Endpoint");
    assert_eq!(value.value_type(), ValueType::custom("Endpoint"));
}

#[test]
fn test_numeric_values() {
    assert!(Value::rational(1, 0).is_none());
    assert_eq!(Value::rational(2, 4), Value::rational(1, 2));
    assert_eq!(Value::rational(1, -2), Value::rational(-1, 2));

    let r = Rational::new(6, 8).unwrap();
    assert_eq!((r.numer(), r.denom()), (3, 4));

    assert!(Value::Integer(1).is_numeric());
    assert!(Value::Decimal(Decimal::ONE).is_numeric());
    assert!(!Value::complex(1.0, 0.0).is_numeric());
}

// ═══════════════════════════════════════════════════════════════════════
// Extractors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_extractors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Integer(7).as_i64(), Some(7));
    assert_eq!(Value::Integer(7).as_f64(), Some(7.0));
    assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));

    assert_eq!(Value::Null.as_bool(), None);
    assert_eq!(Value::Float(1.0).as_i64(), None);
    assert_eq!(Value::Integer(1).as_str(), None);
    assert_eq!(Value::string("x").as_list(), None);
    assert_eq!(Value::string("x").as_map(), None);
}

// ═══════════════════════════════════════════════════════════════════════
// Type Names
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_type_names() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let cases = [
        (Value::Null, "Null"),
        (Value::Bool(true), "True"),
        (Value::Bool(false), "False"),
        (Value::Integer(1), "Integer"),
        (Value::Float(1.0), "Float"),
        (Value::Decimal(Decimal::ONE), "Decimal"),
        (Value::complex(0.0, 1.0), "Complex"),
        (Value::rational(1, 2).unwrap(), "Rational"),
        (Value::Date(date), "Date"),
        (Value::DateTime(date.and_hms_opt(0, 0, 0).unwrap()), "DateTime"),
        (Value::Time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "Time"),
        (Value::string("s"), "String"),
        (Value::symbol("s"), "Symbol"),
        (Value::list(vec![]), "List"),
        (Value::map(Mapping::new()), "Map"),
    ];
    for (value, name) in cases {
        assert_eq!(value.type_name(), name);
        assert_eq!(value.value_type().name(), name);
    }
}

#[test]
fn test_value_type_parse() {
    assert_eq!(ValueType::parse("Integer"), Some(ValueType::Integer));
    assert_eq!(ValueType::parse("Widget"), Some(ValueType::custom("Widget")));
    assert_eq!(ValueType::parse("widget"), None);
    assert_eq!(ValueType::builtin("Widget"), None);
}

// ═══════════════════════════════════════════════════════════════════════
// From Conversions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42_i32), Value::Integer(42));
    assert_eq!(Value::from(42_i64), Value::Integer(42));
    assert_eq!(Value::from(42_u32), Value::Integer(42));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("hi"), Value::string("hi"));
    assert_eq!(Value::from(String::from("hi")), Value::string("hi"));
    assert_eq!(
        Value::from(vec![Value::Integer(1)]),
        Value::list(vec![Value::Integer(1)])
    );
}

#[test]
fn test_from_option() {
    assert_eq!(Value::from(Some(3)), Value::Integer(3));
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Integer(-3).to_string(), "-3");
    assert_eq!(Value::string("plain").to_string(), "plain");
    assert_eq!(Value::complex(1.0, 2.0).to_string(), "1+2i");
    assert_eq!(Value::rational(3, 4).unwrap().to_string(), "3/4");
    assert_eq!(
        Value::Date(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()).to_string(),
        "2024-12-25"
    );
}
