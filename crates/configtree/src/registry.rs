//! Built-in catalog of type tags
//!
//! A tag resolves either to one concrete [`ValueType`] or to a flat list of
//! other tags (a composite). The catalog is fixed; unknown tags resolve to
//! `None` and it is up to the checker to report them.

use crate::value::ValueType;

/// What a tag stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// A single concrete type
    Concrete(ValueType),

    /// "One of" these base tags
    Composite(&'static [&'static str]),
}

const BOOL: &[&str] = &["true", "false"];
const NUMERIC: &[&str] = &["int", "float", "big_decimal"];
const KERNEL_NUM: &[&str] = &["int", "float", "big_decimal", "complex", "rational"];
const CHRONO: &[&str] = &["date", "date_time", "time"];

/// Every known tag, base tags first.
pub const TAGS: &[&str] = &[
    "int",
    "str",
    "sym",
    "null",
    "true",
    "false",
    "hash",
    "array",
    "big_decimal",
    "float",
    "complex",
    "rational",
    "date",
    "date_time",
    "time",
    "any",
    "bool",
    "numeric",
    "kernel_num",
    "chrono",
];

/// Resolve a tag to its definition.
pub fn resolve(tag: &str) -> Option<TypeDef> {
    let def = match tag {
        "int" => TypeDef::Concrete(ValueType::Integer),
        "str" => TypeDef::Concrete(ValueType::String),
        "sym" => TypeDef::Concrete(ValueType::Symbol),
        "null" => TypeDef::Concrete(ValueType::Null),
        "true" => TypeDef::Concrete(ValueType::True),
        "false" => TypeDef::Concrete(ValueType::False),
        "hash" => TypeDef::Concrete(ValueType::Map),
        "array" => TypeDef::Concrete(ValueType::List),
        "big_decimal" => TypeDef::Concrete(ValueType::Decimal),
        "float" => TypeDef::Concrete(ValueType::Float),
        "complex" => TypeDef::Concrete(ValueType::Complex),
        "rational" => TypeDef::Concrete(ValueType::Rational),
        "date" => TypeDef::Concrete(ValueType::Date),
        "date_time" => TypeDef::Concrete(ValueType::DateTime),
        "time" => TypeDef::Concrete(ValueType::Time),
        "any" => TypeDef::Concrete(ValueType::Any),
        "bool" => TypeDef::Composite(BOOL),
        "numeric" => TypeDef::Composite(NUMERIC),
        "kernel_num" => TypeDef::Composite(KERNEL_NUM),
        "chrono" => TypeDef::Composite(CHRONO),
        _ => return None,
    };
    Some(def)
}

/// All known tags, in catalog order.
pub fn tags() -> impl Iterator<Item = &'static str> {
    TAGS.iter().copied()
}

/// Whether `tag` is in the catalog.
pub fn is_known(tag: &str) -> bool {
    resolve(tag).is_some()
}
