//! Concrete runtime type identities

use std::fmt;

use super::Value;

/// A concrete type identity, as opposed to a symbolic registry tag.
///
/// `Any` matches every value. `DateTime` is a subtype of `Date`.
/// `Custom` names a host-defined record type (see [`super::CustomValue`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Matches every value
    Any,
    /// `Value::Integer`
    Integer,
    /// `Value::String`
    String,
    /// `Value::Symbol`
    Symbol,
    /// `Value::Null`
    Null,
    /// `Value::Bool(true)`
    True,
    /// `Value::Bool(false)`
    False,
    /// `Value::Map`
    Map,
    /// `Value::List`
    List,
    /// `Value::Decimal`
    Decimal,
    /// `Value::Float`
    Float,
    /// `Value::Complex`
    Complex,
    /// `Value::Rational`
    Rational,
    /// `Value::Date`, and `Value::DateTime` as a subtype
    Date,
    /// `Value::DateTime`
    DateTime,
    /// `Value::Time`
    Time,
    /// A host-defined record type, by name
    Custom(String),
}

const BUILTIN: &[ValueType] = &[
    ValueType::Any,
    ValueType::Integer,
    ValueType::String,
    ValueType::Symbol,
    ValueType::Null,
    ValueType::True,
    ValueType::False,
    ValueType::Map,
    ValueType::List,
    ValueType::Decimal,
    ValueType::Float,
    ValueType::Complex,
    ValueType::Rational,
    ValueType::Date,
    ValueType::DateTime,
    ValueType::Time,
];

impl ValueType {
    /// Shorthand for `ValueType::Custom`
    pub fn custom(name: impl Into<String>) -> Self {
        ValueType::Custom(name.into())
    }

    /// Printable name of the type
    pub fn name(&self) -> &str {
        match self {
            ValueType::Any => "Any",
            ValueType::Integer => "Integer",
            ValueType::String => "String",
            ValueType::Symbol => "Symbol",
            ValueType::Null => "Null",
            ValueType::True => "True",
            ValueType::False => "False",
            ValueType::Map => "Map",
            ValueType::List => "List",
            ValueType::Decimal => "Decimal",
            ValueType::Float => "Float",
            ValueType::Complex => "Complex",
            ValueType::Rational => "Rational",
            ValueType::Date => "Date",
            ValueType::DateTime => "DateTime",
            ValueType::Time => "Time",
            ValueType::Custom(name) => name,
        }
    }

    /// Look up a builtin type by its printable name.
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN.iter().find(|t| t.name() == name).cloned()
    }

    /// Parse a type name: builtins by name, any other capitalized
    /// identifier as a custom type.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(builtin) = Self::builtin(name) {
            return Some(builtin);
        }
        match name.chars().next() {
            Some(c) if c.is_ascii_uppercase() => Some(ValueType::custom(name)),
            _ => None,
        }
    }

    /// Whether `value` is an instance of this type or of a subtype.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueType::Any, _) => true,
            (ValueType::Integer, Value::Integer(_)) => true,
            (ValueType::String, Value::String(_)) => true,
            (ValueType::Symbol, Value::Symbol(_)) => true,
            (ValueType::Null, Value::Null) => true,
            (ValueType::True, Value::Bool(true)) => true,
            (ValueType::False, Value::Bool(false)) => true,
            (ValueType::Map, Value::Map(_)) => true,
            (ValueType::List, Value::List(_)) => true,
            (ValueType::Decimal, Value::Decimal(_)) => true,
            (ValueType::Float, Value::Float(_)) => true,
            (ValueType::Complex, Value::Complex(_)) => true,
            (ValueType::Rational, Value::Rational(_)) => true,
            (ValueType::Date, Value::Date(_) | Value::DateTime(_)) => true,
            (ValueType::DateTime, Value::DateTime(_)) => true,
            (ValueType::Time, Value::Time(_)) => true,
            (ValueType::Custom(name), Value::Custom(record)) => record.is_a(name),
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
