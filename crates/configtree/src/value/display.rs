//! Display implementation for Value

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes at top level
            Value::Symbol(s) => write!(f, "{}", s.as_ref()),
            _ => write_nested(self, f),
        }
    }
}

/// Nested rendering quotes strings so list and map contents stay readable.
fn write_nested(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Integer(n) => write!(f, "{}", n),
        Value::Float(n) => write!(f, "{:?}", n), // keeps the trailing `.0`
        Value::Decimal(d) => write!(f, "{}", d),
        Value::Complex(c) => write!(f, "{}", c),
        Value::Rational(r) => write!(f, "{}", r),
        Value::Date(d) => write!(f, "{}", d),
        Value::DateTime(dt) => write!(f, "{}", dt),
        Value::Time(t) => write!(f, "{}", t),
        Value::String(s) => write!(f, "{:?}", s.as_ref()),
        Value::Symbol(s) => write!(f, ":{}", s.as_ref()),

        Value::List(items) => {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_nested(item, f)?;
            }
            write!(f, "]")
        }

        Value::Map(entries) => {
            write!(f, "{{")?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: ", k)?;
                write_nested(v, f)?;
            }
            write!(f, "}}")
        }

        Value::Custom(record) => {
            write!(f, "{} {{ ", record.type_name)?;
            for (i, (k, v)) in record.fields.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: ", k)?;
                write_nested(v, f)?;
            }
            write!(f, " }}")
        }
    }
}
