//! Value representation for setting entries

mod custom;
mod display;
mod impls;
mod kind;
mod numeric;
mod ser;

pub use custom::CustomValue;
pub use kind::ValueType;
pub use numeric::{Complex, Rational};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// An ordered mapping of string keys to values.
///
/// This is the plain-data form of a setting tree: nested trees become
/// nested `Value::Map` entries.
pub type Mapping = IndexMap<String, Value>;

/// Runtime value stored under a setting key.
///
/// Every variant corresponds to one concrete [`ValueType`], so the type
/// checker can always name the runtime type of a rejected value.
/// `Null` doubles as the "declared but unset" marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Inline scalars
    // ═══════════════════════════════════════════════════════════════════
    /// Absent value
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Float(f64),

    /// Arbitrary-precision decimal
    Decimal(Decimal),

    /// Complex number
    Complex(Complex),

    /// Normalized fraction
    Rational(Rational),

    /// Calendar date
    Date(NaiveDate),

    /// Date with wall-clock time
    DateTime(NaiveDateTime),

    /// Time of day
    Time(NaiveTime),

    // ═══════════════════════════════════════════════════════════════════
    // Heap-allocated values (Arc-wrapped)
    // ═══════════════════════════════════════════════════════════════════
    /// Text
    String(Arc<String>),

    /// Interned-style name, distinct from a string for type checks
    Symbol(Arc<String>),

    /// Ordered list
    List(Arc<Vec<Value>>),

    /// Ordered string-keyed map
    Map(Arc<Mapping>),

    /// Host-defined record, checked by type name
    Custom(Arc<CustomValue>),
}
