//! Host-defined record values

use indexmap::IndexMap;

use super::Value;

/// A record of a host-defined type.
///
/// Type checks against `ValueType::Custom(name)` succeed when `name` is the
/// record's own type name or one of its ancestors. Ancestors cover both
/// parent types and implemented interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomValue {
    /// The record's type name (e.g., "Endpoint")
    pub type_name: String,

    /// Supertypes and implemented interfaces, nearest first
    pub ancestors: Vec<String>,

    /// Fields in definition order
    pub fields: IndexMap<String, Value>,
}

impl CustomValue {
    /// Create an empty record
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ancestors: Vec::new(),
            fields: IndexMap::new(),
        }
    }

    /// Add an ancestor type (builder pattern)
    pub fn with_ancestor(mut self, name: impl Into<String>) -> Self {
        self.ancestors.push(name.into());
        self
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether this record is `name` or descends from it
    pub fn is_a(&self, name: &str) -> bool {
        self.type_name == name || self.ancestors.iter().any(|a| a == name)
    }
}
