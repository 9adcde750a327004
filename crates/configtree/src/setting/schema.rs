//! Recursive schema and lock extraction

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Entry, Setting};
use crate::spec::TypeSpec;

/// A nested mapping of keys to per-key metadata.
pub type Schema<T> = IndexMap<String, SchemaEntry<T>>;

/// Type specs per key, nested like the tree
pub type TypeSchema = Schema<TypeSpec>;

/// Lock flags per key, nested like the tree
pub type LockSchema = Schema<bool>;

/// One key of a [`Schema`]: metadata for a scalar, or a nested schema for
/// a child node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaEntry<T> {
    /// Schema of a child node
    Nested(Schema<T>),

    /// Metadata for a scalar key
    Leaf(T),
}

impl<T> SchemaEntry<T> {
    /// The leaf metadata, if any
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            SchemaEntry::Leaf(t) => Some(t),
            SchemaEntry::Nested(_) => None,
        }
    }

    /// The nested schema, if any
    pub fn as_nested(&self) -> Option<&Schema<T>> {
        match self {
            SchemaEntry::Nested(s) => Some(s),
            SchemaEntry::Leaf(_) => None,
        }
    }
}

impl Setting {
    /// Type specs of this tree.
    ///
    /// Child nodes nest under their key. Each scalar entry merges this
    /// node's whole flat schema into the result at the current level, so
    /// scalar keys are flat and child keys are nested.
    pub fn type_schema(&self) -> TypeSchema {
        self.collect(&self.schema, Setting::type_schema)
    }

    /// Lock flags of this tree, shaped like [`Setting::type_schema`].
    pub fn lock_schema(&self) -> LockSchema {
        self.collect(&self.locks, Setting::lock_schema)
    }

    fn collect<T: Clone>(
        &self,
        flat: &IndexMap<String, T>,
        recurse: fn(&Setting) -> Schema<T>,
    ) -> Schema<T> {
        let mut out = Schema::new();
        for (key, entry) in &self.entries {
            match entry {
                Entry::Node(child) => {
                    out.insert(key.clone(), SchemaEntry::Nested(recurse(child)));
                }
                Entry::Value(_) => {
                    out.extend(
                        flat.iter()
                            .map(|(k, v)| (k.clone(), SchemaEntry::Leaf(v.clone()))),
                    );
                }
            }
        }
        out
    }
}
