//! Bulk import into a setting tree

use tracing::debug;

use super::schema::{LockSchema, SchemaEntry, TypeSchema};
use super::{ConfigOptions, Setting};
use crate::error::Result;
use crate::value::{Mapping, Value};

impl Setting {
    /// Import a mapping into this node.
    ///
    /// Map values descend into child nodes (created on demand) with the
    /// matching nested slice of each overlay. A map landing on a scalar key
    /// replaces it only under the lock and type rules of [`Setting::config`];
    /// a leaf entry in an overlay counts as the explicit spec or lock for
    /// that check. Other values go through [`Setting::config`] with the
    /// overlay's spec and lock for that key.
    ///
    /// # Errors
    ///
    /// Whatever `config` fails with on the first offending key. Keys
    /// imported before the failure stay imported.
    pub fn load_from_map(
        &mut self,
        data: &Mapping,
        schema: Option<&TypeSchema>,
        locks: Option<&LockSchema>,
    ) -> Result<()> {
        for (key, value) in data {
            let type_entry = schema.and_then(|s| s.get(key));
            let lock_entry = locks.and_then(|s| s.get(key));

            match value {
                Value::Map(nested) => {
                    let child = self.descend(
                        key.clone(),
                        value,
                        type_entry.and_then(SchemaEntry::as_leaf),
                        lock_entry.and_then(SchemaEntry::as_leaf).copied(),
                    )?;
                    child.load_from_map(
                        nested,
                        type_entry.and_then(SchemaEntry::as_nested),
                        lock_entry.and_then(SchemaEntry::as_nested),
                    )?;
                }
                scalar => {
                    let options = ConfigOptions {
                        ty: type_entry.and_then(SchemaEntry::as_leaf).cloned(),
                        lock: lock_entry.and_then(SchemaEntry::as_leaf).copied(),
                    };
                    self.config((key.as_str(), scalar.clone()), options)?;
                }
            }
        }
        Ok(())
    }

    /// Import another tree's values, specs and locks into this node.
    pub fn merge_from(&mut self, other: &Setting) -> Result<()> {
        self.load_from_map(
            &other.to_mapping(),
            Some(&other.type_schema()),
            Some(&other.lock_schema()),
        )
    }

    /// Copy this tree into a fresh, independent tree.
    ///
    /// The copy goes through export and re-import, so nothing is shared
    /// between the two afterwards. Hosts call this when a derived owner
    /// (a subclass, a child scope) inherits the tree.
    pub fn derive_child(&self) -> Result<Setting> {
        debug!(keys = self.len(), "deriving child setting");
        let mut child = Setting::new();
        child.merge_from(self)?;
        Ok(child)
    }
}
