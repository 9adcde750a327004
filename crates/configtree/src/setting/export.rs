//! Export of setting trees to plain data, JSON and YAML

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use super::{Entry, Setting};
use crate::error::Result;
use crate::value::{Mapping, Value};

impl Setting {
    /// Convert the tree to nested plain data, depth-first.
    pub fn to_mapping(&self) -> Mapping {
        self.entries
            .iter()
            .map(|(key, entry)| {
                let value = match entry {
                    Entry::Value(v) => v.clone(),
                    Entry::Node(child) => Value::map(child.to_mapping()),
                };
                (key.clone(), value)
            })
            .collect()
    }

    /// The tree as a single `Value::Map`
    pub fn to_value(&self) -> Value {
        Value::map(self.to_mapping())
    }

    /// Compact JSON text, keys in declaration order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Block-style YAML text
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the tree as YAML to `path`, replacing any existing file.
    pub fn dump_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "dumping settings as YAML");
        let mut writer = BufWriter::new(File::create(path)?);
        serde_yaml::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Entry::Value(v) => v.serialize(serializer),
            Entry::Node(child) => child.serialize(serializer),
        }
    }
}

/// Serializes like [`Setting::to_mapping`].
impl Serialize for Setting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}
