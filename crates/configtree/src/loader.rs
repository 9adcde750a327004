//! Data sources for root bindings

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::convert;
use crate::error::LoadDataError;
use crate::setting::{LockSchema, TypeSchema};
use crate::value::Mapping;

/// Options for configuring a named root tree.
///
/// At most one data source is used: `hash`, then `json`, then `yaml`.
/// `schema` and `lock_schema` overlay the imported data.
///
/// # Example
///
/// ```
/// use configtree::ConfigureOptions;
///
/// let options = ConfigureOptions::new().json(r#"{"port": 8080}"#);
/// assert!(options.has_source());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigureOptions {
    /// In-memory data
    pub hash: Option<Mapping>,

    /// JSON text holding an object
    pub json: Option<String>,

    /// Path to a YAML file holding a mapping
    pub yaml: Option<PathBuf>,

    /// Type specs for imported keys
    pub schema: Option<TypeSchema>,

    /// Lock flags for imported keys
    pub lock_schema: Option<LockSchema>,
}

impl ConfigureOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Use in-memory data (builder pattern)
    pub fn hash(mut self, data: Mapping) -> Self {
        self.hash = Some(data);
        self
    }

    /// Use JSON text (builder pattern)
    pub fn json(mut self, text: impl Into<String>) -> Self {
        self.json = Some(text.into());
        self
    }

    /// Use a YAML file (builder pattern)
    pub fn yaml(mut self, path: impl Into<PathBuf>) -> Self {
        self.yaml = Some(path.into());
        self
    }

    /// Overlay type specs (builder pattern)
    pub fn schema(mut self, schema: TypeSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Overlay lock flags (builder pattern)
    pub fn lock_schema(mut self, locks: LockSchema) -> Self {
        self.lock_schema = Some(locks);
        self
    }

    /// Whether a data source is set
    pub fn has_source(&self) -> bool {
        self.hash.is_some() || self.json.is_some() || self.yaml.is_some()
    }

    /// Whether nothing at all is set
    pub fn is_empty(&self) -> bool {
        !self.has_source() && self.schema.is_none() && self.lock_schema.is_none()
    }
}

/// Produce the mapping described by `options`.
///
/// Returns `Ok(None)` when `options` is empty.
///
/// # Errors
///
/// - `InvalidSource` if overlays are given without a data source
/// - `InvalidJson` for unparsable JSON or JSON that is not an object
/// - `YamlNotFound` if the YAML path is not a file
/// - `InvalidYaml` for unparsable YAML or YAML that is not a mapping
pub fn load_data(options: &ConfigureOptions) -> Result<Option<Mapping>, LoadDataError> {
    if let Some(data) = &options.hash {
        return Ok(Some(data.clone()));
    }
    if let Some(text) = &options.json {
        return parse_json(text).map(Some);
    }
    if let Some(path) = &options.yaml {
        return read_yaml(path).map(Some);
    }
    if options.is_empty() {
        Ok(None)
    } else {
        Err(LoadDataError::InvalidSource)
    }
}

/// Parse JSON text holding an object.
pub fn parse_json(text: &str) -> Result<Mapping, LoadDataError> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|_| LoadDataError::InvalidJson)?;
    convert::mapping_from_json(json).ok_or(LoadDataError::InvalidJson)
}

/// Read and parse a YAML file holding a mapping.
pub fn read_yaml(path: &Path) -> Result<Mapping, LoadDataError> {
    if !path.is_file() {
        return Err(LoadDataError::YamlNotFound);
    }
    debug!(path = %path.display(), "reading YAML settings");
    let text = fs::read_to_string(path)?;
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|_| LoadDataError::InvalidYaml)?;
    convert::mapping_from_yaml(yaml).ok_or(LoadDataError::InvalidYaml)
}
