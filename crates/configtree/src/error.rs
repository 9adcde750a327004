//! Error types for setting trees

use std::fmt;

use thiserror::Error;

use crate::spec::TypeSpec;
use crate::value::Value;

/// A type specification named a tag that the registry does not know.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No type Definition for: {} type", display_tag(.tag))]
pub struct TypeDefinitionError {
    /// The unknown tag as it was written
    pub tag: String,
}

impl TypeDefinitionError {
    /// Create an error for an unknown tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

fn display_tag(tag: &str) -> &str {
    if tag.is_empty() {
        "<>"
    } else {
        tag
    }
}

/// Problems with a data source handed to a root binding.
#[derive(Error, Debug)]
pub enum LoadDataError {
    /// The JSON text did not parse, or was not an object
    #[error("Invalid JSON format")]
    InvalidJson,

    /// The YAML path does not point at a file
    #[error("YAML file not found")]
    YamlNotFound,

    /// The YAML file did not parse, or was not a mapping
    #[error("Invalid YAML format")]
    InvalidYaml,

    /// Overlays were supplied without any data source
    #[error("Invalid load source type")]
    InvalidSource,

    /// Reading the source failed
    #[error("Failed to read load source: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for setting tree operations
#[derive(Error, Debug)]
pub enum SettingError {
    /// A type spec referenced an unknown tag
    #[error(transparent)]
    TypeDefinition(#[from] TypeDefinitionError),

    /// A value did not match its effective type spec
    #[error("Expected: {expected}. Given: {given} which is {given_type} class.")]
    SettingType {
        /// The effective type spec
        expected: TypeSpec,
        /// The rejected value
        given: Value,
        /// Runtime type name of the rejected value
        given_type: String,
    },

    /// A locked key was overwritten without an explicit lock argument
    #[error("Setting '{key}' is locked and cannot be changed")]
    ImmutableSetting {
        /// The locked key
        key: String,
    },

    /// A key was used as a child node but holds nothing, or a scalar
    #[error("Undefined setting: {key}")]
    UndefinedSetting {
        /// The missing key
        key: String,
    },

    /// Data source problem during a root binding load
    #[error(transparent)]
    LoadData(#[from] LoadDataError),

    /// JSON export failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML export failed
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing a dump file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SettingError {
    /// Build a type mismatch error for `given` against `expected`.
    pub fn type_mismatch(expected: TypeSpec, given: Value) -> Self {
        let given_type = given.type_name().to_string();
        SettingError::SettingType {
            expected,
            given,
            given_type,
        }
    }

    /// Build a lock violation error for `key`.
    pub fn immutable(key: impl Into<String>) -> Self {
        SettingError::ImmutableSetting { key: key.into() }
    }

    /// Build a missing-child error for `key`.
    pub fn undefined(key: impl fmt::Display) -> Self {
        SettingError::UndefinedSetting {
            key: key.to_string(),
        }
    }
}

/// Result type alias for setting tree operations
pub type Result<T> = std::result::Result<T, SettingError>;
