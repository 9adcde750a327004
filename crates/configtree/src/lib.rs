//! # configtree
//!
//! A hierarchical, type-checked configuration tree builder.
//!
//! A host declares a nested tree of named settings, assigns values to them
//! directly or through nested builder closures, and every assignment is
//! checked against a declared or recorded type. Trees export to plain
//! mappings, JSON and YAML, and import from the same.
//!
//! ## Architecture
//!
//! - **Registry**: fixed catalog of type tags (`int`, `str`, `numeric`, ...)
//! - **Checker**: validates a [`Value`] against a [`TypeSpec`]
//! - **Setting**: the tree node, with per-key schema and lock state
//! - **Bindings**: named root trees of a host, with copy-on-inherit
//!
//! ## Example
//!
//! ```
//! use configtree::{ConfigOptions, Setting, SettingError, Value};
//!
//! let mut settings = Setting::new();
//! settings.typed("int")?.declare("timeout")?;
//! settings.configure_with("server", |server| {
//!     server.set("host", "localhost")?;
//!     server.set_with("port", 8080, ConfigOptions::new().ty("int").lock(true))?;
//!     Ok(())
//! })?;
//!
//! // Recorded type applies to later assignments
//! assert!(matches!(
//!     settings.set("timeout", "soon"),
//!     Err(SettingError::SettingType { .. })
//! ));
//!
//! // Locked keys reject implicit overwrites
//! let server = settings.child_mut("server").unwrap();
//! assert!(matches!(
//!     server.set("port", 9090),
//!     Err(SettingError::ImmutableSetting { .. })
//! ));
//!
//! assert_eq!(
//!     settings.to_json()?,
//!     r#"{"timeout":null,"server":{"host":"localhost","port":8080}}"#
//! );
//! # Ok::<(), SettingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod checker;
pub mod convert;
pub mod error;
pub mod loader;
pub mod registry;
pub mod setting;
pub mod spec;
pub mod value;

// Re-export main types
pub use binding::Bindings;
pub use error::{LoadDataError, Result, SettingError, TypeDefinitionError};
pub use loader::ConfigureOptions;
pub use registry::TypeDef;
pub use setting::{
    ConfigOptions, ConfigTarget, Entry, LockSchema, Schema, SchemaEntry, Setting, TypeSchema,
    TypedSetter,
};
pub use spec::TypeSpec;
pub use value::{Complex, CustomValue, Mapping, Rational, Value, ValueType};

/// configtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
