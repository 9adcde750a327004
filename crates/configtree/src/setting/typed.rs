//! Per-tag shorthand setters

use super::{ConfigOptions, ConfigTarget, Setting};
use crate::error::{Result, TypeDefinitionError};
use crate::registry;
use crate::value::Value;

/// Declares or assigns keys with a fixed registry tag.
///
/// `settings.typed("int")?.declare("port")?` is the same as
/// `settings.declare_typed("port", "int")`.
pub struct TypedSetter<'a> {
    node: &'a mut Setting,
    tag: &'static str,
}

impl Setting {
    /// Shorthand setter for one registry tag.
    ///
    /// # Errors
    ///
    /// `TypeDefinitionError` if `tag` is not in the registry.
    pub fn typed(&mut self, tag: &str) -> std::result::Result<TypedSetter<'_>, TypeDefinitionError> {
        let tag = registry::tags()
            .find(|known| *known == tag)
            .ok_or_else(|| TypeDefinitionError::new(tag))?;
        Ok(TypedSetter { node: self, tag })
    }
}

impl TypedSetter<'_> {
    /// The tag this setter applies
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Declare `key` with this tag.
    pub fn declare(&mut self, key: impl Into<String>) -> Result<&mut Self> {
        self.node.config(
            ConfigTarget::Key(key.into()),
            ConfigOptions::new().ty(self.tag),
        )?;
        Ok(self)
    }

    /// Assign `value` to `key` with this tag.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        self.node
            .config((key.into(), value.into()), ConfigOptions::new().ty(self.tag))?;
        Ok(self)
    }

    /// Assign `value` to `key` with this tag and an explicit lock.
    pub fn set_locked(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        lock: bool,
    ) -> Result<&mut Self> {
        self.node.config(
            (key.into(), value.into()),
            ConfigOptions::new().ty(self.tag).lock(lock),
        )?;
        Ok(self)
    }
}
