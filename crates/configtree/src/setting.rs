//! The setting tree node
//!
//! A [`Setting`] holds an ordered map of keys to either scalar values or
//! child nodes, plus two parallel maps for the scalar keys: the recorded
//! type spec and the lock flag. Child nodes own their own schema and locks,
//! so a parent's schema never mentions its children.

mod export;
mod load;
mod schema;
mod typed;

pub use schema::{LockSchema, Schema, SchemaEntry, TypeSchema};
pub use typed::TypedSetter;

use std::ops::Index;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::checker;
use crate::error::{Result, SettingError};
use crate::spec::TypeSpec;
use crate::value::{Mapping, Value};

/// What a key maps to inside a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A scalar value (`Null` when declared but unset)
    Value(Value),

    /// A nested namespace
    Node(Setting),
}

impl Entry {
    /// The scalar value, if this is not a child node
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Node(_) => None,
        }
    }

    /// The child node, if this is one
    pub fn as_node(&self) -> Option<&Setting> {
        match self {
            Entry::Node(node) => Some(node),
            Entry::Value(_) => None,
        }
    }

    /// Mutable access to the child node, if this is one
    pub fn as_node_mut(&mut self) -> Option<&mut Setting> {
        match self {
            Entry::Node(node) => Some(node),
            Entry::Value(_) => None,
        }
    }

    /// Whether this entry is a child node
    pub fn is_node(&self) -> bool {
        matches!(self, Entry::Node(_))
    }
}

/// The first argument of [`Setting::config`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigTarget {
    /// No key at all; `config` does nothing
    Empty,

    /// Declare a key without a value
    Key(String),

    /// Assign a value to a key
    Assign(String, Value),
}

impl From<()> for ConfigTarget {
    fn from(_: ()) -> Self {
        ConfigTarget::Empty
    }
}

impl From<&str> for ConfigTarget {
    fn from(key: &str) -> Self {
        ConfigTarget::Key(key.to_string())
    }
}

impl From<String> for ConfigTarget {
    fn from(key: String) -> Self {
        ConfigTarget::Key(key)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for ConfigTarget {
    fn from((key, value): (K, V)) -> Self {
        ConfigTarget::Assign(key.into(), value.into())
    }
}

/// Per-call options for [`Setting::config`].
///
/// Unset fields fall back to what is already recorded for the key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOptions {
    /// Explicit type spec for this call
    pub ty: Option<TypeSpec>,

    /// Explicit lock flag for this call
    pub lock: Option<bool>,
}

impl ConfigOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type spec (builder pattern)
    pub fn ty(mut self, spec: impl Into<TypeSpec>) -> Self {
        self.ty = Some(spec.into());
        self
    }

    /// Set the lock flag (builder pattern)
    pub fn lock(mut self, lock: bool) -> Self {
        self.lock = Some(lock);
        self
    }
}

/// A node in a configuration tree.
///
/// # Example
///
/// ```
/// use configtree::{ConfigOptions, Setting, Value};
///
/// let mut settings = Setting::new();
/// settings.set("name", "api")?;
/// settings.configure_with("db", |db| {
///     db.config(("port", 5432), ConfigOptions::new().ty("int"))?;
///     Ok(())
/// })?;
///
/// assert_eq!(settings.value("name"), Some(&Value::string("api")));
/// assert_eq!(
///     settings.get_path(&["db", "port"]).and_then(|e| e.as_value()),
///     Some(&Value::Integer(5432))
/// );
/// # Ok::<(), configtree::SettingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Setting {
    /// Scalars and child nodes, in declaration order
    entries: IndexMap<String, Entry>,

    /// Recorded type spec per scalar key
    schema: IndexMap<String, TypeSpec>,

    /// Lock flag per scalar key
    locks: IndexMap<String, bool>,
}

impl Setting {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Declaration and Assignment
    // ═══════════════════════════════════════════════════════════════════

    /// Declare or assign a key.
    ///
    /// The effective type spec is the explicit `options.ty`, else the spec
    /// already recorded for the key, else `any`. The effective lock is the
    /// explicit `options.lock`, else the recorded lock, else `false`.
    ///
    /// Declaring (no value, or a `Null` value) never validates and never
    /// erases a value that is already stored.
    ///
    /// # Errors
    ///
    /// - `ImmutableSetting` when overwriting a stored value whose recorded
    ///   lock is set and `options.lock` is not given
    /// - `TypeDefinition` when the effective spec names an unknown tag
    /// - `SettingType` when the value does not match the effective spec
    pub fn config(
        &mut self,
        target: impl Into<ConfigTarget>,
        options: ConfigOptions,
    ) -> Result<&mut Self> {
        let (key, value) = match target.into() {
            ConfigTarget::Empty => return Ok(self),
            ConfigTarget::Key(key) => (key, None),
            ConfigTarget::Assign(key, value) => (key, Some(value).filter(|v| !v.is_null())),
        };

        let ConfigOptions { ty, lock } = options;
        let spec = match ty {
            Some(spec) => spec,
            None => self.schema.get(&key).cloned().unwrap_or_default(),
        };
        let stored_lock = self.locks.get(&key).copied().unwrap_or(false);
        let effective_lock = lock.unwrap_or(stored_lock);

        match value {
            Some(value) => {
                if stored_lock && self.holds_value(&key) {
                    if lock.is_none() {
                        return Err(SettingError::immutable(key));
                    }
                    debug!(key = %key, lock = effective_lock, "explicit lock overrides stored lock");
                }
                if !checker::validate(&value, &spec)? {
                    return Err(SettingError::type_mismatch(spec, value));
                }
                if matches!(self.entries.get(&key), Some(Entry::Node(_))) {
                    warn!(key = %key, "scalar assignment replaces child setting");
                }
                debug!(key = %key, spec = %spec, lock = effective_lock, "assigning setting");
                self.entries.insert(key.clone(), Entry::Value(value));
            }
            None => match self.entries.get(&key) {
                Some(Entry::Node(_)) => {
                    debug!(key = %key, "ignoring declaration of existing child setting");
                    return Ok(self);
                }
                Some(Entry::Value(_)) => {
                    debug!(key = %key, spec = %spec, "redeclaring setting");
                }
                None => {
                    debug!(key = %key, spec = %spec, "declaring setting");
                    self.entries.insert(key.clone(), Entry::Value(Value::Null));
                }
            },
        }

        self.schema.insert(key.clone(), spec);
        self.locks.insert(key, effective_lock);
        Ok(self)
    }

    /// Assign `value` to `key` with recorded type and lock.
    ///
    /// Assigning `Value::Null` is a declaration: a value already stored
    /// under `key` is kept, and there is no way to reset it to null.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        self.config((key.into(), value.into()), ConfigOptions::default())
    }

    /// Assign `value` to `key` with explicit options.
    ///
    /// As with [`Setting::set`], a `Value::Null` keeps any stored value and
    /// only records the options.
    pub fn set_with(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
        options: ConfigOptions,
    ) -> Result<&mut Self> {
        self.config((key.into(), value.into()), options)
    }

    /// Declare `key` without a value.
    pub fn declare(&mut self, key: impl Into<String>) -> Result<&mut Self> {
        self.config(ConfigTarget::Key(key.into()), ConfigOptions::default())
    }

    /// Declare `key` without a value, recording `spec` for later assignments.
    pub fn declare_typed(
        &mut self,
        key: impl Into<String>,
        spec: impl Into<TypeSpec>,
    ) -> Result<&mut Self> {
        self.config(ConfigTarget::Key(key.into()), ConfigOptions::new().ty(spec))
    }

    fn holds_value(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Entry::Value(v)) if !v.is_null())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Child Nodes
    // ═══════════════════════════════════════════════════════════════════

    /// Get the child node under `key`, creating it if needed.
    ///
    /// An existing child is returned as is, so repeated calls extend the
    /// same namespace. A scalar under `key` is replaced by an empty child
    /// and its schema and lock entries are dropped, provided the scalar
    /// could have been overwritten by a map assignment.
    ///
    /// # Errors
    ///
    /// - `ImmutableSetting` if `key` holds a locked value
    /// - `SettingType` if the spec recorded for `key` rejects a map
    pub fn configure(&mut self, key: impl Into<String>) -> Result<&mut Setting> {
        self.descend(key.into(), &Value::map(Mapping::new()), None, None)
    }

    /// Get or create the child node under `key` and build it with `f`.
    ///
    /// # Errors
    ///
    /// Whatever [`Setting::configure`] or `f` returns.
    pub fn configure_with<F>(&mut self, key: impl Into<String>, f: F) -> Result<&mut Setting>
    where
        F: FnOnce(&mut Setting) -> Result<()>,
    {
        let child = self.configure(key)?;
        f(child)?;
        Ok(child)
    }

    /// Child node under `key` for `incoming` map data, replacing a scalar
    /// only if `config` would have let `incoming` overwrite it.
    pub(crate) fn descend(
        &mut self,
        key: String,
        incoming: &Value,
        ty: Option<&TypeSpec>,
        lock: Option<bool>,
    ) -> Result<&mut Setting> {
        self.ensure_replaceable(&key, incoming, ty, lock)?;

        let slot = self.entries.entry(key.clone()).or_insert_with(|| {
            debug!(key = %key, "creating child setting");
            Entry::Node(Setting::new())
        });
        if !slot.is_node() {
            warn!(key = %key, "child setting replaces scalar");
            self.schema.shift_remove(&key);
            self.locks.shift_remove(&key);
            *slot = Entry::Node(Setting::new());
        }
        slot.as_node_mut().ok_or_else(|| SettingError::undefined(&key))
    }

    fn ensure_replaceable(
        &self,
        key: &str,
        incoming: &Value,
        ty: Option<&TypeSpec>,
        lock: Option<bool>,
    ) -> Result<()> {
        if !matches!(self.entries.get(key), Some(Entry::Value(_))) {
            return Ok(());
        }
        if lock.is_none() && self.is_locked(key) && self.holds_value(key) {
            return Err(SettingError::immutable(key));
        }
        if let Some(spec) = ty.or_else(|| self.schema.get(key)) {
            if !checker::validate(incoming, spec)? {
                return Err(SettingError::type_mismatch(spec.clone(), incoming.clone()));
            }
        }
        Ok(())
    }

    /// Evaluate `f` against the existing child under `key`.
    ///
    /// # Errors
    ///
    /// `UndefinedSetting` if `key` is not a child node.
    pub fn with_child<R>(&mut self, key: &str, f: impl FnOnce(&mut Setting) -> R) -> Result<R> {
        let child = self
            .child_mut(key)
            .ok_or_else(|| SettingError::undefined(key))?;
        Ok(f(child))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// The entry under `key`
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// The scalar under `key` (`Null` if declared but unset)
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(Entry::as_value)
    }

    /// The child node under `key`
    pub fn child(&self, key: &str) -> Option<&Setting> {
        self.entries.get(key).and_then(Entry::as_node)
    }

    /// Mutable access to the child node under `key`
    pub fn child_mut(&mut self, key: &str) -> Option<&mut Setting> {
        self.entries.get_mut(key).and_then(Entry::as_node_mut)
    }

    /// Follow a chain of keys, e.g. `["db", "primary", "port"]`.
    ///
    /// Every key but the last must name a child node.
    pub fn get_path(&self, path: &[&str]) -> Option<&Entry> {
        let (last, parents) = path.split_last()?;
        let mut node = self;
        for key in parents {
            node = node.child(key)?;
        }
        node.get(last)
    }

    /// Whether `key` has an entry
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries (scalars and children)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the node has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The type spec recorded for scalar `key`
    pub fn schema_of(&self, key: &str) -> Option<&TypeSpec> {
        self.schema.get(key)
    }

    /// Whether scalar `key` is locked
    pub fn is_locked(&self, key: &str) -> bool {
        self.locks.get(key).copied().unwrap_or(false)
    }
}

impl Index<&str> for Setting {
    type Output = Entry;

    /// # Panics
    ///
    /// If `key` has no entry.
    fn index(&self, key: &str) -> &Entry {
        &self.entries[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_target_is_noop() {
        let mut s = Setting::new();
        s.config((), ConfigOptions::new().ty("int").lock(true)).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_declare_records_null_and_any() {
        let mut s = Setting::new();
        s.declare("opt").unwrap();
        assert_eq!(s.value("opt"), Some(&Value::Null));
        assert!(s.schema_of("opt").is_some_and(TypeSpec::is_any));
        assert!(!s.is_locked("opt"));
    }

    #[test]
    fn test_null_assignment_does_not_erase() {
        let mut s = Setting::new();
        s.set("opt", 1).unwrap();
        s.set("opt", Value::Null).unwrap();
        assert_eq!(s.value("opt"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_configure_replaces_scalar() {
        let mut s = Setting::new();
        s.set_with("db", 1, ConfigOptions::new().lock(false))
            .unwrap();
        s.configure("db").unwrap().set("port", 1).unwrap();

        assert!(s["db"].is_node());
        assert!(s.schema_of("db").is_none());
        assert!(!s.is_locked("db"));
    }

    #[test]
    fn test_configure_keeps_typed_scalar() {
        let mut s = Setting::new();
        s.set_with("db", 1, ConfigOptions::new().ty("int")).unwrap();

        assert!(matches!(
            s.configure("db"),
            Err(SettingError::SettingType { .. })
        ));
        assert_eq!(s.value("db"), Some(&Value::Integer(1)));
        assert_eq!(s.schema_of("db"), Some(&TypeSpec::from("int")));
    }

    #[test]
    fn test_declare_on_child_key_is_ignored() {
        let mut s = Setting::new();
        s.configure("db").unwrap();
        s.declare_typed("db", "int").unwrap();
        assert!(s["db"].is_node());
        assert!(s.schema_of("db").is_none());
    }

    #[test]
    fn test_get_path_empty() {
        let s = Setting::new();
        assert!(s.get_path(&[]).is_none());
    }
}
