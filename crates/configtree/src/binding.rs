//! Named root trees owned by a host

use dashmap::DashMap;
use tracing::debug;

use crate::error::{Result, SettingError};
use crate::loader::{self, ConfigureOptions};
use crate::setting::Setting;

/// The named setting trees of one host (a type, module, or instance).
///
/// Each tree sits behind its own shard lock, so a registry shared across
/// threads serializes mutations per tree. Callbacks passed to
/// [`Bindings::with`] and [`Bindings::configure_with`] run while that lock
/// is held and must not call back into the same registry.
///
/// # Example
///
/// ```
/// use configtree::{Bindings, ConfigureOptions, Value};
///
/// let base = Bindings::new();
/// base.configure_with("settings", ConfigureOptions::new(), |s| {
///     s.set("retries", 3)?;
///     Ok(())
/// })?;
///
/// let derived = base.derive_child()?;
/// derived.with("settings", |s| s.set("retries", 5).map(|_| ()))??;
///
/// let retries = |b: &Bindings| b.get("settings").and_then(|s| s.value("retries").cloned());
/// assert_eq!(retries(&base), Some(Value::Integer(3)));
/// assert_eq!(retries(&derived), Some(Value::Integer(5)));
/// # Ok::<(), configtree::SettingError>(())
/// ```
#[derive(Debug, Default)]
pub struct Bindings {
    trees: DashMap<String, Setting>,
}

impl Bindings {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or extend the tree `name` from `options`.
    ///
    /// # Errors
    ///
    /// Loader errors, then whatever the import fails with.
    pub fn configure(&self, name: impl Into<String>, options: ConfigureOptions) -> Result<()> {
        self.configure_with(name, options, |_| Ok(()))
    }

    /// Create or extend the tree `name` from `options`, then build it with `f`.
    ///
    /// # Errors
    ///
    /// Loader errors, import errors, or whatever `f` returns.
    pub fn configure_with<F>(
        &self,
        name: impl Into<String>,
        options: ConfigureOptions,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Setting) -> Result<()>,
    {
        let name = name.into();
        let data = loader::load_data(&options)?;
        debug!(name = %name, loaded = data.is_some(), "configuring root setting");

        let mut tree = self.trees.entry(name).or_default();
        if let Some(data) = data {
            tree.load_from_map(
                &data,
                options.schema.as_ref(),
                options.lock_schema.as_ref(),
            )?;
        }
        f(&mut *tree)
    }

    /// Evaluate `f` against the tree `name` and return its result.
    ///
    /// # Errors
    ///
    /// `UndefinedSetting` if there is no tree `name`.
    pub fn with<R>(&self, name: &str, f: impl FnOnce(&mut Setting) -> R) -> Result<R> {
        let mut tree = self
            .trees
            .get_mut(name)
            .ok_or_else(|| SettingError::undefined(name))?;
        Ok(f(&mut *tree))
    }

    /// A copy of the tree `name`
    pub fn get(&self, name: &str) -> Option<Setting> {
        self.trees.get(name).map(|tree| tree.value().clone())
    }

    /// Whether a tree `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.trees.contains_key(name)
    }

    /// Names of all trees (unordered)
    pub fn names(&self) -> Vec<String> {
        self.trees.iter().map(|tree| tree.key().clone()).collect()
    }

    /// Number of trees
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether there are no trees
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Copy every tree into a new registry for a derived host.
    ///
    /// Trees are copied by export and re-import, so later changes on
    /// either side stay on that side.
    pub fn derive_child(&self) -> Result<Bindings> {
        let child = Bindings::new();
        for tree in self.trees.iter() {
            debug!(name = %tree.key(), "inheriting root setting");
            child
                .trees
                .insert(tree.key().clone(), tree.value().derive_child()?);
        }
        Ok(child)
    }
}
