//! Thread-safe handle to a [`ModelRegistry`].

use std::sync::Arc;

use parking_lot::RwLock;

use super::error::RegistryError;
use super::model_registry::{build, ModelRegistry};
use crate::models::Fittable;

/// Cloneable, lock-guarded registry shared between threads.
///
/// Each `register` is a single insert under the write lock. `create` holds the
/// read lock only long enough to clone the factory handle; the factory itself
/// runs without the lock, so it may use the registry too.
#[derive(Debug, Clone, Default)]
pub struct SharedModelRegistry {
    inner: Arc<RwLock<ModelRegistry>>,
}

impl SharedModelRegistry {
    /// Create a new empty shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous binding.
    pub fn register<M, F>(&self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        M: Fittable + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.inner.write().register(name, factory)
    }

    /// Register a factory that may fail to construct its model.
    pub fn register_fallible<M, F>(&self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        M: Fittable + 'static,
        F: Fn() -> anyhow::Result<M> + Send + Sync + 'static,
    {
        self.inner.write().register_fallible(name, factory)
    }

    /// Create a new instance of the model registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Fittable>, RegistryError> {
        let factory = self.inner.read().factory(name)?;
        build(name, &factory)
    }

    /// Create a new instance of the configured default model.
    pub fn create_default(&self) -> Result<Box<dyn Fittable>, RegistryError> {
        let name = self
            .inner
            .read()
            .default_model()
            .map(str::to_string)
            .ok_or(RegistryError::NoDefault)?;
        self.create(&name)
    }

    /// Make `alias` resolve to whatever is registered under `target`.
    pub fn add_alias(&self, alias: &str, target: &str) -> Result<(), RegistryError> {
        self.inner.write().add_alias(alias, target)
    }

    /// Whether `name` resolves to a factory.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Directly registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<ModelRegistry> for SharedModelRegistry {
    fn from(registry: ModelRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
