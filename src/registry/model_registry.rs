//! Model registry: named factories producing [`Fittable`] instances.
//!
//! The registry stores factories, never instances. Every call to
//! [`ModelRegistry::create`] runs the factory bound to the requested name and
//! hands the new instance to the caller.
//!
//! Resolution of a requested identifier:
//! 1. A factory registered directly under that identifier
//! 2. A factory registered under the alias target of that identifier
//!
//! Aliases are resolved once; an alias pointing at another alias is not
//! followed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::config::RegistryConfig;
use super::error::RegistryError;
use super::name::ModelName;
use crate::models::Fittable;

/// Type-erased factory stored by the registry.
pub(crate) type Factory = Arc<dyn Fn() -> anyhow::Result<Box<dyn Fittable>> + Send + Sync>;

/// Registry mapping names to factories of types that satisfy [`Fittable`].
///
/// The capability is checked when the factory is registered: a factory whose
/// product does not implement [`Fittable`] does not compile.
///
/// ```compile_fail
/// use model_registry::ModelRegistry;
///
/// struct NotAModel;
///
/// let mut registry = ModelRegistry::new();
/// registry.register("broken", || NotAModel).unwrap();
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    /// Factories indexed by name
    factories: HashMap<ModelName, Factory>,

    /// Alias -> target name
    aliases: HashMap<ModelName, ModelName>,

    /// Name used by `create_default`
    default_model: Option<ModelName>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the aliases and default model from `config`.
    pub fn with_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (alias, target) in &config.aliases {
            registry.add_alias(alias, target)?;
        }
        if let Some(default) = &config.default_model {
            registry.set_default(default)?;
        }
        Ok(registry)
    }

    /// Register `factory` under `name`.
    ///
    /// A factory already registered under `name` is replaced.
    ///
    /// ```
    /// use model_registry::{LinearModel, ModelRegistry};
    ///
    /// let mut registry = ModelRegistry::new();
    /// registry.register("linear", LinearModel::new).unwrap();
    /// assert!(registry.contains("linear"));
    /// ```
    pub fn register<M, F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        M: Fittable + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        self.register_fallible(name, move || Ok(factory()))
    }

    /// Register a factory that may fail to construct its model.
    ///
    /// A failure is reported by [`create`](Self::create) as
    /// [`RegistryError::Construction`].
    pub fn register_fallible<M, F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        M: Fittable + 'static,
        F: Fn() -> anyhow::Result<M> + Send + Sync + 'static,
    {
        let name = ModelName::new(name)?;
        let factory: Factory =
            Arc::new(move || factory().map(|model| Box::new(model) as Box<dyn Fittable>));
        self.insert(name, factory);
        Ok(())
    }

    fn insert(&mut self, name: ModelName, factory: Factory) {
        if self.factories.insert(name.clone(), factory).is_some() {
            log::debug!("Replaced factory for model '{}'", name);
        } else {
            log::debug!("Registered factory for model '{}'", name);
        }
    }

    /// Create a new instance of the model registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Fittable>, RegistryError> {
        let factory = self.factory(name)?;
        build(name, &factory)
    }

    /// Create a new instance of the configured default model.
    pub fn create_default(&self) -> Result<Box<dyn Fittable>, RegistryError> {
        let name = self
            .default_model
            .as_ref()
            .ok_or(RegistryError::NoDefault)?;
        self.create(name.as_str())
    }

    /// Look up the factory that `name` resolves to.
    pub(crate) fn factory(&self, name: &str) -> Result<Factory, RegistryError> {
        if let Some(factory) = self.factories.get(name) {
            return Ok(Arc::clone(factory));
        }

        self.aliases
            .get(name)
            .and_then(|target| self.factories.get(target))
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Make `alias` resolve to whatever is registered under `target`.
    ///
    /// The target does not have to be registered yet.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<(), RegistryError> {
        let alias = ModelName::parse("alias", alias.to_string())?;
        let target = ModelName::parse("target", target.to_string())?;
        log::debug!("Alias '{}' -> '{}'", alias, target);
        self.aliases.insert(alias, target);
        Ok(())
    }

    /// Set the model created by [`create_default`](Self::create_default).
    pub fn set_default(&mut self, name: &str) -> Result<(), RegistryError> {
        self.default_model = Some(ModelName::parse("default_model", name.to_string())?);
        Ok(())
    }

    /// The configured default model name, if any.
    pub fn default_model(&self) -> Option<&str> {
        self.default_model.as_ref().map(ModelName::as_str)
    }

    /// Whether `name` resolves to a factory.
    pub fn contains(&self, name: &str) -> bool {
        self.factory(name).is_ok()
    }

    /// Directly registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(ModelName::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered factories (aliases not counted).
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .field("aliases", &self.aliases)
            .field("default_model", &self.default_model)
            .finish()
    }
}

/// Run `factory`, attributing a failure to `name`.
pub(crate) fn build(name: &str, factory: &Factory) -> Result<Box<dyn Fittable>, RegistryError> {
    factory().map_err(|source| {
        log::warn!("Factory for model '{}' failed: {}", name, source);
        RegistryError::Construction {
            name: name.to_string(),
            source,
        }
    })
}
