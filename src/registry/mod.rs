//! # Model Registry
//!
//! Decouples the *name* used to request a model from the concrete type that
//! implements it. Factories are registered under validated names; every
//! `create` runs the factory and returns a fresh `Box<dyn Fittable>`.
//!
//! ## Resolution Flow
//!
//! 1. `ModelRegistry::register("linear", LinearModel::new)` stores the factory
//! 2. Optional `RegistryConfig` adds aliases (`lin -> linear`) and a default model
//! 3. `ModelRegistry::create("lin")` resolves the alias and runs the factory
//! 4. The caller owns the returned instance and calls `fit()` on it
//!
//! For use from several threads, convert the registry into a
//! [`SharedModelRegistry`], and optionally [`global::install`] it as the
//! process-wide registry.

pub mod config;
pub mod error;
pub mod global;
pub mod model_registry;
pub mod name;
pub mod shared;

pub use config::{RegistryConfig, CONFIG_ENV_VAR};
pub use error::RegistryError;
pub use model_registry::ModelRegistry;
pub use name::ModelName;
pub use shared::SharedModelRegistry;
