//! # model-registry
//!
//! A typed registry of model factories. Models are registered under a name
//! and created on demand; every model the registry produces implements the
//! [`Fittable`] capability, checked when its factory is registered.
//!
//! ```
//! use model_registry::{LinearModel, ModelRegistry};
//!
//! let mut registry = ModelRegistry::new();
//! registry.register("linear", LinearModel::new).unwrap();
//!
//! let mut model = registry.create("linear").unwrap();
//! model.fit().unwrap();
//! ```

pub mod models;
pub mod pipeline;
pub mod registry;

pub use models::{Fittable, LinearModel};
pub use pipeline::{Pipeline, Shape};
pub use registry::{ModelName, ModelRegistry, RegistryConfig, RegistryError, SharedModelRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
