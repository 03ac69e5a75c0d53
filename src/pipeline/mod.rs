//! Pipeline seam: build, run, persist and restore models.
//!
//! The numeric side of a model (layers, tensors, on-disk format) lives behind
//! [`Pipeline`]. The registry only needs a pipeline whose built model is
//! [`Fittable`]; it then registers one of two factories:
//!
//! - [`ModelRegistry::register_pipeline`]: every `create` builds a new model
//! - [`ModelRegistry::register_restored`]: every `create` restores saved weights

pub mod shape;

pub use shape::Shape;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::Fittable;
use crate::registry::{ModelRegistry, RegistryError};

/// A model pipeline implemented outside this crate.
pub trait Pipeline {
    /// Model produced by [`build`](Self::build) and [`restore`](Self::restore).
    type Model;
    /// Batch accepted by [`run`](Self::run).
    type Input;
    /// Result of [`run`](Self::run).
    type Output;

    /// Build an untrained model with the given dimensions.
    fn build(&self, shape: Shape) -> anyhow::Result<Self::Model>;

    /// Run a forward pass without updating the model.
    fn run(&self, model: &Self::Model, input: &Self::Input) -> anyhow::Result<Self::Output>;

    /// Save the model's parameters to `path`.
    fn persist(&self, model: &Self::Model, path: &Path) -> anyhow::Result<()>;

    /// Build a model with the given dimensions and load its parameters from `path`.
    fn restore(&self, shape: Shape, path: &Path) -> anyhow::Result<Self::Model>;
}

impl ModelRegistry {
    /// Register a factory that builds a fresh model from `pipeline` on every
    /// `create`.
    pub fn register_pipeline<P>(
        &mut self,
        name: &str,
        pipeline: Arc<P>,
        shape: Shape,
    ) -> Result<(), RegistryError>
    where
        P: Pipeline + Send + Sync + 'static,
        P::Model: Fittable + 'static,
    {
        self.register_fallible(name, move || pipeline.build(shape))
    }

    /// Register a factory that restores a model saved at `path` on every
    /// `create`.
    ///
    /// The file is read when the model is created, not when it is registered.
    pub fn register_restored<P>(
        &mut self,
        name: &str,
        pipeline: Arc<P>,
        shape: Shape,
        path: impl Into<PathBuf>,
    ) -> Result<(), RegistryError>
    where
        P: Pipeline + Send + Sync + 'static,
        P::Model: Fittable + 'static,
    {
        let path = path.into();
        self.register_fallible(name, move || pipeline.restore(shape, &path))
    }
}
