//! model-registry demo binary.
//!
//! Builds a registry, registers the built-in models, installs it as the
//! process-wide registry, then creates one model and fits it.
//!
//! # Environment Variables
//!
//! - `MODEL_REGISTRY_CONFIG`: YAML or JSON file with aliases and a default model
//! - `RUST_LOG`: Tracing filter (default: "info,model_registry=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin registry-demo -- linear
//! ```

use std::process::ExitCode;

use anyhow::Context;

use model_registry::registry::global;
use model_registry::{
    Fittable, LinearModel, ModelRegistry, RegistryConfig, RegistryError, SharedModelRegistry,
};

const FALLBACK_MODEL: &str = "linear";

/// Create the model named on the command line, else the configured default,
/// else [`FALLBACK_MODEL`].
fn select_model(
    registry: &SharedModelRegistry,
    requested: Option<&str>,
) -> Result<Box<dyn Fittable>, RegistryError> {
    match requested {
        Some(name) => registry.create(name),
        None => match registry.create_default() {
            Err(RegistryError::NoDefault) => registry.create(FALLBACK_MODEL),
            other => other,
        },
    }
}

fn run(requested: Option<String>) -> anyhow::Result<()> {
    let config = RegistryConfig::from_env()?;
    let mut registry = ModelRegistry::with_config(&config)?;
    registry.register("linear", LinearModel::new)?;

    let registry = global::install(registry)?;
    tracing::info!("Registered models: {:?}", registry.names());

    let mut model = select_model(registry, requested.as_deref())?;

    let kind = model.kind();
    tracing::info!("Fitting {}", kind);
    model.fit().with_context(|| format!("fitting {}", kind))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,model_registry=debug".into()),
        )
        .init();

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
