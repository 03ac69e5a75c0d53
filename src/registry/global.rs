//! Process-wide model registry.
//!
//! Nothing is installed until [`install`] is called. Linking the crate, or
//! referencing this module, never registers or creates anything.

use std::sync::OnceLock;

use super::error::RegistryError;
use super::shared::SharedModelRegistry;

static GLOBAL_REGISTRY: OnceLock<SharedModelRegistry> = OnceLock::new();

/// Install `shared` as the process-wide registry.
///
/// Can succeed only once per process; later calls return
/// [`RegistryError::AlreadyInitialized`] and leave the installed registry untouched.
pub fn install(
    shared: impl Into<SharedModelRegistry>,
) -> Result<&'static SharedModelRegistry, RegistryError> {
    GLOBAL_REGISTRY
        .set(shared.into())
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    log::debug!("Installed global model registry");
    registry()
}

/// The process-wide registry, if [`install`] has been called.
pub fn registry() -> Result<&'static SharedModelRegistry, RegistryError> {
    GLOBAL_REGISTRY.get().ok_or(RegistryError::Uninitialized)
}
