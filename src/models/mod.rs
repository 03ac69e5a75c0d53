//! Model capability and built-in model implementations.
//!
//! Every type that can be produced by a [`ModelRegistry`](crate::registry::ModelRegistry)
//! implements [`Fittable`]. The registry only ever hands out `Box<dyn Fittable>`,
//! so the rest of a type's surface is invisible to code that goes through it.

use std::fmt;

pub mod linear;

pub use linear::LinearModel;

/// Behavioral contract for models.
///
/// A type is registrable as soon as it can be fitted. Nothing else about the
/// concrete type matters to the registry.
pub trait Fittable {
    /// Fit the model.
    fn fit(&mut self) -> anyhow::Result<()>;

    /// Name of the concrete type behind this instance.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl fmt::Debug for dyn Fittable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fittable").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl Fittable for Stub {
        fn fit(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_boxed_model_debug_shows_kind() {
        let model: Box<dyn Fittable> = Box::new(Stub);
        let rendered = format!("{:?}", model);
        assert!(rendered.starts_with("Fittable("));
        assert!(rendered.contains("Stub"));
    }

    #[test]
    fn test_create_result_supports_unwrap_err() {
        let missing: Result<Box<dyn Fittable>, &str> = Err("missing");
        assert_eq!(missing.unwrap_err(), "missing");

        let ok: Result<Box<dyn Fittable>, &str> = Ok(Box::new(Stub));
        assert!(format!("{:?}", ok).starts_with("Ok(Fittable("));
    }
}
