//! Model dimensions passed to a [`Pipeline`](super::Pipeline).

use serde::{Deserialize, Serialize};

use crate::registry::RegistryError;

/// Input and output dimensions of a model built by a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape", into = "RawShape")]
pub struct Shape {
    input_dim: usize,
    output_dim: usize,
}

impl Shape {
    /// Validate and create a shape. `input_dim` must be positive.
    pub fn new(input_dim: usize, output_dim: usize) -> Result<Self, RegistryError> {
        if input_dim == 0 {
            return Err(RegistryError::invalid("input_dim", "must be positive"));
        }
        Ok(Self {
            input_dim,
            output_dim,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }
}

#[derive(Serialize, Deserialize)]
struct RawShape {
    input_dim: usize,
    output_dim: usize,
}

impl TryFrom<RawShape> for Shape {
    type Error = RegistryError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        Self::new(raw.input_dim, raw.output_dim)
    }
}

impl From<Shape> for RawShape {
    fn from(shape: Shape) -> Self {
        Self {
            input_dim: shape.input_dim,
            output_dim: shape.output_dim,
        }
    }
}
