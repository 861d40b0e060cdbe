use crate::error::Result;
use crate::shape::Measure;
use crate::store::{ShapeId, ShapeStore};

/// Computes the volume of a stored shape.
///
/// Planar shapes always report zero.
pub struct Volume {
    shape: ShapeId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn execute(&self, store: &ShapeStore) -> Result<f64> {
        Ok(store.shape(self.shape)?.volume())
    }
}
