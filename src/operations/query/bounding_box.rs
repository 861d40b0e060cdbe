use crate::error::Result;
use crate::math::Vector3;
use crate::store::{ShapeId, ShapeStore};

/// Computes the axis-aligned extents of a stored shape.
///
/// Planar shapes lie in the XY plane and report a zero Z extent. A prism
/// takes its X and Y extents from its base and its Z extent from its height.
pub struct BoundingBox {
    shape: ShapeId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the extents along X, Y and Z.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn execute(&self, store: &ShapeStore) -> Result<Vector3> {
        Ok(store.shape(self.shape)?.extents())
    }
}
