use crate::error::{OperationError, Result, ShapeError};
use crate::math::is_positive;
use crate::shape::{Measure, Prism, Shape, ShapeKind};
use crate::store::{ShapeId, ShapeStore};

/// Extrudes a planar shape along Z into a prism.
///
/// The planar shape is moved out of the store and becomes the prism's base,
/// so its ID stops resolving once the extrusion succeeds.
pub struct Extrude {
    face: ShapeId,
    height: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: ShapeId, height: f64) -> Self {
        Self { face, height }
    }

    /// Executes the extrusion, returning the ID of the new prism.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found. Returns
    /// [`OperationError::InvalidInput`] if the height is not finite and
    /// positive or the shape is not planar; the store is unchanged in both
    /// cases.
    pub fn execute(&self, store: &mut ShapeStore) -> Result<ShapeId> {
        // Validate before taking the face out of the store.
        if !is_positive(self.height) {
            return Err(OperationError::InvalidInput(format!(
                "extrude height must be finite and positive, got {}",
                self.height
            ))
            .into());
        }
        let kind = store.shape(self.face)?.kind();
        if !kind.is_planar() {
            return Err(not_planar(kind));
        }

        let Shape::Flat(base) = store.remove(self.face)? else {
            return Err(not_planar(kind));
        };

        tracing::debug!(face = ?self.face, height = self.height, %kind, "extruding face");
        Ok(store.add(Prism::new(base, self.height)))
    }
}

fn not_planar(kind: ShapeKind) -> ShapeError {
    OperationError::InvalidInput(format!("only planar shapes can be extruded, got {kind}")).into()
}
