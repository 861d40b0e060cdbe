use crate::error::{OperationError, Result};
use crate::math::is_positive;
use crate::store::{ShapeId, ShapeStore};

/// Scales a shape uniformly about its own origin.
///
/// Every length is multiplied by `factor`, including a prism's base and
/// height, so areas scale by `factor^2` and volumes by `factor^3`. The source
/// shape is left untouched and the scaled copy is added to the store.
pub struct Scale {
    shape: ShapeId,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(shape: ShapeId, factor: f64) -> Self {
        Self { shape, factor }
    }

    /// Executes the scaling, returning the ID of the new shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found, or
    /// [`OperationError::InvalidInput`] if the factor is not finite and positive.
    pub fn execute(&self, store: &mut ShapeStore) -> Result<ShapeId> {
        if !is_positive(self.factor) {
            return Err(OperationError::InvalidInput(format!(
                "scale factor must be finite and positive, got {}",
                self.factor
            ))
            .into());
        }

        let scaled = store.shape(self.shape)?.scaled(self.factor);
        tracing::debug!(source = ?self.shape, factor = self.factor, "scaling shape");
        Ok(store.add(scaled))
    }
}
