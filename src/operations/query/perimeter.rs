use crate::error::{OperationError, Result};
use crate::shape::Measure;
use crate::store::{ShapeId, ShapeStore};

/// Computes the perimeter of a stored planar shape.
pub struct Perimeter {
    shape: ShapeId,
}

impl Perimeter {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the boundary length.
    ///
    /// For an `Ellipse` this is Ramanujan's approximation.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found, or
    /// [`OperationError::InvalidInput`] if it is a solid.
    pub fn execute(&self, store: &ShapeStore) -> Result<f64> {
        let shape = store.shape(self.shape)?;
        shape.perimeter().ok_or_else(|| {
            OperationError::InvalidInput(format!(
                "perimeter is only defined for planar shapes, got {}",
                shape.kind()
            ))
            .into()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::shape::{Cube, Ellipse, Rectangle};

    #[test]
    fn rectangle_perimeter() {
        let mut store = ShapeStore::new();
        let id = store.add(Rectangle::new(2.0, 3.0));
        let len = Perimeter::new(id).execute(&store).unwrap();
        assert!((len - 10.0).abs() < 1e-12);
    }

    #[test]
    fn ellipse_perimeter() {
        let mut store = ShapeStore::new();
        let id = store.add(Ellipse::new(2.0, 3.0));
        let len = Perimeter::new(id).execute(&store).unwrap();
        assert!((len - 15.8654).abs() < 1e-4);
    }

    #[test]
    fn solid_is_rejected() {
        let mut store = ShapeStore::new();
        let id = store.add(Cube::new(1.0));
        let err = Perimeter::new(id).execute(&store).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Operation(OperationError::InvalidInput(_))
        ));
        assert!(err.to_string().contains("Cube"));
    }
}
