use crate::store::{ShapeId, ShapeStore};

/// Checks that a stored shape is non-degenerate.
///
/// A shape is valid when it exists and every dimension, including those of a
/// prism's base, is finite and strictly positive.
pub struct IsValid {
    shape: ShapeId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the validation, returning `true` if the shape is valid.
    #[must_use]
    pub fn execute(&self, store: &ShapeStore) -> bool {
        let Ok(shape) = store.shape(self.shape) else {
            return false;
        };
        let valid = shape.is_valid();
        if !valid {
            tracing::warn!(id = ?self.shape, ?shape, "degenerate shape");
        }
        valid
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Cuboid, Ellipsoid, Prism, Square};

    #[test]
    fn positive_dimensions_are_valid() {
        let mut store = ShapeStore::new();
        let a = store.add(Cuboid::new(2.0, 3.0, 4.0));
        let b = store.add(Prism::new(Circle::new(1.0), 2.0));
        assert!(IsValid::new(a).execute(&store));
        assert!(IsValid::new(b).execute(&store));
    }

    #[test]
    fn degenerate_dimensions_are_invalid() {
        let mut store = ShapeStore::new();
        let zero = store.add(Square::new(0.0));
        let negative = store.add(Cuboid::new(2.0, -3.0, 4.0));
        let nan = store.add(Ellipsoid::new(1.0, f64::NAN, 1.0));
        let flat_prism = store.add(Prism::new(Circle::new(1.0), 0.0));
        for id in [zero, negative, nan, flat_prism] {
            assert!(!IsValid::new(id).execute(&store));
        }
    }

    #[test]
    fn missing_shape_is_invalid() {
        let mut store = ShapeStore::new();
        let id = store.add(Square::new(1.0));
        store.remove(id).unwrap();
        assert!(!IsValid::new(id).execute(&store));
    }
}
