use crate::error::Result;
use crate::shape::Measure;
use crate::store::{ShapeId, ShapeStore};

/// Computes the area of a stored shape.
///
/// Plane area for 2D shapes, total surface area for solids.
pub struct Area {
    shape: ShapeId,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the area.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn execute(&self, store: &ShapeStore) -> Result<f64> {
        Ok(store.shape(self.shape)?.area())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Cuboid, Prism, Sphere};
    use std::f64::consts::PI;

    #[test]
    fn cuboid_area() {
        let mut store = ShapeStore::new();
        let id = store.add(Cuboid::new(2.0, 3.0, 4.0));
        let area = Area::new(id).execute(&store).unwrap();
        // 2*(2*3 + 2*4 + 3*4) = 2*(6+8+12) = 52
        assert!((area - 52.0).abs() < 1e-12, "expected 52.0, got {area}");
    }

    #[test]
    fn cylinder_area() {
        let mut store = ShapeStore::new();
        let id = store.add(Prism::new(Circle::new(2.0), 4.0));
        let area = Area::new(id).execute(&store).unwrap();
        // 2*pi*r^2 + 2*pi*r*h = 8*pi + 16*pi
        let expected = 24.0 * PI;
        assert!((area - expected).abs() < 1e-9, "expected {expected}, got {area}");
    }

    #[test]
    fn sphere_area() {
        let mut store = ShapeStore::new();
        let id = store.add(Sphere::new(3.0));
        let area = Area::new(id).execute(&store).unwrap();
        assert!((area - 36.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn missing_shape() {
        let mut store = ShapeStore::new();
        let id = store.add(Sphere::new(3.0));
        store.remove(id).unwrap();
        assert!(Area::new(id).execute(&store).is_err());
    }
}
