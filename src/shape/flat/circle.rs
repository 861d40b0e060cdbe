use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3, PI};
use crate::shape::{Measure, Perimeter, ShapeKind};

/// A circle with the given radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle without checking the radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a circle with a checked radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite and positive.
    pub fn try_new(radius: f64) -> Result<Self> {
        Ok(Self::new(ensure_positive("radius", radius)?))
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub(crate) fn extents(&self) -> Vector3 {
        let diameter = 2.0 * self.radius;
        Vector3::new(diameter, diameter, 0.0)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.radius * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.radius)
    }
}

impl Measure for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn volume(&self) -> f64 {
        0.0
    }
}

impl Perimeter for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radius_two() {
        let c = Circle::new(2.0);
        assert_relative_eq!(c.area(), 4.0 * PI);
        assert_relative_eq!(c.perimeter(), 4.0 * PI);
    }

    #[test]
    fn perimeter_over_area_is_two_over_radius() {
        for r in [0.25, 1.0, 2.0, 7.5] {
            let c = Circle::new(r);
            assert_relative_eq!(c.perimeter() / c.area(), 2.0 / r, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_radius_is_degenerate_not_error() {
        let c = Circle::new(0.0);
        assert!(c.area().abs() < f64::EPSILON);
        assert!(!c.is_valid());
        assert!(Circle::try_new(0.0).is_err());
    }
}
