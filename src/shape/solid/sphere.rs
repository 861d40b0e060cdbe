use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3, PI};
use crate::shape::{Measure, ShapeKind};

/// A sphere with the given radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Creates a sphere without checking the radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a sphere with a checked radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite and positive.
    pub fn try_new(radius: f64) -> Result<Self> {
        Ok(Self::new(ensure_positive("radius", radius)?))
    }

    /// Returns the radius of the sphere.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::repeat(2.0 * self.radius)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.radius * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.radius)
    }
}

impl Measure for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn area(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }

    fn volume(&self) -> f64 {
        (4.0 * PI * self.radius.powf(3.0)) / 3.0
    }
}
