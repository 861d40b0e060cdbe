use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3};
use crate::shape::{Measure, Perimeter, ShapeKind};

/// A square with the given side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Creates a square without checking the side length.
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Creates a square, rejecting a side that is not finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveDimension`](crate::error::GeometryError::NonPositiveDimension)
    /// if the side is zero, negative, or not finite.
    pub fn try_new(side: f64) -> Result<Self> {
        Ok(Self::new(ensure_positive("side", side)?))
    }

    /// Returns the side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::new(self.side, self.side, 0.0)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.side * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.side)
    }
}

impl Measure for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn area(&self) -> f64 {
        self.side.powi(2)
    }

    fn volume(&self) -> f64 {
        0.0
    }
}

impl Perimeter for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
}
