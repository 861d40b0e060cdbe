use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3};
use crate::shape::{Measure, Perimeter, ShapeKind};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a rectangle with checked dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not finite and positive.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_positive("width", width)?,
            ensure_positive("height", height)?,
        ))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::new(self.width, self.height, 0.0)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }
}

impl Measure for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn volume(&self) -> f64 {
        0.0
    }
}

impl Perimeter for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn two_by_three() {
        let r = Rectangle::new(2.0, 3.0);
        assert!((r.area() - 6.0).abs() < 1e-12);
        assert!((r.perimeter() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn try_new_names_bad_side() {
        let err = Rectangle::try_new(2.0, -1.0).unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}
