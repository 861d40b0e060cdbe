use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3};
use crate::shape::{Measure, ShapeKind};

/// A cube with the given edge width.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    width: f64,
}

impl Cube {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Creates a cube with a checked edge width.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is not finite and positive.
    pub fn try_new(width: f64) -> Result<Self> {
        Ok(Self::new(ensure_positive("width", width)?))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::repeat(self.width)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.width)
    }
}

impl Measure for Cube {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
    }

    fn area(&self) -> f64 {
        6.0 * self.width.powi(2)
    }

    fn volume(&self) -> f64 {
        self.width.powf(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn width_two() {
        let c = Cube::new(2.0);
        assert_relative_eq!(c.area(), 24.0);
        assert_relative_eq!(c.volume(), 8.0);
    }

    #[test]
    fn volume_is_area_times_width_over_six() {
        for w in [0.5, 1.0, 3.0, 11.0] {
            let c = Cube::new(w);
            assert_relative_eq!(c.volume(), c.area() * w / 6.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn volume_is_bit_exact_over_widths() {
        for i in 0..2000_u32 {
            let w = f64::from(i) * 0.0137;
            assert_eq!(Cube::new(w).volume().to_bits(), w.powf(3.0).to_bits(), "w = {w}");
        }
    }
}
