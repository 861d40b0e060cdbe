use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3, PI};
use crate::shape::{Measure, Perimeter, ShapeKind};

/// An ellipse given by its two semi-axes.
///
/// The axes are not ordered: `a` lies along X and `b` along Y, whichever is
/// larger.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    semi_axis_a: f64,
    semi_axis_b: f64,
}

impl Ellipse {
    /// Creates an ellipse without checking the semi-axes.
    #[must_use]
    pub fn new(semi_axis_a: f64, semi_axis_b: f64) -> Self {
        Self {
            semi_axis_a,
            semi_axis_b,
        }
    }

    /// Creates an ellipse with checked semi-axes.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is not finite and positive.
    pub fn try_new(semi_axis_a: f64, semi_axis_b: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_positive("semi_axis_a", semi_axis_a)?,
            ensure_positive("semi_axis_b", semi_axis_b)?,
        ))
    }

    /// Returns the semi-axis along X.
    #[must_use]
    pub fn semi_axis_a(&self) -> f64 {
        self.semi_axis_a
    }

    /// Returns the semi-axis along Y.
    #[must_use]
    pub fn semi_axis_b(&self) -> f64 {
        self.semi_axis_b
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::new(2.0 * self.semi_axis_a, 2.0 * self.semi_axis_b, 0.0)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.semi_axis_a * factor, self.semi_axis_b * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.semi_axis_a) && is_positive(self.semi_axis_b)
    }
}

impl Measure for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn area(&self) -> f64 {
        PI * self.semi_axis_a * self.semi_axis_b
    }

    fn volume(&self) -> f64 {
        0.0
    }
}

impl Perimeter for Ellipse {
    /// Ramanujan's first approximation:
    /// `pi * (3(a + b) - sqrt((3a + b)(a + 3b)))`.
    fn perimeter(&self) -> f64 {
        let (a, b) = (self.semi_axis_a, self.semi_axis_b);
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }
}
