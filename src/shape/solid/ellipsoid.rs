use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3, PI, TRIAXIAL_EXPONENT};
use crate::shape::{Measure, ShapeKind};

/// An ellipsoid with semi-axes `a` (X), `b` (Y) and `c` (Z).
///
/// When `a == b` exactly the shape is treated as a spheroid about Z and its
/// surface area uses the closed form: oblate for `a > c`, prolate otherwise.
/// Every other case uses the Knud Thomsen approximation with
/// `p = 1.6075`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    semi_axis_a: f64,
    semi_axis_b: f64,
    semi_axis_c: f64,
}

impl Ellipsoid {
    /// Creates an ellipsoid without checking the semi-axes.
    #[must_use]
    pub fn new(semi_axis_a: f64, semi_axis_b: f64, semi_axis_c: f64) -> Self {
        Self {
            semi_axis_a,
            semi_axis_b,
            semi_axis_c,
        }
    }

    /// Creates an ellipsoid with checked semi-axes.
    ///
    /// # Errors
    ///
    /// Returns an error if any semi-axis is not finite and positive.
    pub fn try_new(semi_axis_a: f64, semi_axis_b: f64, semi_axis_c: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_positive("semi_axis_a", semi_axis_a)?,
            ensure_positive("semi_axis_b", semi_axis_b)?,
            ensure_positive("semi_axis_c", semi_axis_c)?,
        ))
    }

    #[must_use]
    pub fn semi_axis_a(&self) -> f64 {
        self.semi_axis_a
    }

    #[must_use]
    pub fn semi_axis_b(&self) -> f64 {
        self.semi_axis_b
    }

    #[must_use]
    pub fn semi_axis_c(&self) -> f64 {
        self.semi_axis_c
    }

    /// Whether the area takes the spheroid branch (`a` and `b` bitwise equal).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_spheroid(&self) -> bool {
        self.semi_axis_a == self.semi_axis_b
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::new(self.semi_axis_a, self.semi_axis_b, self.semi_axis_c) * 2.0
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.semi_axis_a * factor,
            self.semi_axis_b * factor,
            self.semi_axis_c * factor,
        )
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.semi_axis_a)
            && is_positive(self.semi_axis_b)
            && is_positive(self.semi_axis_c)
    }

    #[allow(clippy::float_cmp)]
    fn spheroid_area(a: f64, c: f64) -> f64 {
        if a > c {
            let ratio = c / a;
            let eccentricity = (1.0 - ratio.powi(2)).sqrt();
            2.0 * PI * a.powi(2) * (1.0 + (ratio.powi(2) / eccentricity) * eccentricity.atanh())
        } else {
            let eccentricity = (1.0 - (a / c).powi(2)).sqrt();
            // a == c: the closed form is inf * 0, its limit is the sphere.
            if eccentricity == 0.0 {
                return 4.0 * PI * a.powi(2);
            }
            2.0 * PI * a.powi(2) * (1.0 + c / (a * eccentricity) * eccentricity.asinh())
        }
    }

    fn triaxial_area(a: f64, b: f64, c: f64) -> f64 {
        let p = TRIAXIAL_EXPONENT;
        let (ap, bp, cp) = (a.powf(p), b.powf(p), c.powf(p));
        4.0 * PI * ((ap * bp + ap * cp + bp * cp) / 3.0).powf(1.0 / p)
    }
}

impl Measure for Ellipsoid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipsoid
    }

    fn area(&self) -> f64 {
        if self.is_spheroid() {
            Self::spheroid_area(self.semi_axis_a, self.semi_axis_c)
        } else {
            Self::triaxial_area(self.semi_axis_a, self.semi_axis_b, self.semi_axis_c)
        }
    }

    /// Returns `4abc / 3`.
    ///
    /// This omits the factor of pi in the true ellipsoid volume; reported
    /// values are kept consistent with that definition.
    fn volume(&self) -> f64 {
        (4.0 * self.semi_axis_a * self.semi_axis_b * self.semi_axis_c) / 3.0
    }
}
