use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3};
use crate::shape::{Flat2D, Measure, Perimeter, Properties, ShapeKind};

/// A right prism: a planar base extruded along Z by `height`.
///
/// The prism owns its base. Area and volume are derived entirely from the
/// base's area and perimeter:
///
/// - area = `2 * base.area() + base.perimeter() * height`
/// - volume = `base.area() * height`
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    base: Flat2D,
    height: f64,
}

impl Prism {
    /// Creates a prism, taking ownership of the base.
    #[must_use]
    pub fn new(base: impl Into<Flat2D>, height: f64) -> Self {
        Self {
            base: base.into(),
            height,
        }
    }

    /// Creates a prism with a checked height.
    ///
    /// The base is not re-validated; build it with its own `try_new`.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is not finite and positive.
    pub fn try_new(base: impl Into<Flat2D>, height: f64) -> Result<Self> {
        let height = ensure_positive("height", height)?;
        Ok(Self::new(base, height))
    }

    /// Returns the base face.
    #[must_use]
    pub fn base(&self) -> &Flat2D {
        &self.base
    }

    /// Returns the extrusion height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Consumes the prism and returns its base.
    #[must_use]
    pub fn into_base(self) -> Flat2D {
        self.base
    }

    /// Common name for well-known prisms, keyed on the base kind.
    #[must_use]
    pub fn common_name(&self) -> Option<&'static str> {
        match self.base.kind() {
            ShapeKind::Circle => Some("Cylinder"),
            ShapeKind::Square => Some("Square-Base Cuboid"),
            ShapeKind::Rectangle => Some("Rectangle-Base Cuboid"),
            _ => None,
        }
    }

    /// Report labelled `"<base> Prism"`, plus the common name if there is one.
    #[must_use]
    pub fn properties(&self) -> Properties {
        let label = match self.common_name() {
            Some(name) => format!("{} {} ({name})", self.base.kind(), self.kind()),
            None => format!("{} {}", self.base.kind(), self.kind()),
        };
        Properties::with_label(label, self)
    }

    pub(crate) fn extents(&self) -> Vector3 {
        let base = self.base.extents();
        Vector3::new(base.x, base.y, self.height)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.base.scaled(factor), self.height * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.base.is_valid() && is_positive(self.height)
    }
}

impl Measure for Prism {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Prism
    }

    fn area(&self) -> f64 {
        let base_area = self.base.area();
        let base_perimeter = self.base.perimeter();
        2.0 * base_area + base_perimeter * self.height
    }

    fn volume(&self) -> f64 {
        self.base.area() * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;
    use crate::shape::{Circle, Cuboid, Ellipse, Rectangle, Square};
    use approx::assert_relative_eq;

    #[test]
    fn cylinder() {
        let p = Prism::new(Circle::new(2.0), 4.0);
        assert_relative_eq!(p.area(), 24.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(p.volume(), 16.0 * PI, max_relative = 1e-12);
        assert!((p.area() - 75.398).abs() < 1e-3);
        assert!((p.volume() - 50.265).abs() < 1e-3);
    }

    #[test]
    fn identities_hold_for_every_base() {
        let bases: [Flat2D; 4] = [
            Square::new(2.0).into(),
            Rectangle::new(2.0, 3.0).into(),
            Ellipse::new(2.0, 3.0).into(),
            Circle::new(2.0).into(),
        ];
        for base in bases {
            for h in [0.5, 4.0, 10.0] {
                let p = Prism::new(base.clone(), h);
                assert_relative_eq!(p.volume(), base.area() * h);
                assert_relative_eq!(p.area(), 2.0 * base.area() + base.perimeter() * h);
            }
        }
    }

    #[test]
    fn rectangle_base_matches_cuboid() {
        let p = Prism::new(Rectangle::new(2.0, 3.0), 4.0);
        let c = Cuboid::new(2.0, 3.0, 4.0);
        assert_relative_eq!(p.area(), c.area());
        assert_relative_eq!(p.volume(), c.volume());
    }

    #[test]
    fn common_names() {
        assert_eq!(Prism::new(Circle::new(1.0), 1.0).common_name(), Some("Cylinder"));
        assert_eq!(
            Prism::new(Square::new(1.0), 1.0).common_name(),
            Some("Square-Base Cuboid")
        );
        assert_eq!(
            Prism::new(Rectangle::new(1.0, 2.0), 1.0).common_name(),
            Some("Rectangle-Base Cuboid")
        );
        assert_eq!(Prism::new(Ellipse::new(1.0, 2.0), 1.0).common_name(), None);
    }

    #[test]
    fn base_is_returned_on_consumption() {
        let p = Prism::new(Square::new(3.0), 1.0);
        assert_eq!(p.base().kind(), ShapeKind::Square);
        assert_eq!(p.into_base(), Flat2D::Square(Square::new(3.0)));
    }

    #[test]
    fn try_new_checks_height() {
        assert!(Prism::try_new(Circle::new(1.0), 0.0).is_err());
        assert!(Prism::try_new(Circle::new(1.0), 2.0).is_ok());
    }
}
