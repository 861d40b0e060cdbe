mod circle;
mod ellipse;
mod rectangle;
mod square;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
pub use square::Square;

use super::{Measure, Perimeter, ShapeKind};
use crate::math::Vector3;

/// A planar shape: zero volume, with a perimeter.
#[derive(Debug, Clone, PartialEq)]
pub enum Flat2D {
    Square(Square),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Circle(Circle),
}

impl Flat2D {
    /// Returns the extents in the XY plane; Z is always zero.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        match self {
            Flat2D::Square(s) => s.extents(),
            Flat2D::Rectangle(r) => r.extents(),
            Flat2D::Ellipse(e) => e.extents(),
            Flat2D::Circle(c) => c.extents(),
        }
    }

    /// Returns a copy with every length multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Flat2D::Square(s) => s.scaled(factor).into(),
            Flat2D::Rectangle(r) => r.scaled(factor).into(),
            Flat2D::Ellipse(e) => e.scaled(factor).into(),
            Flat2D::Circle(c) => c.scaled(factor).into(),
        }
    }

    /// Whether every dimension is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Flat2D::Square(s) => s.is_valid(),
            Flat2D::Rectangle(r) => r.is_valid(),
            Flat2D::Ellipse(e) => e.is_valid(),
            Flat2D::Circle(c) => c.is_valid(),
        }
    }
}

impl Measure for Flat2D {
    fn kind(&self) -> ShapeKind {
        match self {
            Flat2D::Square(s) => s.kind(),
            Flat2D::Rectangle(r) => r.kind(),
            Flat2D::Ellipse(e) => e.kind(),
            Flat2D::Circle(c) => c.kind(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Flat2D::Square(s) => s.area(),
            Flat2D::Rectangle(r) => r.area(),
            Flat2D::Ellipse(e) => e.area(),
            Flat2D::Circle(c) => c.area(),
        }
    }

    fn volume(&self) -> f64 {
        0.0
    }
}

impl Perimeter for Flat2D {
    fn perimeter(&self) -> f64 {
        match self {
            Flat2D::Square(s) => s.perimeter(),
            Flat2D::Rectangle(r) => r.perimeter(),
            Flat2D::Ellipse(e) => e.perimeter(),
            Flat2D::Circle(c) => c.perimeter(),
        }
    }
}
