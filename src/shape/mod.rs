pub mod flat;
mod kind;
mod properties;
pub mod solid;

pub use flat::{Circle, Ellipse, Flat2D, Rectangle, Square};
pub use kind::ShapeKind;
pub use properties::Properties;
pub use solid::{Cube, Cuboid, Ellipsoid, Prism, Solid3D, Sphere};

use crate::math::Vector3;

/// Measurements every shape provides.
pub trait Measure {
    /// Returns the tag identifying this variant.
    fn kind(&self) -> ShapeKind;

    /// Plane area for 2D shapes, surface area for 3D shapes.
    fn area(&self) -> f64;

    /// Enclosed volume. Always zero for 2D shapes.
    fn volume(&self) -> f64;
}

/// Boundary length of a 2D shape.
///
/// Only planar shapes implement this; a [`Prism`] needs it from its base.
pub trait Perimeter {
    /// Returns the length of the closed boundary.
    fn perimeter(&self) -> f64;
}

/// Any shape, planar or solid.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Flat(Flat2D),
    Solid(Solid3D),
}

impl Shape {
    /// Returns the perimeter of a planar shape, or `None` for a solid.
    #[must_use]
    pub fn perimeter(&self) -> Option<f64> {
        match self {
            Shape::Flat(flat) => Some(flat.perimeter()),
            Shape::Solid(_) => None,
        }
    }

    /// Returns the axis-aligned extents `(x, y, z)` of the shape.
    ///
    /// Planar shapes lie in the XY plane; a prism is extruded along Z.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        match self {
            Shape::Flat(flat) => flat.extents(),
            Shape::Solid(solid) => solid.extents(),
        }
    }

    /// Returns a copy with every length multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Shape::Flat(flat) => Shape::Flat(flat.scaled(factor)),
            Shape::Solid(solid) => Shape::Solid(solid.scaled(factor)),
        }
    }

    /// Whether every stored dimension is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Shape::Flat(flat) => flat.is_valid(),
            Shape::Solid(solid) => solid.is_valid(),
        }
    }

    /// Returns the display report for this shape.
    #[must_use]
    pub fn properties(&self) -> Properties {
        match self {
            Shape::Flat(flat) => Properties::of(flat),
            Shape::Solid(Solid3D::Prism(prism)) => prism.properties(),
            Shape::Solid(solid) => Properties::of(solid),
        }
    }

    /// Returns the planar shape, if this is one.
    #[must_use]
    pub fn as_flat(&self) -> Option<&Flat2D> {
        match self {
            Shape::Flat(flat) => Some(flat),
            Shape::Solid(_) => None,
        }
    }

    /// Returns the solid, if this is one.
    #[must_use]
    pub fn as_solid(&self) -> Option<&Solid3D> {
        match self {
            Shape::Flat(_) => None,
            Shape::Solid(solid) => Some(solid),
        }
    }
}

impl Measure for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Flat(flat) => flat.kind(),
            Shape::Solid(solid) => solid.kind(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Flat(flat) => flat.area(),
            Shape::Solid(solid) => solid.area(),
        }
    }

    fn volume(&self) -> f64 {
        match self {
            Shape::Flat(flat) => flat.volume(),
            Shape::Solid(solid) => solid.volume(),
        }
    }
}

impl From<Flat2D> for Shape {
    fn from(flat: Flat2D) -> Self {
        Shape::Flat(flat)
    }
}

impl From<Solid3D> for Shape {
    fn from(solid: Solid3D) -> Self {
        Shape::Solid(solid)
    }
}

macro_rules! impl_into_shape {
    ($family:ident: $($variant:ident),+) => {
        $(
            impl From<$variant> for $family {
                fn from(shape: $variant) -> Self {
                    $family::$variant(shape)
                }
            }

            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::from($family::$variant(shape))
                }
            }
        )+
    };
}

impl_into_shape!(Flat2D: Square, Rectangle, Ellipse, Circle);
impl_into_shape!(Solid3D: Cube, Cuboid, Ellipsoid, Sphere, Prism);
