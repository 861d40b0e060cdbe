mod cube;
mod cuboid;
mod ellipsoid;
mod prism;
mod sphere;

pub use cube::Cube;
pub use cuboid::Cuboid;
pub use ellipsoid::Ellipsoid;
pub use prism::Prism;
pub use sphere::Sphere;

use super::{Measure, ShapeKind};
use crate::math::Vector3;

/// A three-dimensional shape with surface area and volume.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid3D {
    Cube(Cube),
    Cuboid(Cuboid),
    Ellipsoid(Ellipsoid),
    Sphere(Sphere),
    Prism(Prism),
}

impl Solid3D {
    /// Returns the axis-aligned extents of the solid.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        match self {
            Solid3D::Cube(c) => c.extents(),
            Solid3D::Cuboid(c) => c.extents(),
            Solid3D::Ellipsoid(e) => e.extents(),
            Solid3D::Sphere(s) => s.extents(),
            Solid3D::Prism(p) => p.extents(),
        }
    }

    /// Returns a copy with every length multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Solid3D::Cube(c) => c.scaled(factor).into(),
            Solid3D::Cuboid(c) => c.scaled(factor).into(),
            Solid3D::Ellipsoid(e) => e.scaled(factor).into(),
            Solid3D::Sphere(s) => s.scaled(factor).into(),
            Solid3D::Prism(p) => p.scaled(factor).into(),
        }
    }

    /// Whether every dimension is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Solid3D::Cube(c) => c.is_valid(),
            Solid3D::Cuboid(c) => c.is_valid(),
            Solid3D::Ellipsoid(e) => e.is_valid(),
            Solid3D::Sphere(s) => s.is_valid(),
            Solid3D::Prism(p) => p.is_valid(),
        }
    }
}

impl Measure for Solid3D {
    fn kind(&self) -> ShapeKind {
        match self {
            Solid3D::Cube(c) => c.kind(),
            Solid3D::Cuboid(c) => c.kind(),
            Solid3D::Ellipsoid(e) => e.kind(),
            Solid3D::Sphere(s) => s.kind(),
            Solid3D::Prism(p) => p.kind(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Solid3D::Cube(c) => c.area(),
            Solid3D::Cuboid(c) => c.area(),
            Solid3D::Ellipsoid(e) => e.area(),
            Solid3D::Sphere(s) => s.area(),
            Solid3D::Prism(p) => p.area(),
        }
    }

    fn volume(&self) -> f64 {
        match self {
            Solid3D::Cube(c) => c.volume(),
            Solid3D::Cuboid(c) => c.volume(),
            Solid3D::Ellipsoid(e) => e.volume(),
            Solid3D::Sphere(s) => s.volume(),
            Solid3D::Prism(p) => p.volume(),
        }
    }
}
