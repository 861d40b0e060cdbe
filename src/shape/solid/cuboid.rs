use crate::error::Result;
use crate::math::{ensure_positive, is_positive, Vector3};
use crate::shape::{Measure, ShapeKind};

/// A rectangular box with width (X), depth (Y) and height (Z).
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    width: f64,
    depth: f64,
    height: f64,
}

impl Cuboid {
    /// Creates a cuboid without checking its dimensions.
    #[must_use]
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Creates a cuboid with checked dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not finite and positive.
    pub fn try_new(width: f64, depth: f64, height: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_positive("width", width)?,
            ensure_positive("depth", depth)?,
            ensure_positive("height", height)?,
        ))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn extents(&self) -> Vector3 {
        Vector3::new(self.width, self.depth, self.height)
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.depth * factor, self.height * factor)
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.depth) && is_positive(self.height)
    }
}

impl Measure for Cuboid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cuboid
    }

    fn area(&self) -> f64 {
        2.0 * (self.width * self.depth + self.width * self.height + self.depth * self.height)
    }

    fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }
}
