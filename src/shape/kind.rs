use std::fmt;

/// Identifies a shape variant for display.
///
/// The tag never drives computation; each variant owns its own formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Unassigned,
    Square,
    Rectangle,
    Ellipse,
    Circle,
    Cube,
    Cuboid,
    Ellipsoid,
    Sphere,
    Prism,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Unassigned,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Ellipsoid,
        ShapeKind::Sphere,
        ShapeKind::Prism,
    ];

    /// Display name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Unassigned => "Unassigned",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Circle => "Circle",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cuboid => "Cuboid",
            ShapeKind::Ellipsoid => "Ellipsoid",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Prism => "Prism",
        }
    }

    /// Whether shapes of this kind are planar (zero volume, with a perimeter).
    #[must_use]
    pub fn is_planar(self) -> bool {
        matches!(
            self,
            ShapeKind::Square | ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Circle
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
