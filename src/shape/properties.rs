use std::fmt;

use super::Measure;
use crate::report::general;

/// Display report for a shape: label, area and volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    /// Kind name, or a composite label for a prism.
    pub label: String,
    pub area: f64,
    pub volume: f64,
}

impl Properties {
    /// Report labelled with the shape's kind name.
    #[must_use]
    pub fn of(shape: &impl Measure) -> Self {
        Self::with_label(shape.kind().to_string(), shape)
    }

    #[must_use]
    pub fn with_label(label: String, shape: &impl Measure) -> Self {
        Self {
            label,
            area: shape.area(),
            volume: shape.volume(),
        }
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape: {}", self.label)?;
        writeln!(f, "Area: {} units^2", general(self.area))?;
        write!(f, "Volume: {} units^3", general(self.volume))
    }
}

#[cfg(test)]
mod tests {
    use crate::shape::{Circle, Cuboid, Ellipse, Ellipsoid, Prism, Rectangle, Shape, Square};

    fn render(shape: impl Into<Shape>) -> String {
        let shape: Shape = shape.into();
        shape.properties().to_string()
    }

    #[test]
    fn square_report() {
        assert_eq!(
            render(Square::new(2.0)),
            "Shape: Square\nArea: 4 units^2\nVolume: 0 units^3"
        );
    }

    #[test]
    fn cuboid_report() {
        assert_eq!(
            render(Cuboid::new(2.0, 3.0, 4.0)),
            "Shape: Cuboid\nArea: 52 units^2\nVolume: 24 units^3"
        );
    }

    #[test]
    fn ellipsoid_report() {
        assert_eq!(
            render(Ellipsoid::new(2.0, 2.0, 3.0)),
            "Shape: Ellipsoid\nArea: 60.0031 units^2\nVolume: 16 units^3"
        );
    }

    #[test]
    fn prism_labels() {
        assert_eq!(
            render(Prism::new(Circle::new(2.0), 4.0)),
            "Shape: Circle Prism (Cylinder)\nArea: 75.3982 units^2\nVolume: 50.2655 units^3"
        );
        assert!(render(Prism::new(Square::new(2.0), 4.0))
            .starts_with("Shape: Square Prism (Square-Base Cuboid)\n"));
        assert!(render(Prism::new(Rectangle::new(2.0, 3.0), 4.0))
            .starts_with("Shape: Rectangle Prism (Rectangle-Base Cuboid)\n"));
        assert_eq!(
            render(Prism::new(Ellipse::new(2.0, 3.0), 4.0)),
            "Shape: Ellipse Prism\nArea: 101.161 units^2\nVolume: 75.3982 units^3"
        );
    }
}
