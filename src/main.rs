//! Prints the properties of a fixed catalogue of shapes.
//!
//! Usage:
//! ```text
//! cargo run                        # report only
//! RUST_LOG=shapeform=debug cargo run
//! ```

use shapeform::shape::{
    Circle, Cube, Cuboid, Ellipse, Ellipsoid, Prism, Rectangle, Sphere, Square,
};
use shapeform::{Result, ShapeStore};

fn main() -> Result<()> {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut store = ShapeStore::new();
    populate(&mut store);

    for id in store.ids() {
        let shape = store.remove(id)?;
        println!("{}\n", shape.properties());
    }
    Ok(())
}

fn populate(store: &mut ShapeStore) {
    store.add(Square::new(2.0));
    store.add(Rectangle::new(2.0, 3.0));
    store.add(Ellipse::new(2.0, 3.0));
    store.add(Circle::new(2.0));
    store.add(Cube::new(2.0));
    store.add(Cuboid::new(2.0, 3.0, 4.0));
    store.add(Ellipsoid::new(2.0, 2.0, 3.0));
    store.add(Sphere::new(2.0));
    store.add(Prism::new(Circle::new(2.0), 4.0));
    store.add(Prism::new(Square::new(2.0), 4.0));
    store.add(Prism::new(Rectangle::new(2.0, 3.0), 4.0));
    store.add(Prism::new(Ellipse::new(2.0, 3.0), 4.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_report() {
        let mut store = ShapeStore::new();
        populate(&mut store);
        assert_eq!(store.len(), 12);

        let report: Vec<String> = store
            .iter()
            .map(|(_, shape)| shape.properties().to_string())
            .collect();
        let expected = [
            ("Square", "4", "0"),
            ("Rectangle", "6", "0"),
            ("Ellipse", "18.8496", "0"),
            ("Circle", "12.5664", "0"),
            ("Cube", "24", "8"),
            ("Cuboid", "52", "24"),
            ("Ellipsoid", "60.0031", "16"),
            ("Sphere", "50.2655", "33.5103"),
            ("Circle Prism (Cylinder)", "75.3982", "50.2655"),
            ("Square Prism (Square-Base Cuboid)", "40", "16"),
            ("Rectangle Prism (Rectangle-Base Cuboid)", "52", "24"),
            ("Ellipse Prism", "101.161", "75.3982"),
        ];
        for (got, (label, area, volume)) in report.iter().zip(expected) {
            assert_eq!(
                got,
                &format!("Shape: {label}\nArea: {area} units^2\nVolume: {volume} units^3")
            );
        }
    }
}
