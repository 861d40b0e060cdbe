pub mod error;
pub mod math;
pub mod operations;
pub mod report;
pub mod shape;
pub mod store;

pub use error::{Result, ShapeError};
pub use shape::{Flat2D, Measure, Perimeter, Shape, ShapeKind, Solid3D};
pub use store::{ShapeId, ShapeStore};
