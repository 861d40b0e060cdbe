use thiserror::Error;

/// Top-level error type for shapeform.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by checked shape construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("dimension {name} = {value} must be finite and positive")]
    NonPositiveDimension { name: &'static str, value: f64 },
}

/// Errors related to the shape store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("shape not found")]
    ShapeNotFound,
}

/// Errors related to shape operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;
