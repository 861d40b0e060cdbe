use slotmap::SlotMap;

use crate::error::StoreError;
use crate::shape::{Measure, Shape};

slotmap::new_key_type! {
    /// Unique identifier for a shape in the shape store.
    pub struct ShapeId;
}

/// Arena that owns shapes and hands out typed IDs.
///
/// IDs are generational: once a shape is removed its ID never resolves
/// again, even if the slot is reused.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, Shape>,
}

impl ShapeStore {
    /// Creates a new, empty shape store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let kind = shape.kind();
        let id = self.shapes.insert(shape);
        tracing::debug!(?id, %kind, "shape added");
        id
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShapeNotFound`] if the ID is unknown or was removed.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, StoreError> {
        self.shapes.get(id).ok_or(StoreError::ShapeNotFound)
    }

    /// Removes the shape and hands ownership back to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShapeNotFound`] if the ID is unknown or was removed.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, StoreError> {
        let shape = self.shapes.remove(id).ok_or(StoreError::ShapeNotFound)?;
        tracing::debug!(?id, kind = %shape.kind(), "shape removed");
        Ok(shape)
    }

    /// Whether `id` refers to a live shape.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over all shapes.
    ///
    /// Order is insertion order as long as nothing has been removed.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter()
    }

    /// IDs of all shapes, in the same order as [`iter`](Self::iter).
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.keys().collect()
    }
}
