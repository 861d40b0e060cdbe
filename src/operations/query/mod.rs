mod area;
mod bounding_box;
mod is_valid;
mod perimeter;
mod volume;

pub use area::Area;
pub use bounding_box::BoundingBox;
pub use is_valid::IsValid;
pub use perimeter::Perimeter;
pub use volume::Volume;
