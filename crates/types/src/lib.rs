pub mod color;
pub mod document;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use document::OutlineEntry;
pub use geometry::{Rect, Size};
pub use ids::AnchorId;
