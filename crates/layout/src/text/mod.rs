pub mod builder;
pub mod metrics;
pub mod wrapper;

pub use builder::{LineSegment, TextBuilder, TextSpan};
pub use metrics::{char_advance, measure_text_width};
pub use wrapper::{break_lines, wrap, LineLayout};
