pub mod dimension;
pub mod font;
pub mod parsers;
pub mod stylesheet;

pub use dimension::{PageLayout, PageSize};
pub use font::{FontFamily, FontSpec, FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use stylesheet::{
    ColumnPolicy, HeadingStyle, ListStyle, RuleStyle, Stylesheet, TableStyle, TextStyle,
};

#[cfg(test)]
mod stylesheet_test;
