//! Low-level nom parser functions for configuration values.
//!
//! Lengths accept an optional unit suffix (`pt`, `px`, `in`, `cm`, `mm`) and are
//! normalized to points. Page sizes accept a paper name or two lengths.

use crate::dimension::PageSize;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit0, digit1, one_of, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit.unwrap_or(1.0)))
}

/// Parses a complete length string, rejecting trailing garbage.
pub fn parse_length_str(input: &str) -> Result<f32, StyleParseError> {
    all_consuming(delimited(space0, parse_length, space0))
        .parse(input)
        .map(|(_, length)| length)
        .map_err(|_| StyleParseError::InvalidValue {
            property: "length".to_string(),
            value: input.to_string(),
        })
}

fn parse_named_page_size(input: &str) -> IResult<&str, PageSize> {
    alt((
        value(PageSize::A4, tag_no_case("a4")),
        value(PageSize::Letter, tag_no_case("letter")),
        value(PageSize::Legal, tag_no_case("legal")),
    ))
    .parse(input)
}

fn parse_custom_page_size(input: &str) -> IResult<&str, PageSize> {
    map(
        separated_pair(parse_length, space1, parse_length),
        |(width, height)| PageSize::Custom { width, height },
    )
    .parse(input)
}

/// Parses a page size: `"A4"`, `"Letter"`, `"Legal"` or `"<width> <height>"`.
pub fn parse_page_size(input: &str) -> Result<PageSize, StyleParseError> {
    all_consuming(delimited(
        space0,
        alt((parse_named_page_size, parse_custom_page_size)),
        space0,
    ))
    .parse(input)
    .map(|(_, size)| size)
    .map_err(|_| StyleParseError::InvalidValue {
        property: "size".to_string(),
        value: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_parse_length_units() {
        assert!(approx(parse_length_str("12").unwrap(), 12.0));
        assert!(approx(parse_length_str("12pt").unwrap(), 12.0));
        assert!(approx(parse_length_str("1in").unwrap(), 72.0));
        assert!(approx(parse_length_str("2cm").unwrap(), 56.7));
        assert!(approx(parse_length_str(" 10mm ").unwrap(), 28.35));
        assert!(approx(parse_length_str(".5in").unwrap(), 36.0));
    }

    #[test]
    fn test_parse_length_rejects_garbage() {
        assert!(parse_length_str("twelve").is_err());
        assert!(parse_length_str("12 furlongs").is_err());
        assert!(parse_length_str("").is_err());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("A4"), Ok(PageSize::A4));
        assert_eq!(parse_page_size("letter"), Ok(PageSize::Letter));
        assert_eq!(
            parse_page_size("300pt 400pt"),
            Ok(PageSize::Custom {
                width: 300.0,
                height: 400.0
            })
        );
        assert!(parse_page_size("A5").is_err());
    }
}
