//! Defines the top-level stylesheet structure that holds all styling information.
//!
//! Every tunable constant of the block renderer lives here: font choices, line
//! heights, gaps, indents and the page geometry. A stylesheet deserializes from
//! camelCase JSON and every field has a default, so partial documents are valid.

use crate::dimension::{deserialize_length, PageLayout};
use crate::font::{FontFamily, FontSpec};
use crate::parsers::StyleParseError;
use quire_types::Color;
use serde::{Deserialize, Serialize};

/// A font plus the vertical space each line of it occupies.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font: FontSpec,
    #[serde(deserialize_with = "deserialize_length")]
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            line_height: 15.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingStyle {
    pub family: FontFamily,
    /// Size of a level-1 heading.
    pub base_size: f32,
    /// Size reduction per heading level.
    pub size_step: f32,
    #[serde(deserialize_with = "deserialize_length")]
    pub line_height: f32,
    pub color: Color,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            family: FontFamily::Helvetica,
            base_size: 24.0,
            size_step: 3.0,
            line_height: 30.0,
            color: Color::rgb(0x1a, 0x1a, 0x2e),
        }
    }
}

impl HeadingStyle {
    /// Font size for a heading level; levels outside 1..=6 are clamped.
    pub fn size_for_level(&self, level: u8) -> f32 {
        let level = level.clamp(1, 6);
        self.base_size - f32::from(level - 1) * self.size_step
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListStyle {
    #[serde(deserialize_with = "deserialize_length")]
    pub indent: f32,
    #[serde(deserialize_with = "deserialize_length")]
    pub item_gap: f32,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            indent: 18.0,
            item_gap: 4.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleStyle {
    /// Vertical space consumed by a rule.
    #[serde(deserialize_with = "deserialize_length")]
    pub height: f32,
    /// Offset of the drawn line below the cursor.
    #[serde(deserialize_with = "deserialize_length")]
    pub offset: f32,
    pub thickness: f32,
    pub color: Color,
}

impl Default for RuleStyle {
    fn default() -> Self {
        Self {
            height: 16.0,
            offset: 8.0,
            thickness: 0.75,
            color: Color::gray(160),
        }
    }
}

/// How table column widths are chosen.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnPolicy {
    /// Divide the content width equally between columns.
    #[default]
    Equal,
    /// Distribute the content width in proportion to each column's widest cell.
    Content,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    pub header_font: FontSpec,
    pub body_font: FontSpec,
    #[serde(deserialize_with = "deserialize_length")]
    pub line_height: f32,
    #[serde(deserialize_with = "deserialize_length")]
    pub cell_padding: f32,
    pub header_fill: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub column_policy: ColumnPolicy,
    /// A table starting closer than this to the bottom margin moves to the next page.
    #[serde(deserialize_with = "deserialize_length")]
    pub orphan_threshold: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_font: FontSpec::new(FontFamily::Helvetica, 10.0).bold(),
            body_font: FontSpec::new(FontFamily::Helvetica, 10.0),
            line_height: 13.0,
            cell_padding: 4.0,
            header_fill: Color::gray(225),
            border_color: Color::gray(140),
            border_width: 0.5,
            column_policy: ColumnPolicy::Equal,
            orphan_threshold: 60.0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stylesheet {
    pub page: PageLayout,
    pub body: TextStyle,
    pub headings: HeadingStyle,
    pub code: TextStyle,
    pub table: TableStyle,
    pub list: ListStyle,
    pub rule: RuleStyle,
    pub link_color: Color,
    /// Family used for inline code spans inside prose.
    pub inline_code_family: FontFamily,
    #[serde(deserialize_with = "deserialize_length")]
    pub paragraph_gap: f32,
    pub show_page_numbers: bool,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            page: PageLayout::default(),
            body: TextStyle::default(),
            headings: HeadingStyle::default(),
            code: TextStyle {
                font: FontSpec::new(FontFamily::Courier, 9.0).with_color(Color::gray(40)),
                line_height: 12.0,
            },
            table: TableStyle::default(),
            list: ListStyle::default(),
            rule: RuleStyle::default(),
            link_color: Color::rgb(0x1f, 0x4e, 0xa8),
            inline_code_family: FontFamily::Courier,
            paragraph_gap: 10.0,
            show_page_numbers: false,
        }
    }
}

impl Stylesheet {
    /// Checks that the page leaves room for content and every line height is usable.
    pub fn validate(&self) -> Result<(), StyleParseError> {
        let invalid = |property: &str, value: f32| StyleParseError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        };

        if self.page.margin < 0.0 {
            return Err(invalid("page.margin", self.page.margin));
        }
        if self.page.content_width() <= 0.0 {
            return Err(invalid("page.margin", self.page.margin));
        }
        if self.page.height() - 2.0 * self.page.margin <= 0.0 {
            return Err(invalid("page.margin", self.page.margin));
        }
        if self.page.bottom_threshold < 0.0 {
            return Err(invalid("page.bottomThreshold", self.page.bottom_threshold));
        }

        let line_heights = [
            ("body.lineHeight", self.body.line_height),
            ("headings.lineHeight", self.headings.line_height),
            ("code.lineHeight", self.code.line_height),
            ("table.lineHeight", self.table.line_height),
        ];
        for (property, value) in line_heights {
            if value <= 0.0 {
                return Err(invalid(property, value));
            }
        }

        let smallest_heading = self.headings.size_for_level(6);
        if smallest_heading <= 0.0 {
            return Err(invalid("headings.sizeStep", self.headings.size_step));
        }
        Ok(())
    }
}
