//! Defines page geometry: paper sizes, margins and the page-break threshold.
use crate::parsers::{parse_length_str, parse_page_size};
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Returns the `(width, height)` of the page in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map {
                #[serde(deserialize_with = "deserialize_length")]
                width: f32,
                #[serde(deserialize_with = "deserialize_length")]
                height: f32,
            },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => parse_page_size(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// Deserializes a length given either as a bare number of points or as a
/// string with a unit, such as `"2cm"` or `"0.5in"`.
pub fn deserialize_length<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LengthDef {
        Num(f32),
        Str(String),
    }

    match LengthDef::deserialize(deserializer)? {
        LengthDef::Num(n) => Ok(n),
        LengthDef::Str(s) => parse_length_str(&s).map_err(de::Error::custom),
    }
}

/// The physical layout of every page in the document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageLayout {
    pub size: PageSize,
    /// Uniform margin applied to all four edges.
    #[serde(deserialize_with = "deserialize_length")]
    pub margin: f32,
    /// Distance from the bottom edge inside which the cursor forces a page break
    /// once the current block is finished.
    #[serde(deserialize_with = "deserialize_length")]
    pub bottom_threshold: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: 50.0,
            bottom_threshold: 72.0,
        }
    }
}

impl PageLayout {
    pub fn width(&self) -> f32 {
        self.size.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.size.dimensions_pt().1
    }

    /// Page width minus the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width() - 2.0 * self.margin
    }
}
