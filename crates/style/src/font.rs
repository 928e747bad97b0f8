use quire_types::Color;
use serde::{de, Deserialize, Deserializer, Serialize};

/// The font families available to the layout engine.
///
/// These map onto the PDF standard fonts, which every viewer ships, so no
/// font data has to be embedded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    pub fn is_monospace(self) -> bool {
        matches!(self, FontFamily::Courier)
    }

    /// Average advance of one character, as a fraction of the font size.
    pub fn average_char_width(self) -> f32 {
        match self {
            FontFamily::Helvetica => 0.52,
            FontFamily::Times => 0.47,
            FontFamily::Courier => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Parse a font weight from a string (e.g., "bold", "400")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" | "regular" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => s
                .parse::<u16>()
                .map(FontWeight::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }

    /// Collapses the CSS 100-900 scale onto the two weights the standard fonts provide.
    pub fn from_numeric(value: u16) -> Self {
        if value >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A fully resolved font selection for one run of text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::Helvetica,
            size: 11.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            color: Color::black(),
        }
    }
}

impl FontSpec {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }
}
