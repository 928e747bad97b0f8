//! Intermediate Document Format (IDF)
//!
//! The flat, immutable block sequence produced by a parser and consumed by the
//! layout engine. Inline content is already flattened into styled runs, so the
//! layout side never sees the parser's tree shape.

use serde::{Deserialize, Serialize};

/// The visual role of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleTag {
    #[default]
    Plain,
    Emphasis,
    Strong,
    StrongEmphasis,
    Code,
    Link,
    Strikethrough,
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineRun {
    pub text: String,
    #[serde(default)]
    pub style: StyleTag,
    /// Link target, present when the run is (part of) a link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleTag::Plain,
            href: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleTag::Link,
            href: Some(href.into()),
        }
    }
}

/// One entry of a list. Nested lists are flattened, `depth` records the nesting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub runs: Vec<InlineRun>,
    #[serde(default)]
    pub depth: u8,
    /// Numbering of a nested item's own list; `None` inherits the outer list's flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    /// Text that resumes an item after its nested list. Drawn without a marker
    /// and does not advance the numbering.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub continuation: bool,
}

impl ListItem {
    pub fn new(runs: Vec<InlineRun>) -> Self {
        Self {
            runs,
            depth: 0,
            ordered: None,
            continuation: false,
        }
    }

    pub fn nested(runs: Vec<InlineRun>, depth: u8, ordered: bool) -> Self {
        Self {
            runs,
            depth,
            ordered: Some(ordered),
            continuation: false,
        }
    }

    /// Marks the item as the remainder of the previous item at its depth.
    pub fn continued(mut self) -> Self {
        self.continuation = true;
        self
    }
}

/// A table grid. The header length defines the column count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Returns the index and length of the first row whose length differs from the header.
    pub fn first_mismatched_row(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.header.len())
            .map(|(i, row)| (i, row.len()))
    }
}

/// A structural unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Heading {
        level: u8,
        runs: Vec<InlineRun>,
    },
    Paragraph {
        runs: Vec<InlineRun>,
    },
    List {
        ordered: bool,
        /// First number of an ordered list.
        #[serde(default = "default_start")]
        start: u64,
        items: Vec<ListItem>,
    },
    Table(TableBlock),
    CodeBlock {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Rule,
}

fn default_start() -> u64 {
    1
}

/// The discriminant of a [`Block`], used for logging and dispatch tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    Table,
    CodeBlock,
    Rule,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            runs: vec![InlineRun::plain(text)],
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            runs: vec![InlineRun::plain(text)],
        }
    }

    pub fn list(ordered: bool, items: &[&str]) -> Self {
        Block::List {
            ordered,
            start: 1,
            items: items
                .iter()
                .map(|text| ListItem::new(vec![InlineRun::plain(*text)]))
                .collect(),
        }
    }

    pub fn table(header: &[&str], rows: &[&[&str]]) -> Self {
        let to_strings =
            |cells: &[&str]| -> Vec<String> { cells.iter().map(|c| c.to_string()).collect() };
        Block::Table(TableBlock::new(
            to_strings(header),
            rows.iter().map(|row| to_strings(row)).collect(),
        ))
    }

    pub fn code(text: impl Into<String>) -> Self {
        Block::CodeBlock {
            text: text.into(),
            language: None,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::List { .. } => BlockKind::List,
            Block::Table(_) => BlockKind::Table,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::Rule => BlockKind::Rule,
        }
    }
}

/// Concatenates the text of a run sequence, dropping all styling.
pub fn plain_text(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
