use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use quire_idf::{plain_text, Block, InlineRun, ListItem, StyleTag, TableBlock};

#[derive(Debug)]
struct ListFrame {
    ordered: bool,
    start: u64,
    /// Whether the open item already produced its entry.
    item_emitted: bool,
}

#[derive(Debug, Default)]
struct TableState {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
}

/// Inline style nesting at the current position.
#[derive(Debug, Default)]
struct InlineStyle {
    emphasis: u32,
    strong: u32,
    strikethrough: u32,
    link: Option<String>,
}

impl InlineStyle {
    fn tag(&self) -> StyleTag {
        match (self.strong > 0, self.emphasis > 0) {
            (true, true) => StyleTag::StrongEmphasis,
            (true, false) => StyleTag::Strong,
            (false, true) => StyleTag::Emphasis,
            (false, false) if self.link.is_some() => StyleTag::Link,
            (false, false) if self.strikethrough > 0 => StyleTag::Strikethrough,
            _ => StyleTag::Plain,
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Walks a `pulldown-cmark` event stream and builds blocks.
#[derive(Debug)]
pub struct MarkdownConverter {
    options: Options,
    blocks: Vec<Block>,
    runs: Vec<InlineRun>,
    style: InlineStyle,
    heading: Option<u8>,
    lists: Vec<ListFrame>,
    items: Vec<ListItem>,
    table: Option<TableState>,
    code: Option<(String, Option<String>)>,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::with_options(crate::default_options())
    }
}

impl MarkdownConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            blocks: Vec::new(),
            runs: Vec::new(),
            style: InlineStyle::default(),
            heading: None,
            lists: Vec::new(),
            items: Vec::new(),
            table: None,
            code: None,
        }
    }

    pub fn convert(mut self, source: &str) -> Vec<Block> {
        let parser = Parser::new_ext(source, self.options);
        for event in parser {
            self.handle(event);
        }
        log::debug!("Converted Markdown into {} blocks", self.blocks.len());
        self.blocks
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => match &mut self.code {
                Some((code, _)) => code.push_str(&text),
                None => self.push_text(&text, self.style.tag()),
            },
            Event::Code(text) => self.push_text(&text, StyleTag::Code),
            Event::SoftBreak | Event::HardBreak => self.push_text(" ", self.style.tag()),
            Event::Rule => {
                self.flush_open_list();
                self.blocks.push(Block::Rule);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                log::debug!("Skipping raw HTML: {}", html.trim());
            }
            other => log::debug!("Ignoring unsupported Markdown event: {:?}", other),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                if self.lists.is_empty() {
                    self.runs.clear();
                    self.heading = Some(heading_level(level));
                } else if !self.runs.is_empty() {
                    // A heading inside a list item becomes part of the item's text.
                    self.push_text(" ", StyleTag::Plain);
                }
            }
            Tag::Paragraph => {
                // Paragraphs of a loose list item share the item's runs.
                if !self.lists.is_empty() && !self.runs.is_empty() {
                    self.push_text(" ", StyleTag::Plain);
                }
            }
            Tag::List(start) => {
                self.emit_pending_item();
                self.lists.push(ListFrame {
                    ordered: start.is_some(),
                    start: start.unwrap_or(1),
                    item_emitted: true,
                });
            }
            Tag::Item => {
                self.runs.clear();
                if let Some(frame) = self.lists.last_mut() {
                    frame.item_emitted = false;
                }
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((String::new(), language));
            }
            Tag::Table(_) => {
                self.flush_open_list();
                self.table = Some(TableState::default());
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(table) = &mut self.table {
                    table.row.clear();
                }
            }
            Tag::TableCell => self.runs.clear(),
            Tag::Emphasis => self.style.emphasis += 1,
            Tag::Strong => self.style.strong += 1,
            Tag::Strikethrough => self.style.strikethrough += 1,
            Tag::Link { dest_url, .. } => self.style.link = Some(dest_url.to_string()),
            Tag::Image { dest_url, .. } => {
                log::debug!("Image '{}' replaced by its alt text", dest_url);
            }
            Tag::BlockQuote(_) => {}
            other => log::debug!("Ignoring unsupported Markdown container: {:?}", other),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                if let Some(level) = self.heading.take() {
                    let runs = std::mem::take(&mut self.runs);
                    self.blocks.push(Block::Heading { level, runs });
                }
            }
            TagEnd::Paragraph => {
                if self.lists.is_empty() && self.table.is_none() {
                    let runs = std::mem::take(&mut self.runs);
                    if !runs.is_empty() {
                        self.blocks.push(Block::Paragraph { runs });
                    }
                }
            }
            TagEnd::Item => self.emit_pending_item(),
            TagEnd::List(_) => {
                if let Some(frame) = self.lists.pop() {
                    if self.lists.is_empty() && !self.items.is_empty() {
                        let items = std::mem::take(&mut self.items);
                        self.blocks.push(Block::List {
                            ordered: frame.ordered,
                            start: frame.start,
                            items,
                        });
                    }
                }
            }
            TagEnd::CodeBlock => {
                if let Some((text, language)) = self.code.take() {
                    let text = text.trim_end_matches('\n').to_string();
                    if self.lists.is_empty() {
                        self.blocks.push(Block::CodeBlock { text, language });
                    } else {
                        // A code block inside a list item stays part of the item.
                        self.push_text(" ", StyleTag::Plain);
                        self.push_text(&text.replace('\n', " "), StyleTag::Code);
                    }
                }
            }
            TagEnd::TableCell => {
                let cell = plain_text(&std::mem::take(&mut self.runs)).trim().to_string();
                if let Some(table) = &mut self.table {
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = &mut self.table {
                    table.header = std::mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = &mut self.table {
                    let mut row = std::mem::take(&mut table.row);
                    if row.len() != table.header.len() {
                        log::debug!(
                            "Normalizing table row of {} cells to {} columns",
                            row.len(),
                            table.header.len()
                        );
                        row.resize(table.header.len(), String::new());
                    }
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.blocks
                        .push(Block::Table(TableBlock::new(table.header, table.rows)));
                }
            }
            TagEnd::Emphasis => self.style.emphasis = self.style.emphasis.saturating_sub(1),
            TagEnd::Strong => self.style.strong = self.style.strong.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.style.strikethrough = self.style.strikethrough.saturating_sub(1)
            }
            TagEnd::Link => self.style.link = None,
            _ => {}
        }
    }

    /// Emits the open item's text: as the item itself the first time, and as a
    /// continuation when text follows one of its nested lists.
    fn emit_pending_item(&mut self) {
        let Some(frame) = self.lists.last() else {
            return;
        };
        if !frame.item_emitted {
            self.emit_item(false);
        } else if self.runs.iter().any(|run| !run.text.trim().is_empty()) {
            self.emit_item(true);
        } else {
            self.runs.clear();
        }
    }

    fn emit_item(&mut self, continuation: bool) {
        let depth = self.lists.len().saturating_sub(1);
        let runs = std::mem::take(&mut self.runs);
        let Some(frame) = self.lists.last_mut() else {
            return;
        };
        frame.item_emitted = true;
        let item = if depth == 0 {
            ListItem::new(runs)
        } else {
            ListItem::nested(runs, u8::try_from(depth).unwrap_or(u8::MAX), frame.ordered)
        };
        self.items.push(if continuation { item.continued() } else { item });
    }

    /// Closes the list collected so far so a block that cannot live inside a
    /// list item keeps its place in the document. Items after the block form a
    /// new list that continues the numbering.
    fn flush_open_list(&mut self) {
        if self.lists.is_empty() {
            return;
        }
        self.emit_pending_item();
        let items = std::mem::take(&mut self.items);
        if items.is_empty() {
            return;
        }
        let numbered = items
            .iter()
            .filter(|item| item.depth == 0 && !item.continuation)
            .count() as u64;
        let Some(outer) = self.lists.first_mut() else {
            return;
        };
        log::debug!("Splitting list around a block nested in one of its items");
        self.blocks.push(Block::List {
            ordered: outer.ordered,
            start: outer.start,
            items,
        });
        outer.start = outer.start.saturating_add(numbered);
    }

    fn push_text(&mut self, text: &str, style: StyleTag) {
        if text.is_empty() {
            return;
        }
        let href = self.style.link.clone();
        match self.runs.last_mut() {
            Some(last) if last.style == style && last.href == href => last.text.push_str(text),
            _ => self.runs.push(InlineRun {
                text: text.to_string(),
                style,
                href,
            }),
        }
    }
}
