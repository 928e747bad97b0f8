use quire_style::PageLayout;

/// Page geometry as seen by the layout engine. All values are in points,
/// with y growing downward from the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Distance from the bottom edge; a cursor below `height - bottom_threshold`
    /// at the end of a block forces a page break.
    pub bottom_threshold: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from(&PageLayout::default())
    }
}

impl From<&PageLayout> for PageConfig {
    fn from(layout: &PageLayout) -> Self {
        Self {
            width: layout.width(),
            height: layout.height(),
            margin: layout.margin,
            bottom_threshold: layout.bottom_threshold,
        }
    }
}

impl PageConfig {
    /// The wrapping target width: page width minus left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Cursor position of the first line on a fresh page.
    pub fn content_top(&self) -> f32 {
        self.margin
    }

    /// Lowest y any line may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin
    }

    /// Cursor position past which the block-level fallback breaks the page.
    pub fn break_line(&self) -> f32 {
        self.height - self.bottom_threshold
    }
}
