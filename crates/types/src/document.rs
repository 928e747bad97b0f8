use crate::ids::AnchorId;
use serde::Serialize;

/// An entry in the document outline, produced for every heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEntry {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The plain text of the heading.
    pub text: String,
    /// The anchor registered for the heading's position.
    pub anchor: AnchorId,
}
