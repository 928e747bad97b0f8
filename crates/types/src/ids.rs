//! Newtype wrapper for heading anchors.
//!
//! Anchors are derived from heading text and referenced by `#fragment` links,
//! so they get their own type rather than travelling around as bare strings.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// An identifier for a document anchor (a heading that links can target).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Creates a new AnchorId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this anchor ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a link target of the form `#anchor` to the anchor it names.
    /// Returns `None` for external targets.
    pub fn from_fragment(href: &str) -> Option<Self> {
        href.strip_prefix('#')
            .filter(|id| !id.is_empty())
            .map(AnchorId::from)
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
