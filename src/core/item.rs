//! Display items — opaque content the widget loops over.

/// A single piece of display content.  Identity is its index in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    content: String,
}

impl Item {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content split into display lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }
}
