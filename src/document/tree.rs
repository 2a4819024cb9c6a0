use serde::Serialize;

/// Rendering hint for a document block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Style {
    /// The document title.
    Title,
    /// A section heading.
    Heading,
    /// A paragraph of body text.
    Body,
    /// A bulleted list item.
    Bullet,
}

/// One node of the ordered document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Nesting depth: 0 for the title, 1 for top-level sections, 2 for
    /// subsections. Body and bullet blocks carry the level of their
    /// enclosing section.
    pub level: usize,
    /// Heading text or body text, depending on `style`.
    pub text: String,
    /// Rendering hint.
    pub style: Style,
}

/// An ordered, serializable document structure.
///
/// The tree is append-only: assembly pushes blocks in display order, and
/// renderers consume them in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    blocks: Vec<Block>,
    #[serde(skip)]
    cursor: usize,
}

impl DocumentTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the document title.
    pub fn title(&mut self, text: impl Into<String>) {
        self.cursor = 0;
        self.blocks.push(Block {
            level: 0,
            text: text.into(),
            style: Style::Title,
        });
    }

    /// Appends a heading at the given level (1 = top-level section).
    pub fn heading(&mut self, level: usize, text: impl Into<String>) {
        self.cursor = level;
        self.blocks.push(Block {
            level,
            text: text.into(),
            style: Style::Heading,
        });
    }

    /// Appends a paragraph under the current section.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(Block {
            level: self.cursor,
            text: text.into(),
            style: Style::Body,
        });
    }

    /// Appends a bullet under the current section.
    pub fn bullet(&mut self, text: impl Into<String>) {
        self.blocks.push(Block {
            level: self.cursor,
            text: text.into(),
            style: Style::Bullet,
        });
    }

    /// The blocks in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Whether the tree contains no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The heading texts in display order, including the title.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.style, Style::Title | Style::Heading))
            .map(|block| block.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentTree, Style};

    #[test]
    fn body_blocks_inherit_section_level() {
        let mut tree = DocumentTree::new();
        tree.title("Doc");
        tree.heading(1, "Section");
        tree.paragraph("text");
        tree.heading(2, "Subsection");
        tree.bullet("item");

        let blocks = tree.blocks();
        assert_eq!(blocks[2].level, 1);
        assert_eq!(blocks[2].style, Style::Body);
        assert_eq!(blocks[4].level, 2);
        assert_eq!(blocks[4].style, Style::Bullet);
    }

    #[test]
    fn headings_lists_title_and_sections_in_order() {
        let mut tree = DocumentTree::new();
        tree.title("Doc");
        tree.heading(1, "One");
        tree.paragraph("text");
        tree.heading(1, "Two");

        let headings: Vec<_> = tree.headings().collect();
        assert_eq!(headings, ["Doc", "One", "Two"]);
    }
}
