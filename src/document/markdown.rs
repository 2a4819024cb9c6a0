//! Renders a [`DocumentTree`] to Markdown text.

use super::{DocumentTree, Style};

/// Renders the tree to a Markdown document.
///
/// The title renders as a level-1 heading, so a section at tree level `n`
/// renders at Markdown level `n + 1`.
#[must_use]
pub fn render(tree: &DocumentTree) -> String {
    let mut output = String::new();
    let mut in_list = false;

    for block in tree.blocks() {
        if in_list && block.style != Style::Bullet {
            output.push('\n');
        }
        match block.style {
            Style::Title => {
                output.push_str(&format!("# {}\n\n", block.text));
            }
            Style::Heading => {
                let marker = "#".repeat(block.level + 1);
                output.push_str(&format!("{marker} {}\n\n", block.text));
            }
            Style::Body => {
                output.push_str(&format!("{}\n\n", block.text));
            }
            Style::Bullet => {
                output.push_str(&format!("- {}\n", block.text));
            }
        }
        in_list = block.style == Style::Bullet;
    }
    if in_list {
        output.push('\n');
    }

    output
}
