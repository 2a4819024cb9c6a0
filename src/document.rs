//! Document assembly and rendering.
//!
//! Documents are built as an ordered tree of typed blocks
//! ([`DocumentTree`]), agnostic of any rendering format. The
//! [`Assembler`] produces the two document shapes from a requirement set,
//! querying the [`Synthesizer`](crate::synth::Synthesizer) for free-form
//! slots and formatting data-driven sections deterministically. Rendering
//! to Markdown is a boundary concern layered on top.

mod assembler;
/// Markdown rendering of document trees.
pub mod markdown;
mod tree;

pub use assembler::{AUTHOR, Assembler};
pub use tree::{Block, DocumentTree, Style};
