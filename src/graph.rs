//! Dependency graph derivation, layout and rendering.
//!
//! The graph has one node per distinct id appearing as a requirement id or
//! as a dependency reference, and one directed edge per dependency
//! reference (`dependency → dependent`). Dangling references, duplicate
//! references, self-loops and cycles are all tolerated structurally; the
//! layout is bounded-iteration so cycles cannot prevent termination.

mod builder;
mod layout;
mod render;

pub use builder::{DependencyGraph, NodeData};
pub use layout::{LayoutOptions, Point, layout};
pub(crate) use render::{encode_png, render};
