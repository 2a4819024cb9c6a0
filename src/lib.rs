//! Document synthesis for extracted business requirements.
//!
//! Given a [`RequirementSet`] (project metadata plus an ordered list of
//! requirement records, typically produced by an upstream extraction
//! stage), the [`Engine`] generates three artifacts in an output
//! directory: a technical design document, a user story document, and a
//! rendered dependency diagram.
//!
//! Free-form document sections are produced by a
//! [`Synthesizer`](synth::Synthesizer): backed by a generative-language
//! service when a credential is available, and by deterministic templates
//! otherwise. The fallback is seamless — a missing or failing backend
//! degrades output quality, never the operation.

/// Document trees, assembly and rendering.
pub mod document;
pub mod domain;
/// The engine tying synthesis, assembly and rendering together.
pub mod engine;
/// Dependency graph derivation, layout and rendering.
pub mod graph;
mod storage;
/// Text synthesis for free-form content slots.
pub mod synth;

pub use domain::{
    Priority, ProjectInfo, Requirement, RequirementSet, RequirementType, SetLoadError,
};
pub use engine::{
    DESIGN_DOCUMENT_FILE, DIAGRAM_FILE, DiagramError, DocumentError, Engine, STORY_DOCUMENT_FILE,
};
pub use graph::{DependencyGraph, LayoutOptions};
pub use synth::{AiSynthesizer, Synthesizer, TemplateSynthesizer};
