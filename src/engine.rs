//! The document synthesis engine.
//!
//! An [`Engine`] owns an output directory and a synthesizer variant, chosen
//! once at construction. Its three public operations are isolated from one
//! another: a failure generating one artifact is logged and reported
//! without blocking the others, and never leaves a partial file behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::instrument;

use crate::{
    document::{Assembler, markdown},
    domain::RequirementSet,
    graph::{self, DependencyGraph, LayoutOptions},
    storage,
    synth::{Synthesizer, synthesizer_from_env},
};

/// Fixed filename of the technical design document.
pub const DESIGN_DOCUMENT_FILE: &str = "technical_design_document.md";

/// Fixed filename of the user story document.
pub const STORY_DOCUMENT_FILE: &str = "user_story_document.md";

/// Fixed filename of the dependency diagram.
pub const DIAGRAM_FILE: &str = "dependency_diagram.png";

/// An error generating one of the text documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The rendered document could not be persisted.
    #[error("failed to persist document")]
    Io(#[from] io::Error),
}

/// An error generating the dependency diagram.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The canvas could not be encoded as PNG.
    #[error("failed to encode diagram")]
    Encode(#[from] image::ImageError),

    /// The encoded image could not be persisted.
    #[error("failed to persist diagram")]
    Io(#[from] io::Error),
}

/// The document synthesis engine.
///
/// Construction creates the output directory and selects the synthesizer
/// variant from the environment (see
/// [`synthesizer_from_env`](crate::synth::synthesizer_from_env)). The
/// engine is stateless across operations apart from that selection; it
/// never mutates the requirement set it is given. Sequential use is the
/// documented contract — run one engine per thread for parallelism.
pub struct Engine {
    output_dir: PathBuf,
    synthesizer: Box<dyn Synthesizer>,
}

impl Engine {
    /// Creates an engine writing to `output_dir`, selecting the
    /// synthesizer variant from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created.
    pub fn new(output_dir: impl Into<PathBuf>) -> io::Result<Self> {
        Self::with_synthesizer(output_dir, synthesizer_from_env())
    }

    /// Creates an engine with an explicit synthesizer.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created.
    pub fn with_synthesizer(
        output_dir: impl Into<PathBuf>,
        synthesizer: Box<dyn Synthesizer>,
    ) -> io::Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            synthesizer,
        })
    }

    /// The directory artifacts are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates the technical design document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be persisted. No partial
    /// file is left behind on failure.
    #[instrument(skip_all, fields(project = %set.project.name))]
    pub fn generate_design_document(&self, set: &RequirementSet) -> Result<PathBuf, DocumentError> {
        tracing::info!("generating technical design document");
        let tree = Assembler::new(set, self.synthesizer.as_ref()).design_document();
        self.persist_document(DESIGN_DOCUMENT_FILE, &markdown::render(&tree))
    }

    /// Generates the user story document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be persisted. No partial
    /// file is left behind on failure.
    #[instrument(skip_all, fields(project = %set.project.name))]
    pub fn generate_story_document(&self, set: &RequirementSet) -> Result<PathBuf, DocumentError> {
        tracing::info!("generating user story document");
        let tree = Assembler::new(set, self.synthesizer.as_ref()).story_document();
        self.persist_document(STORY_DOCUMENT_FILE, &markdown::render(&tree))
    }

    /// Generates the dependency diagram.
    ///
    /// An empty requirement set is not an error: it yields a valid blank
    /// canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or persisted. No
    /// partial file is left behind on failure.
    #[instrument(skip_all, fields(project = %set.project.name))]
    pub fn generate_dependency_diagram(
        &self,
        set: &RequirementSet,
        options: &LayoutOptions,
    ) -> Result<PathBuf, DiagramError> {
        tracing::info!("generating dependency diagram");
        let dependency_graph = DependencyGraph::build(set);
        let positions = graph::layout(&dependency_graph, options);
        let image = graph::render(&dependency_graph, &positions);

        let bytes = match graph::encode_png(&image) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!(%error, "failed to encode dependency diagram");
                return Err(error.into());
            }
        };

        let path = self.output_dir.join(DIAGRAM_FILE);
        if let Err(error) = storage::persist_atomic(&path, &bytes) {
            tracing::error!(%error, path = %path.display(), "failed to persist dependency diagram");
            return Err(error.into());
        }
        tracing::info!(path = %path.display(), "dependency diagram generated");
        Ok(path)
    }

    fn persist_document(&self, filename: &str, content: &str) -> Result<PathBuf, DocumentError> {
        let path = self.output_dir.join(filename);
        if let Err(error) = storage::persist_atomic(&path, content.as_bytes()) {
            tracing::error!(%error, path = %path.display(), "failed to persist document");
            return Err(error.into());
        }
        tracing::info!(path = %path.display(), "document generated");
        Ok(path)
    }
}
