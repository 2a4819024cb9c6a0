//! Natural-language text synthesis for document content slots.
//!
//! A [`Synthesizer`] produces the free-form passages of a document: the
//! system overview, the technical design, the implementation details and the
//! per-requirement user stories. Two implementations exist:
//!
//! - [`TemplateSynthesizer`] — deterministic canned prose, a pure function
//!   of the requirement set.
//! - [`AiSynthesizer`] — delegates to a generative-language backend and
//!   falls back to the template output, per call, when the backend fails.
//!
//! Which one an engine uses is decided once, at construction, by
//! [`synthesizer_from_env`]: no credential (or a client that fails to
//! initialise) means the engine is template-only for its whole lifetime.

mod ai;
mod backend;
mod template;

pub use ai::AiSynthesizer;
pub use backend::{AUTH_ENV_VAR, BackendError, ChatBackend, HttpBackend};
pub use template::TemplateSynthesizer;

use crate::domain::{Requirement, RequirementSet};

/// A named content slot in a document template.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// The system-overview passage of the design document.
    SystemOverview,
    /// The technical-design passage of the design document.
    TechnicalDesign,
    /// The implementation-details passage of the design document.
    ImplementationDetails,
    /// The narrative for a single requirement.
    Story(&'a Requirement),
}

impl Slot<'_> {
    /// Lower-case slot name, used in prompts and log events.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SystemOverview => "system overview",
            Self::TechnicalDesign => "technical design",
            Self::ImplementationDetails => "implementation details",
            Self::Story(_) => "user story",
        }
    }
}

/// A producer of natural-language passages for document content slots.
///
/// `synthesize` never fails and always returns non-empty text; any internal
/// failure is absorbed by falling back to deterministic output.
pub trait Synthesizer {
    /// Produces the text for `slot`, given the requirement set under
    /// synthesis.
    fn synthesize(&self, set: &RequirementSet, slot: Slot<'_>) -> String;
}

/// Selects the synthesizer variant for a new engine.
///
/// Reads the backend credential from the environment exactly once. A missing
/// credential, or a credential with a client that fails to initialise, is a
/// capability downgrade (logged at warning level), not an error: the engine
/// runs template-only for its whole lifetime. There is no per-call retry of
/// initialisation.
#[must_use]
pub fn synthesizer_from_env() -> Box<dyn Synthesizer> {
    match std::env::var(AUTH_ENV_VAR) {
        Err(_) => {
            tracing::warn!(
                "{AUTH_ENV_VAR} not set; narrative sections will use template text"
            );
            Box::new(TemplateSynthesizer)
        }
        Ok(api_key) => match HttpBackend::new(api_key) {
            Ok(backend) => {
                tracing::info!("generative backend initialised");
                Box::new(AiSynthesizer::new(backend))
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    "failed to initialise generative backend; narrative sections will use template text"
                );
                Box::new(TemplateSynthesizer)
            }
        },
    }
}
