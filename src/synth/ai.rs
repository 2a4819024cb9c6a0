use crate::domain::RequirementSet;

use super::{ChatBackend, HttpBackend, Slot, Synthesizer, TemplateSynthesizer};

/// Backend-delegating text synthesis with per-call fallback.
///
/// Each call formats a prompt embedding a JSON snapshot of the relevant data
/// and returns the backend's completion verbatim. A failed call is logged
/// and degrades to the template output for that call only; the backend is
/// tried again on the next call.
pub struct AiSynthesizer<B = HttpBackend> {
    backend: B,
    fallback: TemplateSynthesizer,
}

impl<B: ChatBackend> AiSynthesizer<B> {
    /// Wraps a backend transport.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            fallback: TemplateSynthesizer,
        }
    }
}

impl<B: ChatBackend> Synthesizer for AiSynthesizer<B> {
    fn synthesize(&self, set: &RequirementSet, slot: Slot<'_>) -> String {
        let prompt = prompt_for(set, slot);
        match self.backend.complete(&prompt) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::error!(
                    slot = slot.name(),
                    "generative backend returned empty text; using template output for this call"
                );
                self.fallback.synthesize(set, slot)
            }
            Err(error) => {
                tracing::error!(
                    slot = slot.name(),
                    %error,
                    "generative backend call failed; using template output for this call"
                );
                self.fallback.synthesize(set, slot)
            }
        }
    }
}

fn prompt_for(set: &RequirementSet, slot: Slot<'_>) -> String {
    match slot {
        Slot::Story(requirement) => {
            let snapshot = serde_json::to_string_pretty(requirement)
                .expect("requirement records always serialize");
            format!(
                "Generate a user story based on this requirement:\n{snapshot}\n\nUser Story:"
            )
        }
        Slot::SystemOverview | Slot::TechnicalDesign | Slot::ImplementationDetails => {
            let snapshot =
                serde_json::to_string_pretty(set).expect("requirement sets always serialize");
            let name = slot.name();
            let heading = match slot {
                Slot::SystemOverview => "System Overview",
                Slot::TechnicalDesign => "Technical Design",
                _ => "Implementation Details",
            };
            format!("Generate a {name} based on these requirements:\n{snapshot}\n\n{heading}:")
        }
    }
}
