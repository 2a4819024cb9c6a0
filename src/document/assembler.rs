use chrono::Utc;

use crate::{
    domain::{Requirement, RequirementSet, RequirementType},
    synth::{Slot, Synthesizer},
};

use super::DocumentTree;

/// Author label stamped into document metadata.
pub const AUTHOR: &str = "requirements-docgen";

/// Builds the fixed document shapes from a requirement set.
///
/// Free-form slots are delegated to the synthesizer; data-driven sections
/// are formatted deterministically from the set. Assembly is total: missing
/// optional fields render as an explicit `N/A` placeholder and never drop
/// structure.
pub struct Assembler<'a> {
    set: &'a RequirementSet,
    synthesizer: &'a dyn Synthesizer,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler over a requirement set.
    #[must_use]
    pub fn new(set: &'a RequirementSet, synthesizer: &'a dyn Synthesizer) -> Self {
        Self { set, synthesizer }
    }

    /// Assembles the technical design document.
    #[must_use]
    pub fn design_document(&self) -> DocumentTree {
        let mut tree = DocumentTree::new();
        self.front_matter(&mut tree, "Technical Design Document");

        tree.heading(1, "1. Introduction");
        tree.paragraph(self.introduction());

        tree.heading(1, "2. Purpose");
        tree.paragraph(
            "This document provides a detailed technical design for the automation solution.",
        );

        tree.heading(1, "3. Scope");
        tree.paragraph(
            "This document covers the design of all components required for the automation solution.",
        );

        tree.heading(1, "4. System Overview");
        tree.paragraph(self.synthesizer.synthesize(self.set, Slot::SystemOverview));

        tree.heading(1, "5. Architecture");
        tree.paragraph(
            "The solution follows a modular architecture with the following components:",
        );

        tree.heading(1, "6. Components");
        let mut group = 0;
        for kind in &RequirementType::CANONICAL {
            let requirements: Vec<&Requirement> = self.set.of_kind(kind).collect();
            if requirements.is_empty() {
                continue;
            }
            group += 1;
            tree.heading(2, format!("6.{group}. {} Components", kind.display_name()));
            for requirement in requirements {
                tree.bullet(format!(
                    "{}: {}",
                    requirement.id,
                    or_na(&requirement.description)
                ));
                tree.paragraph(format!("Details: {}", or_na(&requirement.details)));
            }
        }

        tree.heading(1, "7. Requirements");
        for (index, requirement) in self.set.iter().enumerate() {
            tree.heading(
                2,
                format!(
                    "7.{}. {}: {}",
                    index + 1,
                    requirement.id,
                    or_na(&requirement.description)
                ),
            );
            tree.paragraph(format!("Type: {}", or_na(&requirement.kind.to_string())));
            tree.paragraph(format!(
                "Priority: {}",
                or_na(&requirement.priority.to_string())
            ));
            tree.paragraph(format!("Details: {}", or_na(&requirement.details)));
            if !requirement.dependencies.is_empty() {
                tree.paragraph(format!(
                    "Dependencies: {}",
                    requirement.dependencies.join(", ")
                ));
            }
        }

        tree.heading(1, "8. Technical Design");
        tree.paragraph(self.synthesizer.synthesize(self.set, Slot::TechnicalDesign));

        tree.heading(1, "9. Implementation Details");
        tree.paragraph(
            self.synthesizer
                .synthesize(self.set, Slot::ImplementationDetails),
        );

        tree.heading(1, "10. Testing");
        tree.paragraph("The solution will be tested using the following approach:");
        tree.bullet("Unit Testing: Testing individual components");
        tree.bullet("Integration Testing: Testing component interactions");
        tree.bullet("System Testing: Testing the entire solution");
        tree.bullet("User Acceptance Testing: Validation by business users");

        tree.heading(1, "11. Deployment");
        tree.paragraph("The solution will be deployed to the production automation environment.");

        tree.heading(1, "12. Maintenance");
        tree.paragraph("The solution will be maintained according to the following schedule:");
        tree.bullet("Regular monitoring of automation execution logs");
        tree.bullet("Weekly review of exceptions and failures");
        tree.bullet("Monthly performance optimization");

        tree.heading(1, "13. Conclusion");
        tree.paragraph("This document provides a comprehensive design for the automation solution.");

        tree
    }

    /// Assembles the user story document.
    #[must_use]
    pub fn story_document(&self) -> DocumentTree {
        let mut tree = DocumentTree::new();
        self.front_matter(&mut tree, "User Story Document");

        tree.heading(1, "1. Introduction");
        tree.paragraph(self.introduction());

        tree.heading(1, "2. Purpose");
        tree.paragraph("This document outlines the user stories for the automation solution.");

        tree.heading(1, "3. Scope");
        tree.paragraph("This document covers all user stories related to the automation solution.");

        tree.heading(1, "4. User Stories");
        for (index, requirement) in self.set.iter().enumerate() {
            tree.heading(
                2,
                format!("4.{}. User Story for {}", index + 1, requirement.id),
            );
            tree.paragraph(self.synthesizer.synthesize(self.set, Slot::Story(requirement)));
        }

        tree.heading(1, "5. Conclusion");
        tree.paragraph(
            "This document provides a comprehensive set of user stories for the automation solution.",
        );

        tree
    }

    fn front_matter(&self, tree: &mut DocumentTree, title: &str) {
        tree.title(title);
        tree.heading(1, "Document Information");
        tree.paragraph(format!("Project: {}", or_na(&self.set.project.name)));
        tree.paragraph(format!("Version: {}", or_na(&self.set.project.version)));
        tree.paragraph(format!("Date: {}", Utc::now().format("%Y-%m-%d")));
        tree.paragraph(format!("Author: {AUTHOR}"));
    }

    fn introduction(&self) -> String {
        if self.set.project.description.trim().is_empty() {
            "No description available.".to_string()
        } else {
            self.set.project.description.clone()
        }
    }
}

fn or_na(text: &str) -> &str {
    if text.trim().is_empty() { "N/A" } else { text }
}
