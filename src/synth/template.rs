use std::fmt::Write;

use crate::domain::{Requirement, RequirementSet, RequirementType};

use super::{Slot, Synthesizer};

/// Deterministic, template-based text synthesis.
///
/// Output is a pure function of the requirement set: canned prose with
/// interpolated project fields. This is the reference implementation of the
/// [`Synthesizer`] contract and the fallback used when no generative backend
/// is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSynthesizer;

impl Synthesizer for TemplateSynthesizer {
    fn synthesize(&self, set: &RequirementSet, slot: Slot<'_>) -> String {
        match slot {
            Slot::SystemOverview => system_overview(set),
            Slot::TechnicalDesign => TECHNICAL_DESIGN.to_string(),
            Slot::ImplementationDetails => IMPLEMENTATION_DETAILS.to_string(),
            Slot::Story(requirement) => story(requirement),
        }
    }
}

fn system_overview(set: &RequirementSet) -> String {
    let name = non_empty(&set.project.name).unwrap_or("The automation solution");
    let description = non_empty(&set.project.description).unwrap_or("automate business processes");

    format!(
        "{name} is designed to {description}. The system consists of multiple components \
         that work together to achieve the automation goals. It includes data extraction \
         capabilities, data processing logic, system integration points, and process \
         automation workflows.\n\n\
         The solution is built as a set of coordinated automation workflows, automating \
         repetitive tasks and integrating with existing systems."
    )
}

const TECHNICAL_DESIGN: &str = "\
The technical design follows a modular approach with the following components:

1. Data Extraction Layer:
   - Responsible for extracting data from various sources
   - Uses OCR and pattern matching techniques
   - Handles different file formats and structures

2. Data Processing Layer:
   - Validates and transforms extracted data
   - Applies business rules and logic
   - Handles exceptions and edge cases

3. System Integration Layer:
   - Connects with external systems via APIs
   - Handles authentication and data exchange
   - Ensures data consistency across systems

4. Process Automation Layer:
   - Orchestrates the end-to-end process
   - Manages workflow and dependencies
   - Provides logging and error handling

The solution combines pre-built automation actions with custom scripts for \
complex logic.";

const IMPLEMENTATION_DETAILS: &str = "\
The implementation will use the following capabilities:

1. For Data Extraction:
   - Document OCR for text extraction
   - PDF integration for PDF processing
   - Email automation for handling attachments

2. For Data Processing:
   - String operations for data transformation
   - Spreadsheet tooling for data manipulation
   - An error handling framework for exception management

3. For System Integration:
   - REST web services for API integration
   - Database connectors for database operations
   - A credential vault for secure authentication

4. For Process Automation:
   - A task runner for the main process flow
   - Reusable components for shared logic
   - Workload management for scaling

The solution will be implemented using a combination of pre-built actions and \
custom scripts where necessary.";

/// Generates the three-part narrative for a single requirement.
///
/// The phrasing is selected by the requirement kind; the goal and benefit
/// clauses are lifted out of the description and details with a best-effort
/// keyword split, falling back to a generic phrase when the keyword is
/// absent. This never fails and never produces empty text.
fn story(requirement: &Requirement) -> String {
    let benefit = |fallback: &str| {
        clause_after(&requirement.details, "should").unwrap_or_else(|| fallback.to_string())
    };

    let (goal_line, benefit_clause, criteria) = match &requirement.kind {
        RequirementType::DataExtraction => (
            format!(
                "I want to automatically extract data from {},",
                clause_after(&requirement.description, "extract")
                    .unwrap_or_else(|| "the source".to_string())
            ),
            benefit("process it efficiently"),
            [
                "The automation should extract all required data fields",
                "The extraction should be accurate and reliable",
                "The automation should handle exceptions gracefully",
            ],
        ),
        RequirementType::DataProcessing => (
            format!(
                "I want to automatically process {},",
                clause_after(&requirement.description, "process")
                    .unwrap_or_else(|| "the data".to_string())
            ),
            benefit("use it for business purposes"),
            [
                "The automation should apply all business rules correctly",
                "The processing should be efficient and reliable",
                "The automation should handle exceptions gracefully",
            ],
        ),
        RequirementType::SystemIntegration => (
            format!(
                "I want to integrate with {},",
                clause_after(&requirement.description, "with")
                    .unwrap_or_else(|| "the target system".to_string())
            ),
            benefit("ensure data consistency across systems"),
            [
                "The automation should connect to the system securely",
                "The data exchange should be accurate and reliable",
                "The automation should handle connection issues gracefully",
            ],
        ),
        RequirementType::ProcessAutomation => (
            format!(
                "I want to automate {},",
                clause_after(&requirement.description, "automate")
                    .unwrap_or_else(|| "the process".to_string())
            ),
            benefit("improve efficiency and reduce manual effort"),
            [
                "The automation should execute the process end-to-end",
                "The automation should be reliable and consistent",
                "The automation should provide appropriate logging and notifications",
            ],
        ),
        RequirementType::Other(_) => (
            format!("I want to {},", requirement.description.to_lowercase()),
            benefit("improve business operations"),
            [
                "The automation should fulfil the requirement accurately",
                "The implementation should be reliable and efficient",
                "The automation should handle exceptions appropriately",
            ],
        ),
    };

    let mut text = String::new();
    writeln!(text, "As a business user,").expect("writing to a string cannot fail");
    writeln!(text, "{goal_line}").expect("writing to a string cannot fail");
    writeln!(text, "So that I can {benefit_clause}.").expect("writing to a string cannot fail");
    writeln!(text).expect("writing to a string cannot fail");
    writeln!(text, "Acceptance Criteria:").expect("writing to a string cannot fail");
    for criterion in criteria {
        writeln!(text, "- {criterion}").expect("writing to a string cannot fail");
    }
    text.trim_end().to_string()
}

/// The clause following the first occurrence of `keyword` in `text`,
/// case-insensitively, up to the next occurrence if there is one.
///
/// Returns `None` when the keyword is absent, so callers can substitute a
/// fallback phrase. The result is lower-cased and trimmed; it may be empty
/// when the text ends at the keyword.
pub(crate) fn clause_after(text: &str, keyword: &str) -> Option<String> {
    let lower = text.to_lowercase();
    lower
        .split(keyword)
        .nth(1)
        .map(|clause| clause.trim().to_string())
}

fn non_empty(text: &str) -> Option<&str> {
    if text.trim().is_empty() { None } else { Some(text) }
}
