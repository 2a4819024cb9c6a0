use std::fmt;

use serde::{Deserialize, Serialize};

/// The classification of a requirement.
///
/// Four kinds are recognised and drive grouping and narrative phrasing;
/// anything else is preserved verbatim as [`RequirementType::Other`] rather
/// than rejected, since upstream extraction is free to invent categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementType {
    /// Extracting data from documents or other sources.
    DataExtraction,
    /// Validating and transforming extracted data.
    DataProcessing,
    /// Exchanging data with external systems.
    SystemIntegration,
    /// Orchestrating an end-to-end business process.
    ProcessAutomation,
    /// Any other free-text category.
    Other(String),
}

impl RequirementType {
    /// The four recognised kinds, in canonical display order.
    pub const CANONICAL: [Self; 4] = [
        Self::DataExtraction,
        Self::DataProcessing,
        Self::SystemIntegration,
        Self::ProcessAutomation,
    ];

    /// A human-readable name, e.g. `Data Extraction`.
    #[must_use]
    pub fn display_name(&self) -> String {
        title_case(&self.to_string())
    }
}

impl Default for RequirementType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for RequirementType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "data_extraction" => Self::DataExtraction,
            "data_processing" => Self::DataProcessing,
            "system_integration" => Self::SystemIntegration,
            "process_automation" => Self::ProcessAutomation,
            _ => Self::Other(value),
        }
    }
}

impl From<RequirementType> for String {
    fn from(value: RequirementType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataExtraction => f.write_str("data_extraction"),
            Self::DataProcessing => f.write_str("data_processing"),
            Self::SystemIntegration => f.write_str("system_integration"),
            Self::ProcessAutomation => f.write_str("process_automation"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// The priority of a requirement.
///
/// Free-text priorities are preserved as [`Priority::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
    /// Any other free-text priority.
    Other(String),
}

impl Default for Priority {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Medium => f.write_str("medium"),
            Self::High => f.write_str("high"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

/// A single extracted business requirement.
///
/// Requirements are owned by the upstream extraction stage; the engine only
/// ever reads them. The `id` is an opaque caller-supplied string, unique
/// within a run, used as the graph node key and as a cross-reference target
/// in `dependencies`. A dependency id with no matching record in the same
/// run is tolerated everywhere (see the graph builder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Identifier, unique within one requirement set.
    pub id: String,

    /// The requirement classification.
    #[serde(rename = "type", default)]
    pub kind: RequirementType,

    /// Short description of the requirement.
    #[serde(default)]
    pub description: String,

    /// Longer free-text detail.
    #[serde(default)]
    pub details: String,

    /// Priority assigned by the upstream extractor.
    #[serde(default)]
    pub priority: Priority,

    /// Ordered ids of requirements this one depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Render a wire-format name (`data_extraction`) as a title (`Data
/// Extraction`).
fn title_case(wire: &str) -> String {
    wire.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{Priority, Requirement, RequirementType};

    #[test]
    fn canonical_kinds_round_trip() {
        for kind in RequirementType::CANONICAL {
            let wire = kind.to_string();
            assert_eq!(RequirementType::from(wire), kind);
        }
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let kind = RequirementType::from("reporting".to_string());
        assert_eq!(kind, RequirementType::Other("reporting".to_string()));
        assert_eq!(kind.to_string(), "reporting");
    }

    #[test]
    fn display_names() {
        assert_eq!(
            RequirementType::DataExtraction.display_name(),
            "Data Extraction"
        );
        assert_eq!(
            RequirementType::Other("reporting".to_string()).display_name(),
            "Reporting"
        );
    }

    #[test]
    fn deserializes_from_record() {
        let requirement: Requirement = serde_json::from_str(
            r#"{
                "id": "REQ-001",
                "type": "data_extraction",
                "description": "Extract data from invoices",
                "details": "The bot should extract all invoice fields",
                "priority": "high",
                "dependencies": []
            }"#,
        )
        .unwrap();

        assert_eq!(requirement.id, "REQ-001");
        assert_eq!(requirement.kind, RequirementType::DataExtraction);
        assert_eq!(requirement.priority, Priority::High);
        assert!(requirement.dependencies.is_empty());
    }

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let requirement: Requirement = serde_json::from_str(r#"{"id": "REQ-007"}"#).unwrap();
        assert_eq!(requirement.kind, RequirementType::Other(String::new()));
        assert_eq!(requirement.priority, Priority::Other(String::new()));
        assert!(requirement.description.is_empty());
    }

    #[test]
    fn serializes_kind_to_wire_name() {
        let requirement = Requirement {
            id: "REQ-001".to_string(),
            kind: RequirementType::ProcessAutomation,
            ..Requirement::default()
        };
        let json = serde_json::to_value(&requirement).unwrap();
        assert_eq!(json["type"], "process_automation");
    }
}
