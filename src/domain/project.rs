use serde::{Deserialize, Serialize};

/// Project metadata attached to a requirement set.
///
/// Immutable for the duration of a synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// The project name.
    #[serde(default)]
    pub name: String,

    /// A free-text description of the project.
    #[serde(default)]
    pub description: String,

    /// The project version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::ProjectInfo;

    #[test]
    fn version_defaults_when_absent() {
        let project: ProjectInfo =
            serde_json::from_str(r#"{"name": "Invoicing", "description": "automate invoicing"}"#)
                .unwrap();
        assert_eq!(project.version, "1.0.0");
    }

    #[test]
    fn empty_record_deserializes() {
        let project: ProjectInfo = serde_json::from_str("{}").unwrap();
        assert!(project.name.is_empty());
        assert_eq!(project.version, "1.0.0");
    }
}
