use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ProjectInfo, Requirement, RequirementType};

/// The complete input to one synthesis run: project metadata plus the
/// ordered requirement records.
///
/// Insertion order is the canonical display order and is preserved by every
/// operation; it is not necessarily a valid dependency order. The engine
/// treats a set as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Project metadata.
    #[serde(rename = "project_info", default)]
    pub project: ProjectInfo,

    /// The requirement records, in display order.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// An error encountered loading a requirement set from disk.
#[derive(Debug, Error)]
pub enum SetLoadError {
    /// The file could not be read.
    #[error("failed to read requirements file")]
    Io(#[from] std::io::Error),

    /// The file is not a valid requirement record list.
    #[error("failed to parse requirements file")]
    Parse(#[from] serde_json::Error),
}

impl RequirementSet {
    /// Loads a requirement set from a JSON record file, as produced by the
    /// upstream extraction stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON in
    /// the expected shape.
    pub fn load(path: &Path) -> Result<Self, SetLoadError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The number of requirements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the set contains no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Iterates over the requirements in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    /// Requirements of the given kind, preserving display order.
    pub fn of_kind<'a>(
        &'a self,
        kind: &'a RequirementType,
    ) -> impl Iterator<Item = &'a Requirement> {
        self.requirements.iter().filter(move |r| r.kind == *kind)
    }
}
