//! Project descriptor loading and presence checks.

use std::path::Path;

use serde_json::{Map, Value};
use stg_core::project::missing_descriptor_fields;
use stg_core::{ContentIssue, DescriptorProblem};

use crate::error::ScanError;

/// What was found at a project's descriptor path.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorOutcome {
    /// Parsed object carrying every required key.
    Valid(Map<String, Value>),
    /// No descriptor file.
    Missing,
    /// Not valid JSON, or valid JSON that is not an object.
    Malformed(String),
    /// Parsed object lacking the listed keys.
    Incomplete(Vec<String>),
}

impl DescriptorOutcome {
    /// Classify descriptor text. Values are never type-checked.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => {
                let missing = missing_descriptor_fields(&object);
                if missing.is_empty() {
                    Self::Valid(object)
                } else {
                    Self::Incomplete(missing)
                }
            }
            Ok(_) => Self::Malformed("expected a JSON object".to_string()),
            Err(error) => Self::Malformed(error.to_string()),
        }
    }

    /// Turn the outcome into a report entry, if it is one.
    #[must_use]
    pub fn into_issue(self, dir_name: &str, file_name: &str) -> Option<ContentIssue> {
        let problem = match self {
            Self::Valid(_) => return None,
            Self::Missing => {
                return Some(ContentIssue::MissingDescriptor {
                    dir: dir_name.to_string(),
                    file: file_name.to_string(),
                });
            }
            Self::Malformed(message) => DescriptorProblem::Malformed { message },
            Self::Incomplete(fields) => DescriptorProblem::MissingFields { fields },
        };

        Some(ContentIssue::InvalidDescriptor {
            dir: dir_name.to_string(),
            file: file_name.to_string(),
            problem,
        })
    }
}

/// Load `<project_dir>/<file_name>` and classify it.
///
/// # Errors
///
/// Returns [`ScanError::Io`] when the file exists but cannot be read.
pub fn inspect_descriptor(
    project_dir: &Path,
    file_name: &str,
) -> Result<DescriptorOutcome, ScanError> {
    let path = project_dir.join(file_name);
    match std::fs::read(&path) {
        Ok(bytes) => Ok(String::from_utf8(bytes).map_or_else(
            |error| DescriptorOutcome::Malformed(error.to_string()),
            |text| DescriptorOutcome::from_text(&text),
        )),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Ok(DescriptorOutcome::Missing)
        }
        Err(error) => Err(ScanError::io(path, error)),
    }
}
