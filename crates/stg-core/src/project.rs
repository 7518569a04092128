//! Project directories and their `project.json` descriptors.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::naming::{ProjectName, parse_project_dir_name};

/// Keys every descriptor must carry, in the order they are reported.
pub const REQUIRED_DESCRIPTOR_FIELDS: [&str; 8] = [
    "id",
    "title",
    "description",
    "short_description",
    "categories",
    "cover_url",
    "readme",
    "ides",
];

/// Default descriptor file name inside a project directory.
pub const DEFAULT_DESCRIPTOR_FILE: &str = "project.json";

/// A project directory discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDirectory {
    /// Directory name relative to the content root, e.g. `project_1_setup`.
    pub dir_name: String,
    /// Identifiers parsed from `dir_name`; `None` when the name is invalid.
    pub name: Option<ProjectName>,
}

impl ProjectDirectory {
    #[must_use]
    pub fn new(dir_name: impl Into<String>) -> Self {
        let dir_name = dir_name.into();
        let name = parse_project_dir_name(&dir_name);
        Self { dir_name, name }
    }

    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.name.as_ref().map(|name| name.id)
    }
}

/// Required descriptor keys absent from `object`, in canonical order.
#[must_use]
pub fn missing_descriptor_fields(object: &Map<String, Value>) -> Vec<String> {
    missing_fields(object, &REQUIRED_DESCRIPTOR_FIELDS)
}

pub(crate) fn missing_fields(object: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| (*key).to_string())
        .collect()
}
