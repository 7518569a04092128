//! Stage documents, their embedded metadata, and indexed summaries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::naming::{ProjectName, StageName, parse_stage_file_name};
use crate::project::missing_fields;

/// Keys the embedded metadata object must carry, in reporting order.
pub const REQUIRED_METADATA_FIELDS: [&str; 3] = ["id", "title", "next_button_title"];

/// Default marker token identifying the metadata comment.
pub const DEFAULT_METADATA_MARKER: &str = "METADATA";

/// A stage document discovered inside a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageFile {
    /// Path relative to the content root, `/`-separated.
    pub path: String,
    /// Identifiers parsed from the basename; `None` when the name is invalid.
    pub name: Option<StageName>,
}

impl StageFile {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .rsplit('/')
            .next()
            .and_then(parse_stage_file_name);
        Self { path, name }
    }

    #[must_use]
    pub fn stage_id(&self) -> Option<u64> {
        self.name.as_ref().map(|name| name.stage_id)
    }
}

/// Required metadata keys absent from `object`, in canonical order.
///
/// Only presence is checked. The `id` value is never compared with the
/// stage ID in the file name.
#[must_use]
pub fn missing_metadata_fields(object: &Map<String, Value>) -> Vec<String> {
    missing_fields(object, &REQUIRED_METADATA_FIELDS)
}

/// One entry of the serving-mode index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    /// Path relative to the content root, `/`-separated.
    pub path: String,
    /// Owning project display name, e.g. `1: setup`.
    pub project: String,
    /// Stage label, e.g. `501: build api`.
    pub stage: String,
    pub order: u64,
    pub title: String,
}

impl StageSummary {
    #[must_use]
    pub fn new(path: impl Into<String>, project: &ProjectName, stage: &StageName) -> Self {
        Self {
            path: path.into(),
            project: project.display_name(),
            stage: stage.label(),
            order: stage.order,
            title: stage.title.clone(),
        }
    }
}
