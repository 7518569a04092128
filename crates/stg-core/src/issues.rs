//! Content issues collected during a validation scan.
//!
//! Each variant's `Display` output is the exact line printed by the CI
//! entry point, so existing tooling can match on it.

use serde::Serialize;
use thiserror::Error;

/// A content-shape problem found in the tree.
///
/// Issues are always recovered locally and aggregated into a
/// [`ValidationReport`](crate::ValidationReport); they never abort a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentIssue {
    /// A document could not be parsed as a markup fragment.
    #[error("Invalid HTML in {path}: {detail}")]
    MalformedContent { path: String, detail: String },

    #[error("Invalid project directory name: {name}")]
    InvalidProjectName { name: String },

    #[error("Invalid stage file name: {path}")]
    InvalidStageName { path: String },

    #[error("Duplicate project ID: {id}")]
    DuplicateProjectId { id: u64 },

    /// `paths` holds the occurrences attributed to the duplicate; which ones
    /// depends on the configured attribution mode.
    #[error("Duplicate stage ID {id} in files: {}", .paths.join(", "))]
    DuplicateStageId { id: u64, paths: Vec<String> },

    #[error("Missing {file} in {dir}")]
    MissingDescriptor { dir: String, file: String },

    #[error("Invalid {file} in {dir}: {problem}")]
    InvalidDescriptor {
        dir: String,
        file: String,
        problem: DescriptorProblem,
    },

    #[error("Missing metadata in {path}")]
    MissingMetadata { path: String },

    #[error("Invalid metadata in {path}: {problem}")]
    InvalidMetadata {
        path: String,
        problem: MetadataProblem,
    },
}

/// Why a descriptor failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DescriptorProblem {
    #[error("missing fields {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Not parseable, or parseable but not a JSON object.
    #[error("malformed file ({message})")]
    Malformed { message: String },
}

/// Why embedded stage metadata failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MetadataProblem {
    #[error("missing fields {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("malformed JSON ({message})")]
    Malformed { message: String },
}
