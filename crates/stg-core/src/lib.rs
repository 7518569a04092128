//! # stg-core
//!
//! Content model for Stagecraft: naming rules for project directories and
//! stage files, the descriptor and metadata shapes, the content issue
//! taxonomy, and the grouped index served to clients.
//!
//! Everything here is pure. Filesystem access lives in `stg-scan`.

pub mod index;
pub mod issues;
pub mod naming;
pub mod policy;
pub mod project;
pub mod report;
pub mod stage;

pub use index::{ProjectGroup, ProjectIndex};
pub use issues::{ContentIssue, DescriptorProblem, MetadataProblem};
pub use naming::{ProjectName, StageName, parse_project_dir_name, parse_stage_file_name};
pub use policy::DuplicateAttribution;
pub use project::{DEFAULT_DESCRIPTOR_FILE, ProjectDirectory, REQUIRED_DESCRIPTOR_FIELDS};
pub use report::ValidationReport;
pub use stage::{DEFAULT_METADATA_MARKER, REQUIRED_METADATA_FIELDS, StageFile, StageSummary};
