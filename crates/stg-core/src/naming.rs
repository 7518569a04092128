//! Naming rules for project directories and stage files.
//!
//! Every function here is pure and total: a name that does not match its
//! pattern yields `None`, and the caller decides whether that is an issue.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `project_<digits>` followed by at least one `_<token>` title segment.
static PROJECT_DIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^project_(\d+)((?:_[A-Za-z0-9][A-Za-z0-9_-]*)+)$").expect("valid project regex")
});

/// `<order>_<stageId>_<title>.html`.
static STAGE_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)_(\d+)_([A-Za-z0-9_-]+)\.html$").expect("valid stage regex")
});

/// Prefix shared by every project directory candidate.
pub const PROJECT_DIR_PREFIX: &str = "project_";

/// Identifiers extracted from a valid project directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectName {
    pub id: u64,
    /// Title segment with its underscores kept, e.g. `set_up_backend`.
    pub slug: String,
}

impl ProjectName {
    /// Display identity used to group stages: `"<id>: <slug with spaces>"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.id, underscores_to_spaces(&self.slug))
    }
}

/// Identifiers extracted from a valid stage file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageName {
    pub order: u64,
    pub stage_id: u64,
    /// Title with underscores rendered as spaces.
    pub title: String,
}

impl StageName {
    /// Stage label shown in listings: `"<stageId>: <title>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}", self.stage_id, self.title)
    }
}

/// Parse a project directory name such as `project_12_intro_to_rust`.
///
/// Returns `None` for names without a title segment (`project_12`), with
/// disallowed characters, or with an ID that does not fit in a `u64`.
#[must_use]
pub fn parse_project_dir_name(name: &str) -> Option<ProjectName> {
    let caps = PROJECT_DIR_RE.captures(name)?;
    let id = caps.get(1)?.as_str().parse().ok()?;
    let slug = caps.get(2)?.as_str().trim_start_matches('_').to_string();
    Some(ProjectName { id, slug })
}

/// Parse a stage file basename such as `3_501_build_api.html`.
#[must_use]
pub fn parse_stage_file_name(file_name: &str) -> Option<StageName> {
    let caps = STAGE_FILE_RE.captures(file_name)?;
    let order = caps.get(1)?.as_str().parse().ok()?;
    let stage_id = caps.get(2)?.as_str().parse().ok()?;
    let title = underscores_to_spaces(caps.get(3)?.as_str());
    Some(StageName {
        order,
        stage_id,
        title,
    })
}

/// Whether a top-level directory name should be treated as a project.
///
/// Candidates are checked against the full naming rule later; this only
/// decides what the scanner picks up.
#[must_use]
pub fn is_project_dir_candidate(name: &str) -> bool {
    name.starts_with(PROJECT_DIR_PREFIX)
}

fn underscores_to_spaces(s: &str) -> String {
    s.replace('_', " ")
}
