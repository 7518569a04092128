//! Scan-scoped identity registries for project and stage IDs.
//!
//! A registry is built fresh for every scan and dropped with it, so
//! repeated scans never see each other's IDs.

use std::collections::{BTreeMap, HashMap};

use stg_core::{ContentIssue, DuplicateAttribution, ProjectDirectory, StageFile};

/// One ID space with duplicate tracking.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    /// First path seen for each ID.
    first_seen: HashMap<u64, String>,
    /// Paths of the second and later occurrences, per duplicated ID.
    repeats: BTreeMap<u64, Vec<String>>,
}

impl IdentityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `id` found at `path`.
    pub fn record(&mut self, id: u64, path: &str) {
        if self.first_seen.contains_key(&id) {
            self.repeats.entry(id).or_default().push(path.to_string());
        } else {
            self.first_seen.insert(id, path.to_string());
        }
    }

    /// Duplicated IDs in ascending order.
    pub fn duplicate_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.repeats.keys().copied()
    }

    /// Paths a duplicated ID is attributed to, or `None` if `id` is unique.
    #[must_use]
    pub fn offending_paths(&self, id: u64, mode: DuplicateAttribution) -> Option<Vec<String>> {
        let later = self.repeats.get(&id)?;
        let first = self.first_seen.get(&id).map(String::as_str);
        Some(attribute_duplicate(first, later, mode))
    }
}

/// Decide which occurrences of a duplicate are named in the report.
///
/// The legacy behavior lists only the repeats and drops the first path.
pub fn attribute_duplicate(
    first: Option<&str>,
    later: &[String],
    mode: DuplicateAttribution,
) -> Vec<String> {
    match (mode, first) {
        (DuplicateAttribution::AllOccurrences, Some(first)) => std::iter::once(first.to_string())
            .chain(later.iter().cloned())
            .collect(),
        _ => later.to_vec(),
    }
}

/// Register every parseable project ID and report the duplicates.
///
/// Directories whose name does not parse are skipped; the naming pass
/// reports them.
pub fn project_id_issues(projects: &[ProjectDirectory]) -> Vec<ContentIssue> {
    let mut registry = IdentityRegistry::new();
    for project in projects {
        if let Some(id) = project.id() {
            registry.record(id, &project.dir_name);
        }
    }

    registry
        .duplicate_ids()
        .map(|id| ContentIssue::DuplicateProjectId { id })
        .collect()
}

/// Register every parseable stage ID across the whole tree and report the
/// duplicates with their attributed paths.
pub fn stage_id_issues(stages: &[StageFile], mode: DuplicateAttribution) -> Vec<ContentIssue> {
    let mut registry = IdentityRegistry::new();
    for stage in stages {
        if let Some(id) = stage.stage_id() {
            registry.record(id, &stage.path);
        }
    }

    registry
        .duplicate_ids()
        .filter_map(|id| {
            registry
                .offending_paths(id, mode)
                .map(|paths| ContentIssue::DuplicateStageId { id, paths })
        })
        .collect()
}
