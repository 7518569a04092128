//! Serving-mode index: stages grouped by project, ordered for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stage::StageSummary;

/// All stages belonging to one project display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub name: String,
    pub stages: Vec<StageSummary>,
}

/// Projects in lexical display-name order, stages ascending by `order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectIndex {
    pub projects: Vec<ProjectGroup>,
}

impl ProjectIndex {
    /// Group summaries by project. Stage order is stable on ties, so equal
    /// `order` values keep the order in which they were discovered.
    #[must_use]
    pub fn from_summaries(summaries: impl IntoIterator<Item = StageSummary>) -> Self {
        let mut grouped: BTreeMap<String, Vec<StageSummary>> = BTreeMap::new();
        for summary in summaries {
            grouped
                .entry(summary.project.clone())
                .or_default()
                .push(summary);
        }

        let projects = grouped
            .into_iter()
            .map(|(name, mut stages)| {
                stages.sort_by_key(|stage| stage.order);
                ProjectGroup { name, stages }
            })
            .collect();

        Self { projects }
    }

    /// Every stage, project by project, in index order.
    pub fn stages(&self) -> impl Iterator<Item = &StageSummary> {
        self.projects.iter().flat_map(|group| group.stages.iter())
    }

    /// Look up one stage by its root-relative path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&StageSummary> {
        self.stages().find(|stage| stage.path == path)
    }

    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.projects.iter().map(|group| group.stages.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
