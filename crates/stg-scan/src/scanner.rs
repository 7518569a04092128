//! The content scanner: one full pass over the tree per call.
//!
//! Validation runs six independent passes and collects every issue; an
//! early failure never hides a later one. Indexing is lenient and silently
//! drops anything that does not name a stage inside a project.

use std::path::{Component, Path, PathBuf};

use stg_config::StagecraftConfig;
use stg_core::{
    ContentIssue, DuplicateAttribution, ProjectIndex, StageSummary, ValidationReport,
    parse_project_dir_name, parse_stage_file_name,
};

use crate::descriptor::inspect_descriptor;
use crate::error::ScanError;
use crate::markup::check_fragment;
use crate::metadata::{EmbeddedMetadata, MetadataExtractor, metadata_issue};
use crate::registry::{project_id_issues, stage_id_issues};
use crate::walk::{ContentTree, discover_tree, index_candidates};

/// Tree layout and behavior switches for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub templates_dir: String,
    pub descriptor_file: String,
    pub metadata_marker: String,
    pub index_glob: String,
    pub ignore_dirs: Vec<String>,
    pub duplicate_attribution: DuplicateAttribution,
    pub distinguish_malformed_metadata: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&StagecraftConfig::default())
    }
}

impl From<&StagecraftConfig> for ScanOptions {
    fn from(config: &StagecraftConfig) -> Self {
        Self {
            templates_dir: config.content.templates_dir.clone(),
            descriptor_file: config.content.descriptor_file.clone(),
            metadata_marker: config.content.metadata_marker.clone(),
            index_glob: config.content.index_glob.clone(),
            ignore_dirs: config.content.ignore_dirs.clone(),
            duplicate_attribution: config.validation.duplicate_attribution,
            distinguish_malformed_metadata: config.validation.distinguish_malformed_metadata,
        }
    }
}

/// A document loaded once and shared by every pass that reads it.
struct Document {
    path: String,
    text: String,
    utf8_error: Option<String>,
}

pub struct ContentScanner {
    root: PathBuf,
    options: ScanOptions,
    extractor: MetadataExtractor,
}

impl ContentScanner {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        let extractor = MetadataExtractor::new(&options.metadata_marker);
        Self {
            root: root.into(),
            options,
            extractor,
        }
    }

    /// Scanner over `config.content.root` with options taken from `config`.
    #[must_use]
    pub fn from_config(config: &StagecraftConfig) -> Self {
        Self::new(config.content.root.clone(), ScanOptions::from(config))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Discover the candidate paths every validation pass works from.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the tree cannot be walked.
    pub fn discover(&self) -> Result<ContentTree, ScanError> {
        discover_tree(
            &self.root,
            &self.options.templates_dir,
            &self.options.ignore_dirs,
        )
    }

    /// Run every validation pass and collect the issues.
    ///
    /// Passes, in report order: markup well-formedness, project-ID
    /// uniqueness, stage-ID uniqueness, naming rules, descriptors, embedded
    /// metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] when the tree cannot be walked or a file cannot
    /// be read. Content problems never produce an error.
    pub fn validate(&self) -> Result<ValidationReport, ScanError> {
        let tree = self.discover()?;
        let stage_docs = tree
            .stages
            .iter()
            .map(|stage| self.read_document(&stage.path))
            .collect::<Result<Vec<_>, _>>()?;
        let template_docs = tree
            .templates
            .iter()
            .map(|path| self.read_document(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = ValidationReport {
            projects_checked: tree.projects.len(),
            stages_checked: tree.stages.len(),
            templates_checked: tree.templates.len(),
            issues: Vec::new(),
        };

        report.extend(
            stage_docs
                .iter()
                .chain(template_docs.iter())
                .filter_map(markup_issue),
        );
        tracing::debug!(issues = report.issue_count(), "markup pass done");

        report.extend(project_id_issues(&tree.projects));
        report.extend(stage_id_issues(
            &tree.stages,
            self.options.duplicate_attribution,
        ));
        tracing::debug!(issues = report.issue_count(), "identity passes done");

        report.extend(naming_issues(&tree));
        tracing::debug!(issues = report.issue_count(), "naming pass done");

        for project in &tree.projects {
            let project_dir = self.root.join(&project.dir_name);
            let outcome = inspect_descriptor(&project_dir, &self.options.descriptor_file)?;
            report.extend(outcome.into_issue(&project.dir_name, &self.options.descriptor_file));
        }
        tracing::debug!(issues = report.issue_count(), "descriptor pass done");

        for doc in &stage_docs {
            let metadata = self.extractor.extract(&doc.text);
            report.extend(metadata_issue(
                &doc.path,
                &metadata,
                self.options.distinguish_malformed_metadata,
            ));
        }

        tracing::info!(
            projects = report.projects_checked,
            stages = report.stages_checked,
            templates = report.templates_checked,
            issues = report.issue_count(),
            "validation scan complete"
        );

        Ok(report)
    }

    /// Build the serving index from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the tree cannot be walked.
    pub fn build_index(&self) -> Result<ProjectIndex, ScanError> {
        let paths = index_candidates(
            &self.root,
            &self.options.index_glob,
            &self.options.ignore_dirs,
        )?;

        let summaries: Vec<_> = paths.iter().filter_map(|path| summarize(path)).collect();
        tracing::info!(
            candidates = paths.len(),
            stages = summaries.len(),
            "indexed stage files"
        );

        Ok(ProjectIndex::from_summaries(summaries))
    }

    /// Look up one stage by root-relative path with a fresh scan.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the tree cannot be walked.
    pub fn find_stage(&self, path: &str) -> Result<Option<StageSummary>, ScanError> {
        Ok(self.build_index()?.find(path).cloned())
    }

    /// Embedded metadata of one stage document.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the path escapes the root or cannot be read.
    pub fn stage_metadata(&self, path: &str) -> Result<EmbeddedMetadata, ScanError> {
        let text = self.read_content(path)?;
        Ok(self.extractor.extract(&text))
    }

    /// Raw text of a file inside the content root.
    ///
    /// Only relative paths without `..` components are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::OutsideRoot`] for rejected paths and
    /// [`ScanError::Io`] when the file cannot be read.
    pub fn read_content(&self, requested: &str) -> Result<String, ScanError> {
        let path = self.resolve(requested)?;
        std::fs::read_to_string(&path).map_err(|e| ScanError::io(path, e))
    }

    fn resolve(&self, requested: &str) -> Result<PathBuf, ScanError> {
        let relative = Path::new(requested);
        let confined = !requested.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if confined {
            Ok(self.root.join(relative))
        } else {
            Err(ScanError::OutsideRoot(requested.to_string()))
        }
    }

    fn read_document(&self, path: &str) -> Result<Document, ScanError> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|e| ScanError::io(full, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => Document {
                path: path.to_string(),
                text,
                utf8_error: None,
            },
            Err(error) => Document {
                path: path.to_string(),
                text: String::from_utf8_lossy(error.as_bytes()).into_owned(),
                utf8_error: Some(error.utf8_error().to_string()),
            },
        })
    }
}

fn markup_issue(doc: &Document) -> Option<ContentIssue> {
    let detail = match &doc.utf8_error {
        Some(error) => format!("not valid UTF-8 ({error})"),
        None => check_fragment(&doc.text).err()?.to_string(),
    };
    Some(ContentIssue::MalformedContent {
        path: doc.path.clone(),
        detail,
    })
}

fn naming_issues(tree: &ContentTree) -> Vec<ContentIssue> {
    let projects = tree
        .projects
        .iter()
        .filter(|project| project.name.is_none())
        .map(|project| ContentIssue::InvalidProjectName {
            name: project.dir_name.clone(),
        });
    let stages = tree
        .stages
        .iter()
        .filter(|stage| stage.name.is_none())
        .map(|stage| ContentIssue::InvalidStageName {
            path: stage.path.clone(),
        });
    projects.chain(stages).collect()
}

/// Summary for one index candidate, or `None` if either the file name or its
/// parent directory name does not follow the naming rules.
fn summarize(path: &str) -> Option<StageSummary> {
    let mut segments = path.rsplit('/');
    let stage = parse_stage_file_name(segments.next()?)?;
    let project = parse_project_dir_name(segments.next()?)?;
    Some(StageSummary::new(path, &project, &stage))
}
