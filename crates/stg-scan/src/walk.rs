//! Content tree discovery.
//!
//! Uses the `ignore` crate's walker with the standard filters turned off:
//! content trees are walked as they are on disk, minus hidden entries and the
//! configured ignore directories (`node_modules` by default).

use std::path::Path;

use globset::GlobBuilder;
use ignore::WalkBuilder;
use stg_core::naming::is_project_dir_candidate;
use stg_core::{ProjectDirectory, StageFile};

use crate::error::ScanError;

/// Everything the validation passes look at, in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTree {
    /// Top-level `project_*` directories, valid names or not.
    pub projects: Vec<ProjectDirectory>,
    /// `*.html` files directly inside a project directory.
    pub stages: Vec<StageFile>,
    /// `*.html` files anywhere beneath the templates directory.
    pub templates: Vec<String>,
}

/// Build a walker over `root` that skips hidden entries and `ignore_dirs`.
///
/// The root itself is always walked, even when its own name is hidden.
pub fn build_walker(root: &Path, ignore_dirs: &[String]) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);

    let ignore_dirs = ignore_dirs.to_vec();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && ignore_dirs.iter().any(|ignored| name == ignored.as_str()))
    });

    builder
}

/// Discover project directories, stage files, and templates under `root`.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if `root` is not a readable directory and
/// [`ScanError::Walk`] if traversal fails.
pub fn discover_tree(
    root: &Path,
    templates_dir: &str,
    ignore_dirs: &[String],
) -> Result<ContentTree, ScanError> {
    ensure_dir(root)?;
    let mut tree = ContentTree::default();

    let walker = build_walker(root, ignore_dirs).max_depth(Some(2)).build();
    for entry in walker {
        let entry = entry.map_err(|e: ignore::Error| ScanError::Walk(e.to_string()))?;
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        let name = entry.file_name().to_string_lossy();

        match entry.depth() {
            1 if is_dir && is_project_candidate(&name, templates_dir) => {
                tree.projects.push(ProjectDirectory::new(name.to_string()));
            }
            2 if !is_dir && is_html(entry.path()) => {
                let in_project = entry
                    .path()
                    .parent()
                    .and_then(Path::file_name)
                    .is_some_and(|parent| {
                        is_project_candidate(&parent.to_string_lossy(), templates_dir)
                    });
                if in_project {
                    tree.stages.push(StageFile::new(relative_path(root, entry.path())));
                }
            }
            _ => {}
        }
    }

    let templates_root = root.join(templates_dir);
    if templates_root.is_dir() {
        for entry in build_walker(&templates_root, ignore_dirs).build() {
            let entry = entry.map_err(|e: ignore::Error| ScanError::Walk(e.to_string()))?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && is_html(entry.path()) {
                tree.templates.push(relative_path(root, entry.path()));
            }
        }
    }

    tree.projects.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    tree.stages.sort_by(|a, b| a.path.cmp(&b.path));
    tree.templates.sort();

    tracing::debug!(
        projects = tree.projects.len(),
        stages = tree.stages.len(),
        templates = tree.templates.len(),
        "discovered content tree"
    );

    Ok(tree)
}

/// Root-relative paths of every file matching `glob`, sorted.
///
/// `*` does not cross `/`; `**` spans any number of directories.
///
/// # Errors
///
/// Returns [`ScanError::Glob`] for an invalid glob and [`ScanError::Walk`]
/// if traversal fails.
pub fn index_candidates(
    root: &Path,
    glob: &str,
    ignore_dirs: &[String],
) -> Result<Vec<String>, ScanError> {
    let matcher = GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|e| ScanError::Glob {
            glob: glob.to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();
    ensure_dir(root)?;

    let mut paths = Vec::new();
    for entry in build_walker(root, ignore_dirs).build() {
        let entry = entry.map_err(|e: ignore::Error| ScanError::Walk(e.to_string()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let relative = relative_path(root, entry.path());
        if matcher.is_match(&relative) {
            paths.push(relative);
        }
    }

    paths.sort();
    Ok(paths)
}

/// `/`-separated path of `path` relative to `root`.
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn ensure_dir(root: &Path) -> Result<(), ScanError> {
    std::fs::read_dir(root)
        .map(drop)
        .map_err(|e| ScanError::io(root, e))
}

fn is_project_candidate(name: &str, templates_dir: &str) -> bool {
    name != templates_dir && is_project_dir_candidate(name)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_fixture(dir: &Path) {
        for sub in [
            "project_1_setup",
            "project_2_deploy/assets",
            "project_12",
            "templates/partials",
            "node_modules/project_9_vendor",
            ".cache/project_8_hidden",
            "docs",
        ] {
            fs::create_dir_all(dir.join(sub)).unwrap();
        }

        for file in [
            "project_1_setup/1_101_intro.html",
            "project_1_setup/2_102_next.html",
            "project_1_setup/project.json",
            "project_1_setup/notes.md",
            "project_2_deploy/1_201_ship.html",
            "project_2_deploy/assets/diagram.html",
            "project_12/bad name.html",
            "templates/header.html",
            "templates/partials/footer.html",
            "node_modules/project_9_vendor/1_901_x.html",
            ".cache/project_8_hidden/1_801_x.html",
            "docs/1_1_readme.html",
            "index.html",
        ] {
            fs::write(dir.join(file), "<p>x</p>").unwrap();
        }
    }

    #[test]
    fn discovers_projects_stages_and_templates() {
        let dir = tempfile::TempDir::new().unwrap();
        create_fixture(dir.path());

        let tree = discover_tree(dir.path(), "templates", &["node_modules".to_string()]).unwrap();

        let projects: Vec<_> = tree.projects.iter().map(|p| p.dir_name.as_str()).collect();
        assert_eq!(projects, vec!["project_12", "project_1_setup", "project_2_deploy"]);

        let stages: Vec<_> = tree.stages.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(
            stages,
            vec![
                "project_12/bad name.html",
                "project_1_setup/1_101_intro.html",
                "project_1_setup/2_102_next.html",
                "project_2_deploy/1_201_ship.html",
            ]
        );

        assert_eq!(
            tree.templates,
            vec!["templates/header.html", "templates/partials/footer.html"]
        );
    }

    #[test]
    fn index_glob_matches_nested_files_but_skips_ignored_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        create_fixture(dir.path());

        let paths = index_candidates(
            dir.path(),
            "project_*/**/*.html",
            &["node_modules".to_string()],
        )
        .unwrap();

        assert_eq!(
            paths,
            vec![
                "project_12/bad name.html",
                "project_1_setup/1_101_intro.html",
                "project_1_setup/2_102_next.html",
                "project_2_deploy/1_201_ship.html",
                "project_2_deploy/assets/diagram.html",
            ]
        );
    }

    #[test]
    fn invalid_glob_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let error = index_candidates(dir.path(), "project_[", &[]).unwrap_err();
        assert!(matches!(error, ScanError::Glob { .. }));
    }

    #[test]
    fn missing_templates_dir_is_fine() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("project_1_setup")).unwrap();
        let tree = discover_tree(dir.path(), "templates", &[]).unwrap();
        assert!(tree.templates.is_empty());
        assert_eq!(tree.projects.len(), 1);
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/content");
        assert_eq!(
            relative_path(root, Path::new("/content/project_1_a/1_1_b.html")),
            "project_1_a/1_1_b.html"
        );
    }
}
