//! Content tree layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stg_core::{DEFAULT_DESCRIPTOR_FILE, DEFAULT_METADATA_MARKER};

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_descriptor_file() -> String {
    DEFAULT_DESCRIPTOR_FILE.to_string()
}

fn default_metadata_marker() -> String {
    DEFAULT_METADATA_MARKER.to_string()
}

fn default_index_glob() -> String {
    "project_*/**/*.html".to_string()
}

fn default_ignore_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root of the content tree. Relative paths resolve against the
    /// process working directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Shared fragments directory; checked for well-formedness only.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Descriptor file name inside each project directory.
    #[serde(default = "default_descriptor_file")]
    pub descriptor_file: String,

    /// Token that opens the embedded metadata comment.
    #[serde(default = "default_metadata_marker")]
    pub metadata_marker: String,

    /// Glob (relative to `root`) selecting files for the serving index.
    #[serde(default = "default_index_glob")]
    pub index_glob: String,

    /// Directory names never descended into.
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            templates_dir: default_templates_dir(),
            descriptor_file: default_descriptor_file(),
            metadata_marker: default_metadata_marker(),
            index_glob: default_index_glob(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}
