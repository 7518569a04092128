//! # stg-scan
//!
//! Filesystem side of Stagecraft: discovers the content tree and runs the
//! validation passes (markup, identifiers, naming, descriptors, embedded
//! metadata), or builds the grouped serving index.
//!
//! Every call to [`ContentScanner::validate`] or
//! [`ContentScanner::build_index`] is a full, independent scan.

pub mod descriptor;
pub mod error;
pub mod markup;
pub mod metadata;
pub mod registry;
pub mod scanner;
pub mod walk;

pub use descriptor::{DescriptorOutcome, inspect_descriptor};
pub use error::ScanError;
pub use markup::{MarkupError, check_fragment};
pub use metadata::{EmbeddedMetadata, MetadataExtractor, metadata_issue};
pub use registry::{IdentityRegistry, attribute_duplicate};
pub use scanner::{ContentScanner, ScanOptions};
pub use walk::ContentTree;
