//! Embedded stage metadata extraction.
//!
//! Stage documents carry one comment of the shape
//! `<!-- METADATA { ...json... } -->`. The payload may span lines.

use regex::Regex;
use serde_json::{Map, Value};
use stg_core::stage::missing_metadata_fields;
use stg_core::{ContentIssue, MetadataProblem};

/// Result of looking for the metadata block in one document.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedMetadata {
    /// Marker found and the payload parsed as a JSON object.
    Valid(Map<String, Value>),
    /// Marker found but the payload is not valid JSON.
    Malformed(String),
    /// No marker comment in the document.
    Absent,
}

impl EmbeddedMetadata {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Valid(object) => Some(object),
            Self::Malformed(_) | Self::Absent => None,
        }
    }
}

/// Finds and parses the metadata comment for a fixed marker token.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    pattern: Regex,
}

impl MetadataExtractor {
    /// Build an extractor for `marker`. The marker is matched literally and,
    /// when it ends in a word character, only as a whole word.
    ///
    /// # Panics
    ///
    /// Never in practice: the marker is escaped before it is spliced into the
    /// pattern, so the resulting regex is always valid.
    #[must_use]
    pub fn new(marker: &str) -> Self {
        let boundary = if marker.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
            r"\b"
        } else {
            ""
        };
        let pattern = format!(r"(?s)<!--\s*{}{boundary}(.*?)-->", regex::escape(marker));
        Self {
            pattern: Regex::new(&pattern).expect("escaped marker yields a valid regex"),
        }
    }

    /// Extract the first metadata block from `document`.
    ///
    /// Everything between the marker and `-->` must be one JSON object;
    /// anything else found after the marker is [`EmbeddedMetadata::Malformed`].
    #[must_use]
    pub fn extract(&self, document: &str) -> EmbeddedMetadata {
        let Some(payload) = self
            .pattern
            .captures(document)
            .and_then(|caps| caps.get(1))
        else {
            return EmbeddedMetadata::Absent;
        };

        let payload = payload.as_str().trim();
        if payload.is_empty() {
            return EmbeddedMetadata::Malformed("empty payload".to_string());
        }

        match serde_json::from_str::<Value>(payload) {
            Ok(Value::Object(object)) => EmbeddedMetadata::Valid(object),
            Ok(_) => EmbeddedMetadata::Malformed("expected a JSON object".to_string()),
            Err(error) => EmbeddedMetadata::Malformed(error.to_string()),
        }
    }
}

/// Field-presence check for one stage document.
///
/// By default a malformed payload is folded into "missing metadata", the
/// message existing tooling expects. With `distinguish_malformed` the parse
/// error is reported as invalid metadata instead.
#[must_use]
pub fn metadata_issue(
    path: &str,
    metadata: &EmbeddedMetadata,
    distinguish_malformed: bool,
) -> Option<ContentIssue> {
    match metadata {
        EmbeddedMetadata::Absent => Some(ContentIssue::MissingMetadata {
            path: path.to_string(),
        }),
        EmbeddedMetadata::Malformed(message) if distinguish_malformed => {
            Some(ContentIssue::InvalidMetadata {
                path: path.to_string(),
                problem: MetadataProblem::Malformed {
                    message: message.clone(),
                },
            })
        }
        EmbeddedMetadata::Malformed(_) => Some(ContentIssue::MissingMetadata {
            path: path.to_string(),
        }),
        EmbeddedMetadata::Valid(object) => {
            let fields = missing_metadata_fields(object);
            if fields.is_empty() {
                None
            } else {
                Some(ContentIssue::InvalidMetadata {
                    path: path.to_string(),
                    problem: MetadataProblem::MissingFields { fields },
                })
            }
        }
    }
}
