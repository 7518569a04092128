//! Validation behavior switches.

use serde::{Deserialize, Serialize};
use stg_core::DuplicateAttribution;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Which paths a duplicate stage ID is attributed to.
    #[serde(default)]
    pub duplicate_attribution: DuplicateAttribution,

    /// Report an unparseable metadata payload as invalid metadata instead of
    /// folding it into "missing metadata".
    #[serde(default)]
    pub distinguish_malformed_metadata: bool,
}
