//! Knobs that select between legacy and corrected validation behavior.

use serde::{Deserialize, Serialize};

/// Which file paths a duplicate stage ID is attributed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateAttribution {
    /// Only the second and later occurrences are listed. Matches the
    /// messages existing tooling was written against.
    #[default]
    LaterOccurrences,
    /// Every occurrence is listed, the first one included.
    AllOccurrences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_legacy_attribution() {
        assert_eq!(
            DuplicateAttribution::default(),
            DuplicateAttribution::LaterOccurrences
        );
    }

    #[test]
    fn deserializes_kebab_case() {
        let mode: DuplicateAttribution = serde_json::from_str("\"all-occurrences\"").unwrap();
        assert_eq!(mode, DuplicateAttribution::AllOccurrences);
    }
}
