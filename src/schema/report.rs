use serde::{Deserialize, Serialize};

use super::profile::NarrativeStyleProfile;
use super::values::{ConfidenceScore, NonEmptyList};

/// Sole drift flag of a report that found nothing to fix.
pub const NO_ISSUES_FLAG: &str = "no issues detected";

/// The outcome of comparing a profile against a target envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAlignmentReport {
    pub alignment_score: ConfidenceScore,
    /// Human-readable mismatches, in rule order.
    pub drift_flags: NonEmptyList<String>,
    /// Rewrite suggestions, order-correlated with `drift_flags`.
    pub recommendations: Vec<String>,
    pub profile: NarrativeStyleProfile,
}

impl StyleAlignmentReport {
    /// True when the only flag is the "no issues" sentinel.
    pub fn is_clean(&self) -> bool {
        self.drift_flags.len() == 1 && self.drift_flags.first() == NO_ISSUES_FLAG
    }
}
