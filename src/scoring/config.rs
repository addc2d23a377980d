//! Scoring configuration.
//!
//! [`ScoringConfig`] holds the set of chief-complaint labels treated as
//! high-risk. It is process-wide static configuration: loaded once at
//! startup and passed by reference into every scoring pass.

use std::collections::HashSet;

/// Configuration for the triage scoring rule.
///
/// The only tunable input is the high-risk complaint set; the clause
/// weights and thresholds themselves are fixed (see
/// [`triage_score`](crate::scoring::triage_score)). Matching against
/// the set is exact and case-sensitive.
///
/// # Defaults
///
/// ```
/// use triage_queue::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert!(config.is_high_risk("chest pain"));
/// assert!(!config.is_high_risk("Chest Pain")); // case-sensitive
/// ```
///
/// # Builder Pattern
///
/// ```
/// use triage_queue::scoring::ScoringConfig;
///
/// let config = ScoringConfig::empty()
///     .with_high_risk_complaint("chest pain")
///     .with_high_risk_complaint("syncope");
/// assert_eq!(config.high_risk_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// Chief-complaint labels that add the high-risk weight to a score.
    high_risk_complaints: HashSet<String>,
}

impl Default for ScoringConfig {
    /// The standard high-risk set: chest pain, shortness of breath,
    /// stroke symptoms.
    fn default() -> Self {
        Self {
            high_risk_complaints: ["chest pain", "shortness of breath", "stroke symptoms"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ScoringConfig {
    /// Creates a configuration with no high-risk complaints.
    pub fn empty() -> Self {
        Self {
            high_risk_complaints: HashSet::new(),
        }
    }

    /// Adds a single high-risk complaint label.
    pub fn with_high_risk_complaint(mut self, label: impl Into<String>) -> Self {
        self.high_risk_complaints.insert(label.into());
        self
    }

    /// Replaces the high-risk set with the given labels.
    pub fn with_high_risk_complaints<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.high_risk_complaints = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the given chief complaint is in the high-risk set.
    ///
    /// Exact match, case-sensitive as configured.
    pub fn is_high_risk(&self, chief_complaint: &str) -> bool {
        self.high_risk_complaints.contains(chief_complaint)
    }

    /// Number of configured high-risk labels.
    pub fn high_risk_count(&self) -> usize {
        self.high_risk_complaints.len()
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any label is invalid.
    pub fn validate(&self) -> Result<(), String> {
        for label in &self.high_risk_complaints {
            if label.trim().is_empty() {
                return Err("high-risk complaint labels must be non-blank".into());
            }
        }
        Ok(())
    }
}
