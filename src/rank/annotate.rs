//! Snapshot annotation and per-bucket counts.

use crate::queue::Encounter;
use crate::scoring::{triage_score, Priority, ScoringConfig};

/// An encounter enriched with its derived urgency fields.
///
/// Produced fresh on every pass; never written back to the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotated {
    pub encounter: Encounter,
    pub score: u8,
    pub priority: Priority,
}

impl Annotated {
    pub fn id(&self) -> &str {
        &self.encounter.id
    }
}

/// Scores and buckets every encounter in a snapshot.
///
/// Output order matches input order; ordering by urgency is the
/// ranker's job. The input is borrowed immutably and each output value
/// carries its own clone, so the source queue is untouched. Pure and
/// deterministic: two calls over the same snapshot yield identical
/// results.
pub fn annotate(snapshot: &[Encounter], config: &ScoringConfig) -> Vec<Annotated> {
    snapshot
        .iter()
        .map(|encounter| {
            let score = triage_score(encounter, config);
            Annotated {
                encounter: encounter.clone(),
                score,
                priority: Priority::from_score(score),
            }
        })
        .collect()
}

/// Encounter counts per priority bucket.
///
/// Buckets with no encounters report 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrioritySummary {
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
}

impl PrioritySummary {
    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Red => self.red,
            Priority::Yellow => self.yellow,
            Priority::Green => self.green,
        }
    }

    pub fn total(&self) -> usize {
        self.red + self.yellow + self.green
    }
}

/// Counts annotated encounters per bucket.
pub fn summarize(annotated: &[Annotated]) -> PrioritySummary {
    let mut summary = PrioritySummary::default();
    for a in annotated {
        match a.priority {
            Priority::Red => summary.red += 1,
            Priority::Yellow => summary.yellow += 1,
            Priority::Green => summary.green += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use crate::queue::seed_roster;

    use super::*;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_annotate_preserves_order_and_fields() {
        let snapshot = seed_roster();
        let annotated = annotate(&snapshot, &config());
        assert_eq!(annotated.len(), snapshot.len());
        for (a, e) in annotated.iter().zip(&snapshot) {
            assert_eq!(&a.encounter, e);
        }
    }

    #[test]
    fn test_annotate_does_not_mutate_input() {
        let snapshot = seed_roster();
        let before = snapshot.clone();
        let _ = annotate(&snapshot, &config());
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_annotate_idempotent() {
        let snapshot = seed_roster();
        let first = annotate(&snapshot, &config());
        let second = annotate(&snapshot, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_annotate_scenario_red() {
        // age 72, sbp 86, chest pain, wait 5 → 2+3+2+1 = 8 → RED
        let snapshot = vec![Encounter::new("E001", 72, 118, 86, "chest pain", 5)];
        let annotated = annotate(&snapshot, &config());
        assert_eq!(annotated[0].score, 8);
        assert_eq!(annotated[0].priority, Priority::Red);
    }

    #[test]
    fn test_annotate_scenario_green() {
        let snapshot = vec![Encounter::new("E002", 34, 92, 122, "headache", 12)];
        let annotated = annotate(&snapshot, &config());
        assert_eq!(annotated[0].score, 0);
        assert_eq!(annotated[0].priority, Priority::Green);
    }

    #[test]
    fn test_annotate_empty() {
        assert!(annotate(&[], &config()).is_empty());
    }

    // ---- summarize ----

    #[test]
    fn test_summarize_counts() {
        let annotated = annotate(&seed_roster(), &config());
        let summary = summarize(&annotated);
        assert_eq!(summary.total(), 6);
        for a in &annotated {
            assert!(summary.count(a.priority) > 0);
        }
    }

    #[test]
    fn test_summarize_empty_has_zero_buckets() {
        let summary = summarize(&[]);
        assert_eq!(summary.red, 0);
        assert_eq!(summary.yellow, 0);
        assert_eq!(summary.green, 0);
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_summarize_single_bucket() {
        let snapshot = vec![
            Encounter::new("A", 20, 70, 120, "rash", 30),
            Encounter::new("B", 25, 75, 130, "cough", 45),
        ];
        let summary = summarize(&annotate(&snapshot, &config()));
        assert_eq!(summary.green, 2);
        assert_eq!(summary.red, 0);
        assert_eq!(summary.yellow, 0);
    }
}
