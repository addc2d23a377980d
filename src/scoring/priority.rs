//! Priority buckets.

use std::fmt;

/// Score at or above which an encounter is bucketed [`Priority::Red`].
pub const RED_THRESHOLD: u8 = 7;
/// Score at or above which an encounter is bucketed [`Priority::Yellow`].
pub const YELLOW_THRESHOLD: u8 = 4;

/// Discrete priority level derived from a triage score.
///
/// Ordered by urgency: `Red > Yellow > Green`.
///
/// ```
/// use triage_queue::scoring::Priority;
///
/// assert_eq!(Priority::from_score(8), Priority::Red);
/// assert_eq!(Priority::from_score(4), Priority::Yellow);
/// assert_eq!(Priority::from_score(0), Priority::Green);
/// assert!(Priority::Red > Priority::Green);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Green,
    Yellow,
    Red,
}

impl Priority {
    /// Maps a score to its bucket. Thresholds are evaluated high to
    /// low, first match wins; defined for every `u8`.
    pub fn from_score(score: u8) -> Self {
        if score >= RED_THRESHOLD {
            Priority::Red
        } else if score >= YELLOW_THRESHOLD {
            Priority::Yellow
        } else {
            Priority::Green
        }
    }

    /// Upper-case label, as rendered on the board.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Red => "RED",
            Priority::Yellow => "YELLOW",
            Priority::Green => "GREEN",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Priority::from_score(10), Priority::Red);
        assert_eq!(Priority::from_score(7), Priority::Red);
        assert_eq!(Priority::from_score(6), Priority::Yellow);
        assert_eq!(Priority::from_score(4), Priority::Yellow);
        assert_eq!(Priority::from_score(3), Priority::Green);
        assert_eq!(Priority::from_score(0), Priority::Green);
    }

    #[test]
    fn test_total_over_all_scores() {
        // Exhaustive and non-overlapping: every u8 maps to exactly one bucket.
        for s in 0..=u8::MAX {
            let p = Priority::from_score(s);
            match s {
                0..=3 => assert_eq!(p, Priority::Green),
                4..=6 => assert_eq!(p, Priority::Yellow),
                _ => assert_eq!(p, Priority::Red),
            }
        }
    }

    #[test]
    fn test_urgency_order() {
        assert!(Priority::Red > Priority::Yellow);
        assert!(Priority::Yellow > Priority::Green);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Priority::Red.to_string(), "RED");
        assert_eq!(Priority::Yellow.to_string(), "YELLOW");
        assert_eq!(Priority::Green.to_string(), "GREEN");
    }
}
