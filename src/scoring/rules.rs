//! The additive triage scoring rule.

use crate::queue::Encounter;

use super::config::ScoringConfig;

/// Age at or above which the age clause fires.
pub const ELDERLY_AGE: u32 = 65;
/// Heart rate at or above which the tachycardia clause fires.
pub const TACHYCARDIA_HR: u32 = 120;
/// Systolic blood pressure below which the hypotension clause fires.
pub const HYPOTENSION_SBP: u32 = 90;
/// Wait time (minutes) at or below which the fresh-arrival clause fires.
pub const FRESH_ARRIVAL_MINUTES: u32 = 10;

const ELDERLY_WEIGHT: u8 = 2;
const TACHYCARDIA_WEIGHT: u8 = 2;
const HYPOTENSION_WEIGHT: u8 = 3;
const HIGH_RISK_WEIGHT: u8 = 2;
const FRESH_ARRIVAL_WEIGHT: u8 = 1;

/// Maximum attainable score: every clause firing at once.
pub const MAX_SCORE: u8 = ELDERLY_WEIGHT
    + TACHYCARDIA_WEIGHT
    + HYPOTENSION_WEIGHT
    + HIGH_RISK_WEIGHT
    + FRESH_ARRIVAL_WEIGHT;

/// Computes the urgency score for one encounter.
///
/// Five independent clauses, each unconditional on the others:
///
/// | Condition | Added |
/// |---|---|
/// | age ≥ 65 | +2 |
/// | heart rate ≥ 120 | +2 |
/// | systolic BP < 90 | +3 |
/// | chief complaint in the high-risk set | +2 |
/// | wait ≤ 10 minutes | +1 |
///
/// Total over well-typed input; the result is always in
/// `0..=`[`MAX_SCORE`].
///
/// ```
/// use triage_queue::queue::Encounter;
/// use triage_queue::scoring::{triage_score, ScoringConfig};
///
/// let config = ScoringConfig::default();
/// let e = Encounter::new("E001", 72, 118, 86, "chest pain", 5);
/// // 2 (age) + 0 (hr < 120) + 3 (sbp < 90) + 2 (high-risk) + 1 (wait ≤ 10)
/// assert_eq!(triage_score(&e, &config), 8);
/// ```
pub fn triage_score(encounter: &Encounter, config: &ScoringConfig) -> u8 {
    let mut score = 0;
    if encounter.age >= ELDERLY_AGE {
        score += ELDERLY_WEIGHT;
    }
    if encounter.heart_rate >= TACHYCARDIA_HR {
        score += TACHYCARDIA_WEIGHT;
    }
    if encounter.systolic_bp < HYPOTENSION_SBP {
        score += HYPOTENSION_WEIGHT;
    }
    if config.is_high_risk(&encounter.chief_complaint) {
        score += HIGH_RISK_WEIGHT;
    }
    if encounter.wait_minutes <= FRESH_ARRIVAL_MINUTES {
        score += FRESH_ARRIVAL_WEIGHT;
    }
    score
}
