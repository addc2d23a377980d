//! Urgency ordering and next-up selection.

use std::cmp::Ordering;

use super::annotate::Annotated;

/// The one urgency comparator: score descending, then wait ascending.
///
/// Both [`sort_by_priority`] and [`next_up`] rank through this
/// function, so the sorted head and the scanned winner cannot disagree.
pub fn urgency_cmp(a: &Annotated, b: &Annotated) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.encounter.wait_minutes.cmp(&b.encounter.wait_minutes))
}

/// Orders an annotated view by urgency.
///
/// Stable: encounters tied on both score and wait keep their original
/// relative order, so repeated views over unchanged data render
/// identical positions.
pub fn sort_by_priority(annotated: &[Annotated]) -> Vec<Annotated> {
    let mut ordered = annotated.to_vec();
    ordered.sort_by(urgency_cmp);
    ordered
}

/// Identifier of the single most urgent encounter.
///
/// Linear scan: the running best is replaced only when a later
/// encounter compares strictly more urgent, which makes the result the
/// first element a stable urgency sort would produce. Empty input
/// yields `None`.
///
/// ```
/// use triage_queue::queue::seed_roster;
/// use triage_queue::rank::{annotate, next_up};
/// use triage_queue::scoring::ScoringConfig;
///
/// let annotated = annotate(&seed_roster(), &ScoringConfig::default());
/// assert_eq!(next_up(&annotated), Some("E001"));
/// assert_eq!(next_up(&[]), None);
/// ```
pub fn next_up(annotated: &[Annotated]) -> Option<&str> {
    let mut best = annotated.first()?;
    for candidate in &annotated[1..] {
        if urgency_cmp(candidate, best) == Ordering::Less {
            best = candidate;
        }
    }
    Some(best.id())
}
