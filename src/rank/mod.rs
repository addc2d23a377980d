//! Annotation, ranking, and next-up selection.
//!
//! A ranking pass is pure and request-scoped:
//!
//! 1. [`annotate`] enriches a queue snapshot with each encounter's
//!    score and priority bucket, preserving input order.
//! 2. [`sort_by_priority`] orders the annotated view by urgency —
//!    score descending, wait ascending, insertion order for any
//!    remaining ties.
//! 3. [`next_up`] selects the single most urgent encounter by linear
//!    scan over the same comparator, so it always agrees with the
//!    sort head.
//! 4. [`summarize`] counts encounters per bucket for the board header.
//!
//! Both ranking operations share one comparator ([`urgency_cmp`]);
//! there is deliberately no second, independently-maintained ordering
//! rule to drift out of sync.

mod annotate;
mod engine;

pub use annotate::{annotate, summarize, Annotated, PrioritySummary};
pub use engine::{next_up, sort_by_priority, urgency_cmp};
