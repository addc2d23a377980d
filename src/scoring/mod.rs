//! Urgency scoring and priority bucketing.
//!
//! Converts one encounter's attributes into a bounded integer score and
//! maps that score to a discrete priority level:
//!
//! - **Additive rule**: five independent clauses, each contributing a
//!   fixed weight when its condition holds; clauses never interact, so
//!   the score is always in `0..=`[`MAX_SCORE`].
//! - **Bucketing**: fixed thresholds partition the score range into
//!   [`Priority::Red`], [`Priority::Yellow`], and [`Priority::Green`].
//!
//! # Design
//!
//! Both functions are total over well-typed input: no clause can fail,
//! and every score maps to exactly one bucket. The only configuration
//! is the set of chief complaints treated as high-risk, held in
//! [`ScoringConfig`] and loaded once per process.

mod config;
mod priority;
mod rules;

pub use config::ScoringConfig;
pub use priority::{Priority, RED_THRESHOLD, YELLOW_THRESHOLD};
pub use rules::{
    triage_score, ELDERLY_AGE, FRESH_ARRIVAL_MINUTES, HYPOTENSION_SBP, MAX_SCORE, TACHYCARDIA_HR,
};
