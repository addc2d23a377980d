//! In-memory triage work queue with deterministic prioritization.
//!
//! Models an emergency-department style intake queue: each queued
//! encounter carries a handful of numeric and categorical attributes,
//! and the crate derives a bounded urgency score, a discrete priority
//! bucket, and a deterministic ranking from them on every read.
//!
//! - **Scoring**: additive rule mapping an encounter's attributes to an
//!   integer score in `0..=10`, with a configurable set of high-risk
//!   chief complaints ([`scoring`]).
//! - **Buckets**: fixed thresholds map a score to one of three priority
//!   levels — `Red`, `Yellow`, `Green` ([`scoring::Priority`]).
//! - **Ranking**: a stable total order (score descending, wait
//!   ascending) plus a linear-scan next-up selection that agrees with
//!   the sort head by construction ([`rank`]).
//! - **Queue**: the authoritative mutable encounter list with append,
//!   idempotent remove, and reset; the scoring side only ever sees
//!   immutable snapshots of it ([`queue`]).
//! - **Board**: the request-scoped orchestration surface a routing or
//!   rendering layer calls ([`board::TriageBoard`]).
//!
//! # Architecture
//!
//! Scoring, annotation, and ranking are pure functions over a snapshot:
//! they hold no state between invocations and never mutate the queue.
//! All mutation goes through [`queue::QueueStore`] (or the lock-guarded
//! [`queue::SharedQueue`] when requests may run concurrently); derived
//! fields are recomputed from a fresh snapshot on every view and are
//! never written back.

pub mod board;
pub mod queue;
pub mod rank;
pub mod scoring;
