//! The encounter model and the authoritative in-memory queue.
//!
//! [`Encounter`] carries only raw attributes; derived urgency fields
//! live exclusively on the annotated view (see [`crate::rank`]) and are
//! never written back here.
//!
//! [`QueueStore`] owns the mutable list. Readers take a cloned
//! [`snapshot`](QueueStore::snapshot) so a scoring pass never observes
//! a mid-pass mutation; [`SharedQueue`] adds the exclusive lock needed
//! when a runtime processes requests concurrently.
//!
//! Raw form-style input enters through [`EncounterDraft`], the one
//! place malformed attributes are rejected ([`ParseError`]) before an
//! `Encounter` exists.

mod encounter;
mod store;

pub use encounter::{Encounter, EncounterDraft, ParseError};
pub use store::{seed_roster, QueueStore, SharedQueue};
