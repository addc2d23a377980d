//! Request-scoped orchestration for a presentation layer.
//!
//! [`TriageBoard`] is the surface a routing/rendering layer calls: one
//! read operation that re-derives the whole annotated, ordered view
//! from a fresh queue snapshot, and three mutations that touch only
//! the queue. There is no cached annotation state to invalidate —
//! every view starts from scratch.

use tracing::debug;

use crate::queue::{Encounter, EncounterDraft, ParseError, QueueStore};
use crate::rank::{annotate, next_up, sort_by_priority, summarize, Annotated, PrioritySummary};
use crate::scoring::ScoringConfig;

/// Everything one rendered view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    /// Annotated encounters in urgency order.
    pub encounters: Vec<Annotated>,
    /// Counts per priority bucket.
    pub summary: PrioritySummary,
    /// Identifier of the most urgent encounter, if any.
    pub next_up: Option<String>,
}

/// A queue plus its scoring configuration.
///
/// ```
/// use triage_queue::board::TriageBoard;
///
/// let mut board = TriageBoard::seeded();
/// let view = board.view();
/// assert_eq!(view.next_up.as_deref(), Some("E001"));
/// assert_eq!(view.summary.total(), 6);
///
/// board.mark_roomed("E001");
/// assert_eq!(board.view().summary.total(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriageBoard {
    store: QueueStore,
    config: ScoringConfig,
}

impl TriageBoard {
    /// An empty board with the default high-risk set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board over the demo roster with the default high-risk set.
    pub fn seeded() -> Self {
        Self {
            store: QueueStore::seeded(),
            config: ScoringConfig::default(),
        }
    }

    /// A board over an explicit store and configuration.
    pub fn with_store(store: QueueStore, config: ScoringConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn store(&self) -> &QueueStore {
        &self.store
    }

    /// Derives the full view from a fresh snapshot: annotate, order,
    /// summarize, select next-up.
    pub fn view(&self) -> BoardView {
        let snapshot = self.store.snapshot();
        let annotated = annotate(&snapshot, &self.config);
        let next_up = next_up(&annotated).map(str::to_string);
        let summary = summarize(&annotated);
        BoardView {
            encounters: sort_by_priority(&annotated),
            summary,
            next_up,
        }
    }

    /// Parses raw form input and, if well-formed, appends the new
    /// encounter. Malformed attributes are rejected before any
    /// encounter is constructed.
    pub fn admit(&mut self, draft: &EncounterDraft) -> Result<(), ParseError> {
        let encounter = draft.parse()?;
        debug!(id = %encounter.id, "admit");
        self.store.add(encounter);
        Ok(())
    }

    /// Appends an already-typed encounter.
    pub fn admit_encounter(&mut self, encounter: Encounter) {
        self.store.add(encounter);
    }

    /// Removes an encounter that has been roomed. Unknown ids are a
    /// no-op; returns whether anything was removed.
    pub fn mark_roomed(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    /// Restores the board's construction-time roster.
    pub fn reset(&mut self) {
        self.store.reset();
    }
}
