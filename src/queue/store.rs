//! The authoritative in-memory queue.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::encounter::Encounter;

/// The six-encounter demo roster the store resets to by default.
pub fn seed_roster() -> Vec<Encounter> {
    vec![
        Encounter::new("E001", 72, 118, 86, "chest pain", 5),
        Encounter::new("E002", 34, 92, 122, "headache", 12),
        Encounter::new("E003", 58, 105, 99, "shortness of breath", 30),
        Encounter::new("E004", 81, 88, 140, "fall", 55),
        Encounter::new("E005", 47, 131, 92, "fever", 18),
        Encounter::new("E006", 29, 76, 110, "abdominal pain", 40),
    ]
}

/// Authoritative mutable list of queued encounters.
///
/// The scoring side never touches this directly: it reads a cloned
/// [`snapshot`](Self::snapshot) and recomputes everything from it.
/// `reset` restores the roster captured at construction time.
///
/// ```
/// use triage_queue::queue::{Encounter, QueueStore};
///
/// let mut store = QueueStore::new();
/// store.add(Encounter::new("E001", 72, 118, 86, "chest pain", 5));
/// assert_eq!(store.len(), 1);
/// assert!(store.remove("E001"));
/// assert!(!store.remove("E001")); // idempotent
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueueStore {
    encounters: Vec<Encounter>,
    seed: Vec<Encounter>,
}

impl QueueStore {
    /// Creates an empty store (and an empty reset roster).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `roster`, which also becomes
    /// the target of [`reset`](Self::reset).
    pub fn with_roster(roster: Vec<Encounter>) -> Self {
        Self {
            encounters: roster.clone(),
            seed: roster,
        }
    }

    /// Creates a store pre-populated with the [`seed_roster`].
    pub fn seeded() -> Self {
        Self::with_roster(seed_roster())
    }

    /// Cloned view of the current queue, in insertion order.
    ///
    /// A scoring pass works entirely off this copy, so later mutations
    /// cannot tear a pass in progress.
    pub fn snapshot(&self) -> Vec<Encounter> {
        self.encounters.clone()
    }

    /// Appends an encounter to the back of the queue.
    ///
    /// Identifier uniqueness is assumed, not enforced.
    pub fn add(&mut self, encounter: Encounter) {
        debug!(id = %encounter.id, "queue add");
        self.encounters.push(encounter);
    }

    /// Removes the encounter with the given id, if present.
    ///
    /// Builds a new filtered list rather than mutating in place while
    /// scanning. Unknown ids are a no-op; returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let retained: Vec<Encounter> = self
            .encounters
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = retained.len() < self.encounters.len();
        self.encounters = retained;
        debug!(id, removed, "queue remove");
        removed
    }

    /// Restores the roster the store was constructed with.
    pub fn reset(&mut self) {
        debug!(roster_len = self.seed.len(), "queue reset");
        self.encounters = self.seed.clone();
    }

    /// Replaces the entire queue contents (the reset roster is kept).
    pub fn replace_all(&mut self, encounters: Vec<Encounter>) {
        self.encounters = encounters;
    }

    pub fn len(&self) -> usize {
        self.encounters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }
}

/// Clonable handle serializing access to a [`QueueStore`].
///
/// Runtimes that process requests concurrently must not interleave
/// store mutations with snapshot reads; this wraps the store in a
/// single exclusive lock so each operation is atomic.
#[derive(Debug, Clone)]
pub struct SharedQueue {
    inner: Arc<Mutex<QueueStore>>,
}

impl SharedQueue {
    pub fn new(store: QueueStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueStore> {
        // A poisoned lock only means another thread panicked mid-op;
        // the plain-data store is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Vec<Encounter> {
        self.lock().snapshot()
    }

    pub fn add(&self, encounter: Encounter) {
        self.lock().add(encounter);
    }

    pub fn remove(&self, id: &str) -> bool {
        self.lock().remove(id)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster_ids() {
        let ids: Vec<_> = seed_roster().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["E001", "E002", "E003", "E004", "E005", "E006"]);
    }

    #[test]
    fn test_add_and_snapshot_order() {
        let mut store = QueueStore::new();
        store.add(Encounter::new("A", 1, 1, 100, "x", 1));
        store.add(Encounter::new("B", 2, 2, 100, "y", 2));
        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].id, "A");
        assert_eq!(snap[1].id, "B");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = QueueStore::seeded();
        let snap = store.snapshot();
        store.remove("E001");
        // The snapshot taken before the mutation is unaffected.
        assert_eq!(snap.len(), 6);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_remove_known_id() {
        let mut store = QueueStore::seeded();
        assert!(store.remove("E003"));
        assert_eq!(store.len(), 5);
        assert!(store.snapshot().iter().all(|e| e.id != "E003"));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = QueueStore::seeded();
        assert!(!store.remove("E999"));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = QueueStore::seeded();
        store.remove("E002");
        let ids: Vec<_> = store.snapshot().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["E001", "E003", "E004", "E005", "E006"]);
    }

    #[test]
    fn test_reset_restores_roster() {
        let mut store = QueueStore::seeded();
        store.remove("E001");
        store.add(Encounter::new("E009", 50, 80, 120, "rash", 2));
        store.reset();
        assert_eq!(store.snapshot(), seed_roster());
    }

    #[test]
    fn test_reset_on_empty_store() {
        let mut store = QueueStore::new();
        store.add(Encounter::new("A", 1, 1, 100, "x", 1));
        store.reset();
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut store = QueueStore::seeded();
        store.replace_all(vec![Encounter::new("Z", 9, 9, 100, "z", 9)]);
        assert_eq!(store.len(), 1);
        store.reset();
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_shared_queue_serializes_ops() {
        let shared = SharedQueue::new(QueueStore::seeded());
        let other = shared.clone();
        assert!(other.remove("E001"));
        assert_eq!(shared.len(), 5);
        shared.reset();
        assert_eq!(other.len(), 6);
    }

    #[test]
    fn test_shared_queue_across_threads() {
        let shared = SharedQueue::new(QueueStore::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let q = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        q.add(Encounter::new(format!("T{t}-{i}"), 30, 80, 120, "x", 1));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.len(), 100);
    }
}
