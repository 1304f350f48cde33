//! Cancellation bookkeeping.

use amber_beacon_core::WorkId;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Record of work ids that must no longer be acted on.
///
/// The set only grows: once an id is marked it stays marked for the life
/// of the registry. Nothing here is persisted; durability, if required,
/// is an external concern.
///
/// Handles are cheap clones sharing one underlying set, so a downstream
/// consumer can hold the registry without holding the scheduler.
#[derive(Debug, Clone, Default)]
pub struct CancellationRegistry {
    cancelled: Arc<Mutex<HashSet<WorkId>>>,
}

impl CancellationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the id as cancelled.
    ///
    /// Returns `false` when the id was already marked; repeat marks are
    /// otherwise no-ops.
    pub fn mark(&self, id: &WorkId) -> bool {
        self.lock().insert(id.clone())
    }

    /// Whether the id has ever been marked cancelled.
    #[must_use]
    pub fn contains(&self, id: &WorkId) -> bool {
        self.lock().contains(id)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<WorkId>> {
        // Membership operations cannot fail; a poisoned lock still guards
        // a usable set.
        self.cancelled.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn unknown_id_is_not_cancelled() {
        let registry = CancellationRegistry::new();
        assert!(!registry.contains(&WorkId::new("never-seen")));
    }

    #[test]
    fn marked_id_stays_cancelled() {
        let registry = CancellationRegistry::new();
        assert!(registry.mark(&WorkId::new("doomed")));
        assert!(registry.contains(&WorkId::new("doomed")));
    }

    #[test]
    fn repeat_marks_are_idempotent() {
        let registry = CancellationRegistry::new();
        assert!(registry.mark(&WorkId::new("twice")));
        assert!(!registry.mark(&WorkId::new("twice")));
        assert!(registry.contains(&WorkId::new("twice")));
    }

    #[test]
    fn clones_share_the_same_set() {
        let registry = CancellationRegistry::new();
        let handle = registry.clone();

        registry.mark(&WorkId::new("shared"));
        assert!(handle.contains(&WorkId::new("shared")));
    }

    #[test]
    fn concurrent_marks_are_all_recorded() {
        let registry = CancellationRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let registry = registry.clone();
                thread::spawn(move || registry.mark(&WorkId::new(format!("work-{n}"))))
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }

        for n in 0..8 {
            assert!(registry.contains(&WorkId::new(format!("work-{n}"))));
        }
    }
}
