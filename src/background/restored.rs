//! Session-restore protection set.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::types::TabId;

/// Tab ids currently protected from auto-execution.
///
/// Populated with every open tab id when the extension starts (session
/// restore re-fires "load complete" for each restored tab, which must not
/// trigger a storm of navigations) and cleared wholesale once the grace
/// window elapses. A tab's id leaves the set individually when that tab
/// closes, so a recycled id never inherits protection.
///
/// Clones share the same underlying set, which is what lets the expiry task
/// clear the set the controller still holds.
#[derive(Debug, Clone, Default)]
pub struct RestoredTabSet {
    inner: Arc<Mutex<HashSet<TabId>>>,
}

impl RestoredTabSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every id in `ids` as protected; returns how many are now held.
    pub fn protect(&self, ids: impl IntoIterator<Item = TabId>) -> usize {
        let mut set = self.inner.lock().unwrap();
        set.extend(ids);
        set.len()
    }

    /// Drops protection for a single tab, typically because it closed.
    pub fn release(&self, id: TabId) {
        self.inner.lock().unwrap().remove(&id);
    }

    /// Clears the whole set — the grace-window amnesty. Clearing an already
    /// empty set is a no-op, so overlapping expiry timers are harmless.
    pub fn unprotect_all(&self) {
        self.inner.lock().unwrap().clear();
    }

    /// Whether `id` is currently protected.
    #[must_use]
    pub fn is_protected(&self, id: TabId) -> bool {
        self.inner.lock().unwrap().contains(&id)
    }

    /// Number of protected ids.
    #[must_use]
    pub fn protected_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}
