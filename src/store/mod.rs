//! Persistence for the ordered shortcut list.
//!
//! The list is owned by whichever store backs it; the engine and service
//! layers are handed a snapshot per call and never retain a copy. The only
//! primitives a backend must supply are "load the whole list" and "replace
//! the whole list" — add/update/delete/reorder are expressed as
//! load-mutate-replace by the service layer.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TabhopResult;
use crate::types::Shortcut;

pub mod file;
pub mod transfer;

pub use file::FileStore;
pub use transfer::{export_json, import_json, TransferError};

/// Abstract contract for the persisted shortcut list.
#[async_trait]
pub trait ShortcutStore: Send + Sync {
    /// Loads the full ordered list. An empty store yields an empty list.
    async fn load(&self) -> TabhopResult<Vec<Shortcut>>;

    /// Replaces the stored list wholesale.
    async fn replace(&self, shortcuts: &[Shortcut]) -> TabhopResult<()>;
}

/// In-memory store.
///
/// The default for tests and for embedding the engine without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Vec<Shortcut>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a list.
    #[must_use]
    pub fn with_shortcuts(shortcuts: Vec<Shortcut>) -> Self {
        Self {
            inner: Mutex::new(shortcuts),
        }
    }
}

#[async_trait]
impl ShortcutStore for MemoryStore {
    async fn load(&self) -> TabhopResult<Vec<Shortcut>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn replace(&self, shortcuts: &[Shortcut]) -> TabhopResult<()> {
        *self.inner.lock().unwrap() = shortcuts.to_vec();
        Ok(())
    }
}
