//! Interactive shortcut operations.
//!
//! Everything the popup front end needs: list CRUD, reordering, bulk
//! replacement, and applying a shortcut to the active tab. Mutations follow
//! the load-mutate-replace pattern over the store contract; each call works
//! on a fresh snapshot, and identity is positional, so callers use the
//! returned list rather than an index captured before the call.

use std::sync::Arc;

use tracing::info;

use crate::browser::{Navigator, TabQuery};
use crate::engine;
use crate::error::{TabhopError, TabhopResult};
use crate::store::ShortcutStore;
use crate::types::Shortcut;

/// Moves the element at `from` to position `to`, shifting the elements in
/// between.
///
/// The multiset of elements is preserved and the moved element lands exactly
/// at `to`.
///
/// # Errors
///
/// [`TabhopError::InvalidInput`] when either index is out of bounds.
pub fn move_item(list: &mut Vec<Shortcut>, from: usize, to: usize) -> TabhopResult<()> {
    if from >= list.len() || to >= list.len() {
        return Err(TabhopError::invalid_input(format!(
            "move {} -> {} is out of bounds for {} shortcuts",
            from,
            to,
            list.len()
        )));
    }
    let item = list.remove(from);
    list.insert(to, item);
    Ok(())
}

/// Coordinates the store, tab lookup, and navigation collaborators for the
/// interactive call sites.
pub struct ShortcutService {
    store: Arc<dyn ShortcutStore>,
    tabs: Arc<dyn TabQuery>,
    navigator: Arc<dyn Navigator>,
}

impl ShortcutService {
    /// Wires a service to its three collaborators.
    pub fn new(
        store: Arc<dyn ShortcutStore>,
        tabs: Arc<dyn TabQuery>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            tabs,
            navigator,
        }
    }

    /// Loads the current list.
    pub async fn list(&self) -> TabhopResult<Vec<Shortcut>> {
        self.store.load().await
    }

    /// Appends a shortcut; returns the updated list.
    pub async fn add(&self, shortcut: Shortcut) -> TabhopResult<Vec<Shortcut>> {
        ensure_storable(&shortcut)?;
        let mut list = self.store.load().await?;
        list.push(shortcut);
        self.store.replace(&list).await?;
        Ok(list)
    }

    /// Replaces the shortcut at `index`; returns the updated list.
    pub async fn update(&self, index: usize, shortcut: Shortcut) -> TabhopResult<Vec<Shortcut>> {
        ensure_storable(&shortcut)?;
        let mut list = self.store.load().await?;
        let slot = list.get_mut(index).ok_or_else(|| {
            TabhopError::invalid_input(format!("no shortcut at index {}", index))
        })?;
        *slot = shortcut;
        self.store.replace(&list).await?;
        Ok(list)
    }

    /// Removes the shortcut at `index`; returns the updated list.
    pub async fn remove(&self, index: usize) -> TabhopResult<Vec<Shortcut>> {
        let mut list = self.store.load().await?;
        if index >= list.len() {
            return Err(TabhopError::invalid_input(format!(
                "no shortcut at index {}",
                index
            )));
        }
        list.remove(index);
        self.store.replace(&list).await?;
        Ok(list)
    }

    /// Moves the shortcut at `from` to position `to`; returns the updated
    /// list.
    pub async fn reorder(&self, from: usize, to: usize) -> TabhopResult<Vec<Shortcut>> {
        let mut list = self.store.load().await?;
        move_item(&mut list, from, to)?;
        self.store.replace(&list).await?;
        Ok(list)
    }

    /// Replaces the whole list, the bulk-import path. Every incoming
    /// shortcut passes the same gates as an individual save.
    pub async fn replace_all(&self, shortcuts: Vec<Shortcut>) -> TabhopResult<Vec<Shortcut>> {
        for shortcut in &shortcuts {
            ensure_storable(shortcut)?;
        }
        self.store.replace(&shortcuts).await?;
        Ok(shortcuts)
    }

    /// Applies a shortcut to the active tab: resolves the destination
    /// against the current URL, normalizes it, and navigates honoring
    /// `open_new_tab`. Returns the URL navigated to.
    pub async fn apply(&self, shortcut: &Shortcut) -> TabhopResult<String> {
        let current = self.tabs.current_url().await?;
        let destination = engine::resolve(shortcut, &current)?;
        let destination = engine::normalize(&destination);

        if shortcut.open_new_tab {
            self.navigator.open_new_tab(&destination).await?;
        } else {
            self.navigator.update_active_tab(&destination).await?;
        }

        info!(name = %shortcut.name, to = %destination, "applied shortcut");
        Ok(destination)
    }

    /// Applies the shortcut at `index` to the active tab.
    pub async fn apply_at(&self, index: usize) -> TabhopResult<String> {
        let list = self.store.load().await?;
        let shortcut = list.get(index).ok_or_else(|| {
            TabhopError::invalid_input(format!("no shortcut at index {}", index))
        })?;
        self.apply(shortcut).await
    }
}

/// Save-time gates: field validation plus the static loop invariant for
/// auto-executing shortcuts.
fn ensure_storable(shortcut: &Shortcut) -> TabhopResult<()> {
    let errors = shortcut.validation_errors();
    if !errors.is_empty() {
        return Err(TabhopError::invalid_input(errors.join("; ")));
    }
    if shortcut.auto_execute && engine::would_loop_static(shortcut) {
        return Err(TabhopError::loop_rejected(&shortcut.name));
    }
    Ok(())
}
