//! Abstract contracts for the hosting browser.
//!
//! The engine never talks to a browser API directly; it is handed these two
//! collaborators. The popup front end binds them to the host's tab APIs, the
//! CLI binds them to stand-ins, and tests bind them to recording doubles.

use async_trait::async_trait;

use crate::error::TabhopResult;
use crate::types::TabId;

/// Read-only view of the host's tabs.
#[async_trait]
pub trait TabQuery: Send + Sync {
    /// URL of the active tab, or an empty string when it cannot be
    /// determined.
    async fn current_url(&self) -> TabhopResult<String>;

    /// Ids of every currently open tab, used to snapshot session-restore
    /// protection at startup.
    async fn open_tab_ids(&self) -> TabhopResult<Vec<TabId>>;
}

/// Navigation sink.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Opens `url` in a new tab.
    async fn open_new_tab(&self, url: &str) -> TabhopResult<()>;

    /// Points the tab identified by `tab` at `url`.
    async fn update_tab(&self, tab: TabId, url: &str) -> TabhopResult<()>;

    /// Points the active tab at `url`. Implementors fall back to
    /// [`open_new_tab`](Navigator::open_new_tab) when no active tab is
    /// known.
    async fn update_active_tab(&self, url: &str) -> TabhopResult<()>;
}
