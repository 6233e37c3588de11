//! The auto-apply controller.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, error, info, warn};

use crate::background::restored::RestoredTabSet;
use crate::browser::{Navigator, TabQuery};
use crate::engine;
use crate::error::TabhopResult;
use crate::store::ShortcutStore;
use crate::types::{Shortcut, TabId};

/// How long session-restore protection lasts after a startup event.
pub const SESSION_RESTORE_GRACE: Duration = Duration::from_secs(10);

/// URL prefixes the controller never touches.
const INTERNAL_PREFIXES: &[&str] = &["chrome://", "chrome-extension://", "about:"];

/// Decides, per "tab finished loading" event, whether an auto-execute
/// shortcut fires and dispatches the navigation.
///
/// One instance owns one [`RestoredTabSet`]; the host wires tab lifecycle
/// events to [`on_tab_complete`], [`on_tab_closed`], and [`on_startup`].
/// Events are handled to completion one at a time; a failure inside one
/// event is contained and never poisons the next.
///
/// [`on_tab_complete`]: AutoApplyController::on_tab_complete
/// [`on_tab_closed`]: AutoApplyController::on_tab_closed
/// [`on_startup`]: AutoApplyController::on_startup
pub struct AutoApplyController {
    store: Arc<dyn ShortcutStore>,
    tabs: Arc<dyn TabQuery>,
    navigator: Arc<dyn Navigator>,
    restored: RestoredTabSet,
    grace: Duration,
}

impl AutoApplyController {
    /// Wires a controller to its collaborators with the production grace
    /// window.
    pub fn new(
        store: Arc<dyn ShortcutStore>,
        tabs: Arc<dyn TabQuery>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_grace(store, tabs, navigator, SESSION_RESTORE_GRACE)
    }

    /// Same as [`new`](AutoApplyController::new) with an explicit grace
    /// window.
    pub fn with_grace(
        store: Arc<dyn ShortcutStore>,
        tabs: Arc<dyn TabQuery>,
        navigator: Arc<dyn Navigator>,
        grace: Duration,
    ) -> Self {
        Self {
            store,
            tabs,
            navigator,
            restored: RestoredTabSet::new(),
            grace,
        }
    }

    /// The protection set this controller consults.
    #[must_use]
    pub fn restored(&self) -> &RestoredTabSet {
        &self.restored
    }

    /// Handles extension install/update and browser startup: snapshots every
    /// open tab into the protection set, then schedules a one-shot amnesty.
    ///
    /// A second startup while a timer is already pending re-snapshots and
    /// schedules another amnesty; the earlier timer still fires at its
    /// original time, and clearing twice is a no-op.
    pub async fn on_startup(&self, reason: &str) -> TabhopResult<()> {
        let ids = self.tabs.open_tab_ids().await?;
        let count = self.restored.protect(ids);
        info!(reason, protected = count, "session-restore protection armed");

        let restored = self.restored.clone();
        let grace = self.grace;
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            restored.unprotect_all();
            debug!("session-restore protection lifted");
        });

        Ok(())
    }

    /// Handles a closed tab: its id leaves the protection set so a future
    /// tab reusing the id starts unprotected.
    pub fn on_tab_closed(&self, tab: TabId) {
        self.restored.release(tab);
    }

    /// Handles a "tab finished loading" event.
    ///
    /// At most one shortcut fires per event: the first auto-execute
    /// shortcut, in stored order, whose pattern matches the URL. A shortcut
    /// whose pattern fails to compile is skipped; later candidates are still
    /// considered. Once a match is selected, a loop verdict or a navigation
    /// failure stops the event without trying further shortcuts.
    pub async fn on_tab_complete(&self, tab: TabId, url: &str) -> TabhopResult<()> {
        if self.restored.is_protected(tab) {
            debug!(tab, "skipping restored tab");
            return Ok(());
        }

        if url.is_empty() || is_internal_url(url) {
            return Ok(());
        }

        let shortcuts = self.store.load().await?;

        for shortcut in shortcuts.iter().filter(|s| s.auto_execute) {
            let regex = match Regex::new(&shortcut.pattern) {
                Ok(regex) => regex,
                Err(e) => {
                    warn!(name = %shortcut.name, %e, "skipping shortcut with invalid pattern");
                    continue;
                }
            };

            if regex.is_match(url) {
                self.apply_to_tab(tab, url, shortcut).await;
                break;
            }
        }

        Ok(())
    }

    /// Navigates `tab` according to `shortcut`, re-verifying the loop guard
    /// first. Failures are logged, never propagated: there is no user
    /// present during automatic execution.
    async fn apply_to_tab(&self, tab: TabId, url: &str, shortcut: &Shortcut) {
        if engine::would_loop_for(shortcut, url) {
            warn!(name = %shortcut.name, url, "auto-apply blocked: would loop");
            return;
        }

        let destination = match engine::resolve(shortcut, url) {
            Ok(destination) => engine::normalize(&destination),
            Err(e) => {
                warn!(name = %shortcut.name, %e, "auto-apply failed to resolve");
                return;
            }
        };

        info!(name = %shortcut.name, from = url, to = %destination, "auto-apply");

        let outcome = if shortcut.open_new_tab {
            self.navigator.open_new_tab(&destination).await
        } else {
            self.navigator.update_tab(tab, &destination).await
        };

        if let Err(e) = outcome {
            error!(name = %shortcut.name, %e, "auto-apply navigation failed");
        }
    }
}

fn is_internal_url(url: &str) -> bool {
    INTERNAL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
