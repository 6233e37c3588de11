//! Background auto-apply decision process.
//!
//! Listens to tab lifecycle events and applies the first matching
//! auto-execute shortcut when a page finishes loading, guarded against
//! navigation loops and against firing on tabs the browser restored from a
//! previous session.

pub mod controller;
pub mod restored;

pub use controller::{AutoApplyController, SESSION_RESTORE_GRACE};
pub use restored::RestoredTabSet;
