//! Core data types for Tabhop.

pub mod shortcut;

pub use shortcut::{Shortcut, DEFAULT_ICON};

/// Identifier the host browser assigns to a tab.
///
/// Tab ids are only meaningful for the lifetime of the tab; the browser may
/// reuse an id after the tab closes.
pub type TabId = u32;
