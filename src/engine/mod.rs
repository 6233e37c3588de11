//! The matching / expansion / loop-detection engine.
//!
//! Everything in here is a pure, synchronous function over text: no I/O, no
//! shared state. Both the interactive apply path and the background
//! auto-apply controller call through this single implementation.
//!
//! - [`normalize()`] turns a loosely-formed string into an absolute URL;
//! - [`expand()`] fills `$1`..`$N` placeholders from capture-group values;
//! - [`resolve()`] matches a shortcut against a URL and computes the
//!   destination;
//! - [`would_loop_for`] / [`would_loop_static`] decide whether auto-applying
//!   a shortcut risks re-triggering itself forever.

pub mod expand;
pub mod guard;
pub mod normalize;
pub mod resolve;

pub use expand::expand;
pub use guard::{would_loop_for, would_loop_static};
pub use normalize::normalize;
pub use resolve::resolve;
