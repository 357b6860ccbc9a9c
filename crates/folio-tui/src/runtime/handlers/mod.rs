//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return their result.
//! They never touch state; the runtime spawns them and forwards the result
//! to the inbox.

pub mod gallery;

pub use gallery::*;
