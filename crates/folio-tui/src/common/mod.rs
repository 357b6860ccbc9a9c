//! Shared TUI building blocks.

pub mod placeholder;
pub mod task;
pub mod text;

pub use placeholder::{ImageSurface, PlaceholderKind};
pub use task::{TaskCompleted, TaskId, TaskSeq, TaskStarted, TaskState};
