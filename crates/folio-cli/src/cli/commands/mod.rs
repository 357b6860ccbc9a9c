//! CLI command handlers.

pub mod config;
pub mod gallery;
pub mod reveal;
pub mod view;
