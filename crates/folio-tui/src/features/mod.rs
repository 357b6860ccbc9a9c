//! Feature slices for the TUI (state/update/render per slice).

pub mod gallery;
pub mod home;
pub mod nav;
pub mod projects;
pub mod statusline;
