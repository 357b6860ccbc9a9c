//! Core library for folio: the text reveal engine, portfolio content, tab
//! dispatch, the gallery store client and the ambient config/logging setup.

pub mod config;
pub mod content;
pub mod interrupt;
pub mod logging;
pub mod reveal;
pub mod store;
pub mod tabs;
