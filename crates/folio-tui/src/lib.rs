//! Full-screen terminal portfolio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{gallery, home, nav, projects, statusline};
use folio_core::config::Config;
use folio_core::store::GalleryClient;
use folio_core::tabs::ViewId;
pub use runtime::TuiRuntime;

/// Runs the interactive portfolio until the user quits.
///
/// Without a store client the gallery shows the bundled photos.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub async fn run_portfolio(
    config: &Config,
    start_view: ViewId,
    store: Option<GalleryClient>,
) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The portfolio needs a terminal.\n\
             Use `folio gallery list` or `folio reveal <TEXT>` for plain output."
        );
    }

    tracing::info!(view = %start_view, store = store.is_some(), "Starting portfolio");
    let mut runtime = TuiRuntime::new(config, start_view, store)?;
    runtime.run()
}
