//! Interactive portfolio.

use anyhow::Result;
use folio_core::config::Config;
use folio_core::store::GalleryClient;
use folio_core::tabs::ViewId;

pub async fn run(config: &Config, start_view: ViewId) -> Result<()> {
    let store = config.store_config()?.map(GalleryClient::new).transpose()?;
    if store.is_none() {
        tracing::info!("No gallery store configured; using built-in photos");
    }
    folio_tui::run_portfolio(config, start_view, store).await
}
