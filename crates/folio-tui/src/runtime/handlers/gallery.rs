use folio_core::store::{GalleryClient, GalleryImage};
use tokio_util::sync::CancellationToken;

/// Fetches gallery rows. Cancellation or a missing client yields no rows.
pub async fn gallery_load(
    client: Option<GalleryClient>,
    cancel: Option<CancellationToken>,
) -> Vec<GalleryImage> {
    let Some(client) = client else {
        return Vec::new();
    };
    let cancel = cancel.unwrap_or_default();

    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("Gallery load cancelled");
            Vec::new()
        }
        images = client.list_gallery_images() => images,
    }
}
