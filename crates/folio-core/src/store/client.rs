use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::error::classify_reqwest_error;
use super::{GalleryImage, NewGalleryImage, StoreConfig, StoreError, StoreResult};

const REST_PATH: &str = "/rest/v1";

/// Client for the gallery image table.
///
/// Constructed once from `StoreConfig` and handed to whoever needs it; there
/// is no process-wide instance.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    config: StoreConfig,
    http: reqwest::Client,
}

impl GalleryClient {
    /// # Errors
    /// Returns an error if the API key cannot be sent as a header value or the
    /// HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let headers = build_headers(&config.api_key)?;
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    fn table_url(&self) -> String {
        format!("{}{}/{}", self.config.base_url, REST_PATH, self.config.table)
    }

    /// Fetches every image, ascending by `display_order`.
    ///
    /// # Errors
    /// Returns a `StoreError` on network failure, non-2xx status or a body
    /// that is not a list of rows.
    pub async fn try_list_images(&self) -> StoreResult<Vec<GalleryImage>> {
        let response = self
            .http
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "display_order.asc")])
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let mut images: Vec<GalleryImage> = read_json(response).await?;
        // Stable: rows with equal order keep the store's order.
        images.sort_by_key(|image| image.display_order);
        Ok(images)
    }

    /// Inserts one image and returns the stored row.
    ///
    /// `Ok(None)` when the store accepted the insert but returned no row.
    ///
    /// # Errors
    /// Returns a `StoreError` on network failure, non-2xx status or a body
    /// that is not a list of rows.
    pub async fn try_add_image(&self, image: &NewGalleryImage) -> StoreResult<Option<GalleryImage>> {
        let response = self
            .http
            .post(self.table_url())
            .header("prefer", "return=representation")
            .json(&[image])
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let rows: Vec<GalleryImage> = read_json(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Fetches every image; on failure logs it and returns an empty list.
    pub async fn list_gallery_images(&self) -> Vec<GalleryImage> {
        match self.try_list_images().await {
            Ok(images) => {
                tracing::debug!(count = images.len(), "Fetched gallery images");
                images
            }
            Err(error) => {
                tracing::error!(
                    kind = %error.kind,
                    details = error.details.as_deref().unwrap_or(""),
                    "Error fetching gallery images: {error}"
                );
                Vec::new()
            }
        }
    }

    /// Inserts one image; on failure logs it and returns `None`.
    pub async fn add_gallery_image(&self, image: &NewGalleryImage) -> Option<GalleryImage> {
        match self.try_add_image(image).await {
            Ok(Some(created)) => {
                tracing::info!(id = created.id, title = %created.title, "Added gallery image");
                Some(created)
            }
            Ok(None) => {
                tracing::warn!(title = %image.title, "Store returned no row for inserted image");
                None
            }
            Err(error) => {
                tracing::error!(
                    kind = %error.kind,
                    details = error.details.as_deref().unwrap_or(""),
                    "Error adding gallery image: {error}"
                );
                None
            }
        }
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut apikey = HeaderValue::from_str(api_key)
        .context("Store API key contains characters not allowed in a header")?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .context("Store API key contains characters not allowed in a header")?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| classify_reqwest_error(&e))?;

    if !status.is_success() {
        return Err(StoreError::http_status(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| StoreError {
        details: Some(body.clone()),
        ..StoreError::parse(format!("Failed to parse store response: {e}"))
    })
}
