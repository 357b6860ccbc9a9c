//! Gallery store commands.

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use folio_core::config::{Config, paths};
use folio_core::store::{GalleryClient, GalleryImage, NewGalleryImage};

fn client(config: &Config) -> Result<GalleryClient> {
    let Some(store) = config.store_config()? else {
        bail!(
            "No gallery store configured.\n\
             Set FOLIO_STORE_URL and FOLIO_STORE_KEY, or [store] in {}",
            paths::config_path().display()
        );
    };
    GalleryClient::new(store)
}

/// Lists images in display order. Store failures are logged and show up as an
/// empty gallery, matching what the interactive view does.
pub async fn list(config: &Config, json: bool) -> Result<()> {
    let client = client(config)?;
    let images = client.list_gallery_images().await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&images).context("serialize gallery images")?
        );
        return Ok(());
    }

    if images.is_empty() {
        println!("No gallery images found.");
        return Ok(());
    }

    println!("{}", image_table(&images));
    Ok(())
}

pub async fn add(config: &Config, image: &NewGalleryImage) -> Result<()> {
    url::Url::parse(&image.image_url)
        .with_context(|| format!("Invalid image URL: {}", image.image_url))?;

    let client = client(config)?;
    let created = client
        .add_gallery_image(image)
        .await
        .ok_or_else(|| anyhow!("Gallery image was not created (see log above)"))?;

    println!(
        "Added image {} \"{}\" at position {}",
        created.id, created.title, created.display_order
    );
    Ok(())
}

fn image_table(images: &[GalleryImage]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ORDER", "ID", "TITLE", "ALT TEXT", "URL", "ADDED"]);

    for image in images {
        table.add_row(vec![
            image.display_order.to_string(),
            image.id.to_string(),
            image.title.clone(),
            image.alt_text.clone(),
            image.image_url.clone(),
            image.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn image(id: i64, order: i32, title: &str) -> GalleryImage {
        GalleryImage {
            id,
            title: title.to_string(),
            description: None,
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            alt_text: format!("{title} alt"),
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            display_order: order,
        }
    }

    #[test]
    fn test_table_has_row_per_image() {
        let table = image_table(&[image(4, 1, "Sunset"), image(2, 2, "Harbor")]);
        let text = table.to_string();
        assert!(text.contains("TITLE"));
        assert!(text.contains("Sunset"));
        assert!(text.contains("Harbor"));
        assert!(text.contains("2024-03-09"));
        assert_eq!(table.row_iter().count(), 2);
    }
}
