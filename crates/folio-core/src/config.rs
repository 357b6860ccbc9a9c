//! Configuration management for folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::reveal::clamp_millis;
use crate::reveal::stagger::StaggerPolicy;
use crate::store::StoreConfig;
use crate::tabs::ViewId;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for folio configuration and data directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)

    use std::path::PathBuf;

    /// Returns the folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the directory interactive sessions log into.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
    }
}

/// Remote gallery store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Base URL of the hosted row store (e.g. `https://xyz.supabase.co`).
    pub base_url: Option<String>,
    /// Public (anon) API key.
    pub api_key: Option<String>,
    /// Table holding gallery image rows.
    pub table: String,
    /// Request timeout in seconds (0 disables).
    pub timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            table: "gallery_images".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Reveal timing for the portfolio views, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub item_delay_ms: f64,
    pub field_gap_ms: f64,
    pub title_step_ms: f64,
    pub year_step_ms: f64,
    pub home_delay_ms: f64,
    pub home_step_ms: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            item_delay_ms: 120.0,
            field_gap_ms: 250.0,
            title_step_ms: 12.0,
            year_step_ms: 20.0,
            home_delay_ms: 300.0,
            home_step_ms: 18.0,
        }
    }
}

impl RevealSettings {
    /// Stagger policy for the project list. Negative values clamp to zero.
    pub fn stagger(&self) -> StaggerPolicy {
        StaggerPolicy {
            item_delay: clamp_millis(self.item_delay_ms),
            field_gap: clamp_millis(self.field_gap_ms),
            text_step: clamp_millis(self.title_step_ms),
            trailing_step: clamp_millis(self.year_step_ms),
        }
    }

    /// Delay and step for the home view bio.
    pub fn home(&self) -> (Duration, Duration) {
        (
            clamp_millis(self.home_delay_ms),
            clamp_millis(self.home_step_ms),
        )
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// View shown at startup.
    pub start_view: ViewId,

    /// Log filter used when `FOLIO_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Gallery store settings.
    pub store: StoreSettings,

    /// Reveal timing.
    pub reveal: RevealSettings,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the gallery store connection.
    ///
    /// Resolution order for each value: environment (`FOLIO_STORE_URL`,
    /// `FOLIO_STORE_KEY`) > config file. Returns `None` when either the URL or
    /// the key is missing: the app then runs on its built-in photo list.
    ///
    /// # Errors
    /// Returns an error if the resolved base URL is not a valid URL.
    pub fn store_config(&self) -> Result<Option<StoreConfig>> {
        let base_url = env_or("FOLIO_STORE_URL", self.store.base_url.as_deref());
        let api_key = env_or("FOLIO_STORE_KEY", self.store.api_key.as_deref());

        let (Some(base_url), Some(api_key)) = (base_url, api_key) else {
            return Ok(None);
        };

        url::Url::parse(&base_url)
            .with_context(|| format!("Invalid store base URL: {base_url}"))?;

        let timeout = (self.store.timeout_secs > 0)
            .then(|| Duration::from_secs(self.store.timeout_secs));

        Ok(Some(StoreConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table: self.store.table.clone(),
            timeout,
        }))
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    ///
    /// # Errors
    /// Returns an error if serialization or template parsing fails.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

fn env_or(var: &str, fallback: Option<&str>) -> Option<String> {
    let from_env = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
    from_env
        .as_deref()
        .or(fallback)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
