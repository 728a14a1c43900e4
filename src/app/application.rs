//! Application - CLI Entry Wiring
//!
//! Loads configuration, opens persisted storage and renders the asset list
//! through the formatting and lookup helpers.

use std::path::PathBuf;

use crate::components::sidebar::stored_sidebar_state;
use crate::constants::{CONFIG_FILE_NAME, STORAGE_FILE_NAME};
use crate::domain::asset::{AssetRecord, AssetRow};
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, get_or_create_data_dir};
use crate::services::http::{HttpFetch, ReqwestFetcher};
use crate::services::loader::load_json_list;
use crate::services::runtime::block_on;
use crate::services::storage::FileStore;
use crate::utils::config_store::{load_toml_file, save_toml_file};

/// Path of `config.toml`
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Configuration plus where it came from. Loading runs before logging is
/// installed, so callers report `created` once the subscriber is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    /// Defaults were written because no file existed
    pub created: bool,
}

/// Load `config.toml` from the config directory
pub fn load_config() -> Result<LoadedConfig> {
    load_config_from(config_path()?)
}

/// Load the configuration at `path`, writing defaults on first run
pub fn load_config_from(path: impl Into<PathBuf>) -> Result<LoadedConfig> {
    let path = path.into();
    if !path.exists() {
        let config = AppConfig::default();
        save_toml_file(&path, &config)?;
        return Ok(LoadedConfig {
            config,
            path,
            created: true,
        });
    }
    Ok(LoadedConfig {
        config: load_toml_file(&path)?,
        path,
        created: false,
    })
}

/// Open the persisted UI state store in the data directory
pub fn open_storage() -> Result<FileStore> {
    FileStore::open(get_or_create_data_dir()?.join(STORAGE_FILE_NAME))
}

/// Fetch the asset list and turn it into display rows
pub async fn list_assets<F>(fetcher: &F, url: &str) -> Vec<AssetRow>
where
    F: HttpFetch + ?Sized,
{
    let records: Vec<AssetRecord> = load_json_list(fetcher, url).await;
    records.iter().map(AssetRow::from_record).collect()
}

/// Print the asset list from `url_override` or the configured endpoint
pub fn run_app(config: &AppConfig, url_override: Option<String>) -> Result<()> {
    let url = url_override.unwrap_or_else(|| config.data.assets_url.clone());

    match open_storage() {
        Ok(store) => {
            let state = stored_sidebar_state(&store);
            tracing::debug!(?state, path = %store.path().display(), "Persisted sidebar state");
        }
        Err(e) => tracing::warn!(error = %e, "Persisted UI state unavailable"),
    }

    let fetcher = ReqwestFetcher::new();
    let rows = block_on(list_assets(&fetcher, &url));
    tracing::info!(url = %url, count = rows.len(), "Loaded assets");

    if rows.is_empty() {
        println!("No assets.");
        return Ok(());
    }
    for row in &rows {
        println!("{}", row.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_load_config_writes_defaults_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let first = load_config_from(&path).expect("first load");
        assert!(first.created);
        assert!(path.exists());
        assert_eq!(first.config, AppConfig::default());

        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").expect("write");
        let second = load_config_from(&path).expect("second load");
        assert!(!second.created);
        assert_eq!(second.config.log.level, "debug");
    }

    #[tokio::test]
    async fn test_list_assets_formats_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "ThinkPad X1", "type": "Laptop", "status": "IN_STOCK", "purchaseDate": "2024-03-15", "price": 1000000 },
                { "name": "Office chair", "type": "Chair", "status": "BROKEN" }
            ])))
            .mount(&server)
            .await;

        let rows = list_assets(&ReqwestFetcher::new(), &server.uri()).await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "In Stock");
        assert_eq!(rows[0].purchased, "Mar 15, 2024");
        assert_eq!(rows[0].price, "1.000.000\u{a0}₫");
        assert_eq!(rows[1].icon, "🪑");
        assert_eq!(rows[1].price, "N/A");
    }

    #[tokio::test]
    async fn test_list_assets_on_server_error_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let rows = list_assets(&ReqwestFetcher::new(), &server.uri()).await;
        assert!(rows.is_empty());
    }
}
