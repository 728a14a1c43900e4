//! Asset - Asset List Records and Their Display Row

use serde::Deserialize;
use serde_json::Value;

use crate::domain::device::device_icon;
use crate::domain::status::status_display_name;
use crate::utils::format::{format_currency, format_date_value};

/// One entry of the asset list payload. Every field is optional so a sparse
/// record still renders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetRecord {
    pub id: Option<Value>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Value,
    pub price: Option<f64>,
}

/// Display-ready strings for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub icon: String,
    pub name: String,
    pub status: String,
    pub purchased: String,
    pub price: String,
}

impl AssetRow {
    pub fn from_record(record: &AssetRecord) -> Self {
        Self {
            icon: device_icon(record.device_type.as_deref().unwrap_or_default()).to_string(),
            name: record.name.clone().unwrap_or_else(|| "-".to_string()),
            status: record
                .status
                .as_deref()
                .map(|code| status_display_name(code).to_string())
                .unwrap_or_else(|| "-".to_string()),
            purchased: format_date_value(&record.purchase_date),
            price: format_currency(record.price),
        }
    }

    /// Single-line rendering used by the CLI
    pub fn render(&self) -> String {
        format!(
            "{} {:<28} {:<18} {:<14} {}",
            self.icon, self.name, self.status, self.purchased, self.price
        )
    }
}
