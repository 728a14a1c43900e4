//! Status - Asset and Assignment Status Labels

use serde::{Deserialize, Serialize};

/// Status codes reported by the asset API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    InStock,
    InUse,
    Broken,
    Maintenance,
    PendingRecall,
    PendingHandover,
    Lost,
    Liquidated,
    /// Licence / warranty still valid
    Active,
    /// Licence / warranty past its end date
    Expired,
}

impl AssetStatus {
    /// Parse a wire code. Matching is exact: no case folding.
    pub fn from_code(code: &str) -> Option<Self> {
        let status = match code {
            "IN_STOCK" => AssetStatus::InStock,
            "IN_USE" => AssetStatus::InUse,
            "BROKEN" => AssetStatus::Broken,
            "MAINTENANCE" => AssetStatus::Maintenance,
            "PENDING_RECALL" => AssetStatus::PendingRecall,
            "PENDING_HANDOVER" => AssetStatus::PendingHandover,
            "LOST" => AssetStatus::Lost,
            "LIQUIDATED" => AssetStatus::Liquidated,
            "ACTIVE" => AssetStatus::Active,
            "EXPIRED" => AssetStatus::Expired,
            _ => return None,
        };
        Some(status)
    }

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            AssetStatus::InStock => "IN_STOCK",
            AssetStatus::InUse => "IN_USE",
            AssetStatus::Broken => "BROKEN",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::PendingRecall => "PENDING_RECALL",
            AssetStatus::PendingHandover => "PENDING_HANDOVER",
            AssetStatus::Lost => "LOST",
            AssetStatus::Liquidated => "LIQUIDATED",
            AssetStatus::Active => "ACTIVE",
            AssetStatus::Expired => "EXPIRED",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::InStock => "In Stock",
            AssetStatus::InUse => "In Use",
            AssetStatus::Broken => "Broken",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::PendingRecall => "Pending Recall",
            AssetStatus::PendingHandover => "Pending Handover",
            AssetStatus::Lost => "Lost",
            AssetStatus::Liquidated => "Liquidated",
            AssetStatus::Active => "Active",
            AssetStatus::Expired => "Expired",
        }
    }

    pub fn all() -> &'static [AssetStatus] {
        &[
            AssetStatus::InStock,
            AssetStatus::InUse,
            AssetStatus::Broken,
            AssetStatus::Maintenance,
            AssetStatus::PendingRecall,
            AssetStatus::PendingHandover,
            AssetStatus::Lost,
            AssetStatus::Liquidated,
            AssetStatus::Active,
            AssetStatus::Expired,
        ]
    }
}

/// Label for a status code; unknown codes are returned unchanged
pub fn status_display_name(code: &str) -> &str {
    match AssetStatus::from_code(code) {
        Some(status) => status.display_name(),
        None => code,
    }
}
