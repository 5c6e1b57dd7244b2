use serde::{Deserialize, Serialize};

use super::ids::MaterialId;

/// A stocked raw material.
///
/// Stock levels are set once at generation time; inventory transactions do
/// not decrement them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,

    /// Category name (not code)
    pub category: String,

    pub stock_quantity: i64,
    pub unit: String,
    pub min_threshold: i64,
    pub max_capacity: i64,
    pub supplier: String,

    /// Unit import price in VND
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub import_price: i64,

    /// `YYYY-MM-DD`
    pub last_updated: String,

    pub long_stock_alert_days: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
