use serde::{Deserialize, Serialize};

use super::ids::{InventoryTxnCode, MaterialId};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InventoryTxnType {
    #[default]
    Import,
    Export,
}

/// A stock movement for one material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransaction {
    pub code: InventoryTxnCode,
    pub material_id: MaterialId,
    pub material_name: String,
    #[serde(rename = "type")]
    pub kind: InventoryTxnType,
    pub quantity: i64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub price: i64,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub total_amount: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub supplier: String,
    /// Export reason; imports have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub created_at: i64,
}
