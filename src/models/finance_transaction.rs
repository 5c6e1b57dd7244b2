use serde::{Deserialize, Serialize};

use super::ids::FinanceTxnId;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FinanceType {
    #[default]
    Income,
    Expense,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FinanceCategory {
    #[default]
    Order,
    Inventory,
}

/// Collection a derived finance record points back to through `source_id`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceType {
    /// `source_id` is an order key
    #[default]
    Order,
    /// `source_id` is a material ID
    Inventory,
    /// `source_id` is a refund ID
    Refund,
}

/// A ledger entry derived from an order, an inventory import or a processed refund.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceTransaction {
    pub id: FinanceTxnId,
    pub date: i64,
    #[serde(rename = "type")]
    pub kind: FinanceType,
    pub category: FinanceCategory,
    pub amount: i64,
    pub description: String,
    /// Business code of the source (order code, transaction code, refund code)
    pub reference: String,
    pub source_id: String,
    pub source_type: SourceType,
    pub created_at: i64,
    pub updated_at: i64,
}
