use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::{MemberId, OrderId, ProductId, WarrantyClaimId};
use super::order::{CustomerSource, Product, WarrantyStatus};

/// A warranty claim raised against a delivered order.
///
/// Customer fields and the product map are copied from the source order at
/// creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaim {
    pub id: WarrantyClaimId,
    pub code: String,
    pub original_order_id: OrderId,
    pub original_order_code: String,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub customer_source: CustomerSource,
    pub order_date: i64,
    pub delivery_date: i64,
    pub created_by: MemberId,
    pub created_by_name: String,
    pub products: BTreeMap<ProductId, Product>,
    pub status: WarrantyStatus,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub total_amount: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
