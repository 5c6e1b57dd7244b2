use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::{AssignmentId, DepartmentCode, MemberId, ProductId, WorkflowId};

/// Enum representing the possible statuses of an order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Statuses that produce an income record in the finance ledger.
    pub fn records_income(self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Completed)
    }
}

/// Warranty claims share the order status set.
pub type WarrantyStatus = OrderStatus;

/// Channel the customer came in through.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CustomerSource {
    #[default]
    Facebook,
    Zalo,
    Instagram,
    Tiktok,
    Website,
    Referral,
    WalkIn,
    Phone,
    Other,
}

/// How a discount or deposit value is interpreted.
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
pub enum ValueKind {
    /// Flat amount in VND
    #[default]
    Amount,
    /// Whole-number percent of a base amount
    Percentage,
}

impl ValueKind {
    /// Resolve `value` against `base`. Percentages truncate toward zero.
    pub fn resolve(self, base: i64, value: i64) -> i64 {
        match self {
            ValueKind::Amount => value,
            ValueKind::Percentage => base * value / 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub uid: String,
    pub name: String,
    pub url: String,
}

/// Per-product runtime instance of one department's step in the production
/// path: which templates it bundles, who works it and whether it is done.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowAssignment {
    pub department_code: DepartmentCode,
    /// Template IDs, parallel to `workflow_name`
    pub workflow_code: Vec<WorkflowId>,
    pub workflow_name: Vec<String>,
    /// Assigned workers; empty when the department has none
    pub members: Vec<MemberId>,
    pub is_done: bool,
    pub updated_at: i64,
}

/// A line item embedded in an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub quantity: i64,
    /// Unit price in VND
    pub price: i64,
    pub commission_percentage: f64,
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images_done: Vec<Image>,
    pub workflows: BTreeMap<AssignmentId, WorkflowAssignment>,
}

impl Product {
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity
    }

    pub fn has_completed_workflow(&self) -> bool {
        self.workflows.values().any(|wf| wf.is_done)
    }
}

/// A customer order with its embedded products.
///
/// Money fields are integer VND. Totals are computed once at creation:
/// `total_amount = subtotal - discount_amount + shipping_fee`, never clamped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Date-stamped business code, e.g. `ORD20240517003`
    pub code: String,
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub customer_source: CustomerSource,
    pub order_date: i64,
    pub delivery_date: i64,
    pub created_by: MemberId,
    pub created_by_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant_id: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant_name: Option<String>,

    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    /// Raw discount value, interpreted through `discount_type`
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub discount: i64,
    pub discount_type: ValueKind,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub shipping_fee: i64,

    pub products: BTreeMap<ProductId, Product>,
    pub status: OrderStatus,
    pub total_amount: i64,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub discount_amount: i64,
    pub subtotal: i64,

    /// Deposit percent in [30, 70)
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub deposit: i64,
    pub deposit_type: ValueKind,
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub deposit_amount: i64,
    #[serde(default, skip_serializing_if = "super::is_false")]
    pub is_deposit_paid: bool,
}

impl Order {
    /// Sum of `price * quantity` over the embedded products.
    pub fn line_items_subtotal(&self) -> i64 {
        self.products.values().map(Product::line_total).sum()
    }

    /// Amount recorded as income when the order is confirmed or completed.
    pub fn income_amount(&self) -> Option<i64> {
        match self.status {
            OrderStatus::Confirmed => Some(self.deposit_amount),
            OrderStatus::Completed => Some(self.total_amount - self.deposit_amount),
            _ => None,
        }
    }

    /// Refund requested against this order: the deposit when one was taken,
    /// half the total otherwise.
    pub fn refundable_amount(&self) -> i64 {
        if self.deposit_amount > 0 {
            self.deposit_amount
        } else {
            self.total_amount / 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_truncates_toward_zero() {
        assert_eq!(ValueKind::Percentage.resolve(1_000_005, 15), 150_000);
        assert_eq!(ValueKind::Percentage.resolve(-999, 50), -499);
        assert_eq!(ValueKind::Amount.resolve(1_000_000, 75_000), 75_000);
    }

    #[test]
    fn only_confirmed_and_completed_record_income() {
        use strum::IntoEnumIterator;

        let income: Vec<OrderStatus> = OrderStatus::iter()
            .filter(|s| s.records_income())
            .collect();
        assert_eq!(income, [OrderStatus::Confirmed, OrderStatus::Completed]);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(OrderStatus::OnHold.to_string(), "on_hold");
        assert_eq!(
            serde_json::to_string(&CustomerSource::WalkIn).unwrap(),
            "\"walk_in\""
        );
    }
}
