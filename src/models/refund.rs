use serde::{Deserialize, Serialize};

use super::ids::{MemberId, OrderId, RefundId};

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
pub enum RefundStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Processed,
}

impl RefundStatus {
    /// Approved and processed refunds both carry approver fields.
    pub fn is_approved(self) -> bool {
        matches!(self, RefundStatus::Approved | RefundStatus::Processed)
    }
}

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
pub enum RefundType {
    #[default]
    Full,
    Partial,
    Compensation,
}

/// Refund request against an order. Reviewer fields are populated only for
/// the statuses that imply them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub id: RefundId,
    pub order_id: OrderId,
    pub order_code: String,
    pub amount: i64,
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: RefundType,
    pub status: RefundStatus,
    pub requested_by: MemberId,
    pub requested_by_name: String,
    pub requested_at: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_by: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<i64>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl RefundRequest {
    /// Reviewer member IDs that must resolve to admins.
    pub fn reviewers(&self) -> impl Iterator<Item = &MemberId> {
        self.approved_by
            .iter()
            .chain(self.rejected_by.iter())
            .chain(self.processed_by.iter())
    }
}
