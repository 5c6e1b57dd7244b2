use serde::{Deserialize, Serialize};

use super::ids::{FeedbackId, MemberId, OrderId};

/// Feedback categories as labelled in the back office.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::EnumIter)]
pub enum FeedbackType {
    #[default]
    #[serde(rename = "Khen")]
    Praise,
    #[serde(rename = "Chê")]
    Criticism,
    #[serde(rename = "Bức xúc")]
    Frustration,
    #[serde(rename = "Góp ý")]
    Suggestion,
}

impl FeedbackType {
    /// Negative feedback is rated 1-2, everything else 3-5.
    pub fn is_negative(self) -> bool {
        matches!(self, FeedbackType::Criticism | FeedbackType::Frustration)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFeedback {
    pub id: FeedbackId,
    pub order_id: OrderId,
    pub order_code: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub feedback_type: FeedbackType,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub collected_by: MemberId,
    pub collected_by_name: String,
    pub collected_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}
