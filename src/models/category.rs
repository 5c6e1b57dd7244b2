use serde::{Deserialize, Serialize};

use super::ids::CategoryCode;

/// Material category. Materials refer to a category by name, not by code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub code: CategoryCode,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Hex color used by the UI tag
    pub color: String,
    pub created_at: i64,
    pub updated_at: i64,
}
