use serde::{Deserialize, Serialize};

use super::ids::DepartmentCode;

/// A production department such as cutting or sewing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub code: DepartmentCode,
    pub name: String,
    /// Epoch milliseconds
    pub created_at: i64,
}
