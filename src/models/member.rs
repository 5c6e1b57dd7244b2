use serde::{Deserialize, Serialize};

use super::ids::{DepartmentCode, MemberId};

/// Staff role. Only workers carry department assignments.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Sales,
    Worker,
    Admin,
    Development,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub code: MemberId,
    pub id: MemberId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: Role,

    /// Set for workers only; a worker belongs to exactly one department.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<DepartmentCode>,

    /// `YYYY-MM-DD`
    #[serde(rename = "date_of_birth")]
    pub date_of_birth: String,

    #[serde(default, skip_serializing_if = "super::is_false")]
    pub is_active: bool,

    pub created_at: i64,
}

impl Member {
    pub fn belongs_to(&self, department: &DepartmentCode) -> bool {
        self.departments.iter().any(|d| d == department)
    }
}
