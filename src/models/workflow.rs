use serde::{Deserialize, Serialize};

use super::ids::DepartmentCode;

/// A named production step owned by one department (e.g. "Cắt vải").
///
/// Templates are referenced from per-product
/// [`WorkflowAssignment`](super::order::WorkflowAssignment)s by ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub department: DepartmentCode,
}
