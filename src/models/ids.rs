//! Typed identifiers for every collection.
//!
//! Each wrapper serializes as a bare string so the document keeps the flat
//! `ID -> record` shape, while generator code cannot hand a member ID to a
//! field that expects an order ID.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // Lets maps keyed by the wrapper be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

typed_id!(
    /// Department code, e.g. `DEPT_001`.
    DepartmentCode
);
typed_id!(
    /// Member ID; doubles as the member code (`SALES_001`, `WORKER_004`).
    MemberId
);
typed_id!(
    /// Workflow template ID, e.g. `WF_007`.
    WorkflowId
);
typed_id!(CategoryCode);
typed_id!(
    /// Material ID, e.g. `MAT_000003`.
    MaterialId
);
typed_id!(
    /// Order key, e.g. `ORD_001`. Distinct from the date-stamped order code.
    OrderId
);
typed_id!(
    /// Product key inside an order, e.g. `PROD_ORD_001_2`.
    ProductId
);
typed_id!(
    /// Runtime workflow assignment key inside a product.
    AssignmentId
);
typed_id!(WarrantyClaimId);
typed_id!(
    /// Inventory transaction code, e.g. `TXN_000012`.
    InventoryTxnCode
);
typed_id!(FinanceTxnId);
typed_id!(RefundId);
typed_id!(FeedbackId);
