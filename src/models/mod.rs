//! Entity records and the dataset document they are collected into.

pub mod category;
pub mod dataset;
pub mod department;
pub mod feedback;
pub mod finance_transaction;
pub mod ids;
pub mod inventory_transaction;
pub mod material;
pub mod member;
pub mod order;
pub mod refund;
pub mod warranty;
pub mod workflow;

pub use category::Category;
pub use dataset::{CollectionCounts, Dataset, MockDocument};
pub use department::Department;
pub use feedback::{CustomerFeedback, FeedbackType};
pub use finance_transaction::{FinanceCategory, FinanceTransaction, FinanceType, SourceType};
pub use ids::*;
pub use inventory_transaction::{InventoryTransaction, InventoryTxnType};
pub use material::Material;
pub use member::{Member, Role};
pub use order::{
    CustomerSource, Image, Order, OrderStatus, Product, ValueKind, WarrantyStatus,
    WorkflowAssignment,
};
pub use refund::{RefundRequest, RefundStatus, RefundType};
pub use warranty::WarrantyClaim;
pub use workflow::Workflow;

// serde `skip_serializing_if` helpers for omit-if-default fields
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
