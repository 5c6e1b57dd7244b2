use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::department::Department;
use super::feedback::CustomerFeedback;
use super::finance_transaction::FinanceTransaction;
use super::ids::*;
use super::inventory_transaction::InventoryTransaction;
use super::material::Material;
use super::member::{Member, Role};
use super::order::Order;
use super::refund::RefundRequest;
use super::warranty::WarrantyClaim;
use super::workflow::Workflow;
use crate::errors::{GeneratorError, GeneratorResult};

/// Root of the written document. All collections live under one namespace key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MockDocument {
    pub xoxo: Dataset,
}

/// Every generated collection, keyed by ID.
///
/// `BTreeMap` keeps iteration in ID order so a seeded run is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub departments: BTreeMap<DepartmentCode, Department>,
    pub members: BTreeMap<MemberId, Member>,
    pub workflows: BTreeMap<WorkflowId, Workflow>,
    pub orders: BTreeMap<OrderId, Order>,
    pub warranty_claims: BTreeMap<WarrantyClaimId, WarrantyClaim>,
    pub categories: BTreeMap<CategoryCode, Category>,
    pub materials: BTreeMap<MaterialId, Material>,
    pub inventory_transactions: BTreeMap<InventoryTxnCode, InventoryTransaction>,
    pub finance_transactions: BTreeMap<FinanceTxnId, FinanceTransaction>,
    pub refunds: BTreeMap<RefundId, RefundRequest>,
    pub feedbacks: BTreeMap<FeedbackId, CustomerFeedback>,
}

impl Dataset {
    pub fn member(&self, id: &MemberId) -> GeneratorResult<&Member> {
        self.members
            .get(id)
            .ok_or_else(|| GeneratorError::missing("members", id))
    }

    pub fn order(&self, id: &OrderId) -> GeneratorResult<&Order> {
        self.orders
            .get(id)
            .ok_or_else(|| GeneratorError::missing("orders", id))
    }

    pub fn workflow(&self, id: &WorkflowId) -> GeneratorResult<&Workflow> {
        self.workflows
            .get(id)
            .ok_or_else(|| GeneratorError::missing("workflows", id))
    }

    pub fn material(&self, id: &MaterialId) -> GeneratorResult<&Material> {
        self.materials
            .get(id)
            .ok_or_else(|| GeneratorError::missing("materials", id))
    }

    /// Member IDs holding `role`, in ID order.
    pub fn member_ids_with_role(&self, role: Role) -> Vec<MemberId> {
        self.members
            .values()
            .filter(|m| m.role == role)
            .map(|m| m.id.clone())
            .collect()
    }

    /// Workers whose department list includes `department`.
    pub fn workers_in(&self, department: &DepartmentCode) -> Vec<MemberId> {
        self.members
            .values()
            .filter(|m| m.role == Role::Worker && m.belongs_to(department))
            .map(|m| m.id.clone())
            .collect()
    }

    /// Workflow templates owned by `department`, in ID order.
    pub fn workflows_in(&self, department: &DepartmentCode) -> Vec<WorkflowId> {
        self.workflows
            .iter()
            .filter(|(_, wf)| &wf.department == department)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            departments: self.departments.len(),
            members: self.members.len(),
            workflows: self.workflows.len(),
            categories: self.categories.len(),
            materials: self.materials.len(),
            orders: self.orders.len(),
            warranty_claims: self.warranty_claims.len(),
            inventory_transactions: self.inventory_transactions.len(),
            finance_transactions: self.finance_transactions.len(),
            refunds: self.refunds.len(),
            feedbacks: self.feedbacks.len(),
        }
    }
}

/// Per-collection entity counts, printed after a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub departments: usize,
    pub members: usize,
    pub workflows: usize,
    pub categories: usize,
    pub materials: usize,
    pub orders: usize,
    pub warranty_claims: usize,
    pub inventory_transactions: usize,
    pub finance_transactions: usize,
    pub refunds: usize,
    pub feedbacks: usize,
}

impl fmt::Display for CollectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated:")?;
        writeln!(f, "  - {} departments", self.departments)?;
        writeln!(f, "  - {} members", self.members)?;
        writeln!(f, "  - {} workflows", self.workflows)?;
        writeln!(f, "  - {} categories", self.categories)?;
        writeln!(f, "  - {} materials", self.materials)?;
        writeln!(f, "  - {} orders", self.orders)?;
        writeln!(f, "  - {} warranty claims", self.warranty_claims)?;
        writeln!(f, "  - {} inventory transactions", self.inventory_transactions)?;
        writeln!(f, "  - {} finance transactions", self.finance_transactions)?;
        writeln!(f, "  - {} refunds", self.refunds)?;
        write!(f, "  - {} feedbacks", self.feedbacks)
    }
}
