//! Referential and arithmetic checks over a generated dataset.
//!
//! The generator builds every reference from keys it has already inserted, so
//! a non-empty report means a pipeline bug rather than bad input.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{
    Dataset, FinanceTransaction, Member, MemberId, Order, RefundStatus, Role,
    SourceType, WorkflowAssignment,
};

/// One broken invariant on one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrityIssue {
    pub collection: &'static str,
    pub id: String,
    pub problem: String,
}

impl IntegrityIssue {
    pub fn new(collection: &'static str, id: impl fmt::Display, problem: impl Into<String>) -> Self {
        Self {
            collection,
            id: id.to_string(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.collection, self.id, self.problem)
    }
}

/// Walk every cross-collection reference and order total. Returns all issues
/// found; an empty vector means the dataset is consistent.
pub fn check(data: &Dataset) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    check_keys(data, &mut issues);
    check_members(data, &mut issues);
    check_workflows(data, &mut issues);
    check_orders(data, &mut issues);
    check_order_references(data, &mut issues);
    check_inventory(data, &mut issues);
    check_finance(data, &mut issues);
    issues
}

fn check_keys(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    fn mismatched<K: fmt::Display + PartialEq<V>, V: ?Sized, T>(
        collection: &'static str,
        map: &BTreeMap<K, T>,
        record_id: impl Fn(&T) -> &V,
        issues: &mut Vec<IntegrityIssue>,
    ) {
        for (key, record) in map {
            if *key != *record_id(record) {
                issues.push(IntegrityIssue::new(collection, key, "key differs from record id"));
            }
        }
    }

    mismatched("departments", &data.departments, |d| &d.code, issues);
    mismatched("members", &data.members, |m| &m.id, issues);
    mismatched("materials", &data.materials, |m| &m.id, issues);
    mismatched("categories", &data.categories, |c| &c.code, issues);
    mismatched("warrantyClaims", &data.warranty_claims, |w| &w.id, issues);
    mismatched("inventoryTransactions", &data.inventory_transactions, |t| &t.code, issues);
    mismatched("financeTransactions", &data.finance_transactions, |t| &t.id, issues);
    mismatched("refunds", &data.refunds, |r| &r.id, issues);
    mismatched("feedbacks", &data.feedbacks, |f| &f.id, issues);
}

fn check_members(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (id, member) in &data.members {
        match member.role {
            Role::Worker => match member.departments.as_slice() {
                [department] if data.departments.contains_key(department) => {}
                [department] => issues.push(IntegrityIssue::new(
                    "members",
                    id,
                    format!("unknown department {}", department),
                )),
                other => issues.push(IntegrityIssue::new(
                    "members",
                    id,
                    format!("worker has {} departments, expected 1", other.len()),
                )),
            },
            _ if !member.departments.is_empty() => issues.push(IntegrityIssue::new(
                "members",
                id,
                format!("{} member assigned to departments", member.role),
            )),
            _ => {}
        }
    }
}

fn check_workflows(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (id, workflow) in &data.workflows {
        if !data.departments.contains_key(&workflow.department) {
            issues.push(IntegrityIssue::new(
                "workflows",
                id,
                format!("unknown department {}", workflow.department),
            ));
        }
    }
}

fn member_with_role<'a>(
    data: &'a Dataset,
    id: &MemberId,
    role: Role,
) -> Result<&'a Member, String> {
    let member = data
        .members
        .get(id)
        .ok_or_else(|| format!("unknown member {}", id))?;
    if member.role == role {
        Ok(member)
    } else {
        Err(format!("member {} is {}, expected {}", id, member.role, role))
    }
}

fn check_orders(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (id, order) in &data.orders {
        let mut report = |problem: String| issues.push(IntegrityIssue::new("orders", id, problem));

        if let Err(problem) = member_with_role(data, &order.created_by, Role::Sales) {
            report(format!("creator: {}", problem));
        }
        if let Some(consultant) = &order.consultant_id {
            if let Err(problem) = member_with_role(data, consultant, Role::Sales) {
                report(format!("consultant: {}", problem));
            }
        }

        for problem in order_arithmetic(order) {
            report(problem);
        }

        for (product_id, product) in &order.products {
            for (assignment_id, assignment) in &product.workflows {
                let at = format!("{}/{}", product_id, assignment_id);
                for problem in assignment_problems(data, assignment) {
                    report(format!("{}: {}", at, problem));
                }
            }
        }
    }
}

fn order_arithmetic(order: &Order) -> Vec<String> {
    let mut problems = Vec::new();
    let subtotal = order.line_items_subtotal();
    if order.subtotal != subtotal {
        problems.push(format!(
            "subtotal {} differs from line items {}",
            order.subtotal, subtotal
        ));
    }
    let total = order.subtotal - order.discount_amount + order.shipping_fee;
    if order.total_amount != total {
        problems.push(format!("total {} differs from computed {}", order.total_amount, total));
    }
    if order.total_amount >= 0 && order.deposit_amount > order.total_amount {
        problems.push(format!(
            "deposit {} exceeds total {}",
            order.deposit_amount, order.total_amount
        ));
    }
    problems
}

fn assignment_problems(data: &Dataset, assignment: &WorkflowAssignment) -> Vec<String> {
    let department = &assignment.department_code;
    let mut problems = Vec::new();
    if !data.departments.contains_key(department) {
        problems.push(format!("unknown department {}", department));
    }
    if assignment.workflow_code.len() != assignment.workflow_name.len() {
        problems.push("workflow codes and names differ in length".to_string());
    }
    for workflow_id in &assignment.workflow_code {
        match data.workflows.get(workflow_id) {
            Some(workflow) if &workflow.department == department => {}
            Some(workflow) => problems.push(format!(
                "workflow {} belongs to {}",
                workflow_id, workflow.department
            )),
            None => problems.push(format!("unknown workflow {}", workflow_id)),
        }
    }
    for member_id in &assignment.members {
        match member_with_role(data, member_id, Role::Worker) {
            Ok(member) if member.belongs_to(department) => {}
            Ok(_) => problems.push(format!("worker {} is outside {}", member_id, department)),
            Err(problem) => problems.push(problem),
        }
    }
    problems
}

fn check_order_references(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (id, claim) in &data.warranty_claims {
        if !data.orders.contains_key(&claim.original_order_id) {
            issues.push(IntegrityIssue::new(
                "warrantyClaims",
                id,
                format!("unknown order {}", claim.original_order_id),
            ));
        }
    }

    for (id, refund) in &data.refunds {
        if !data.orders.contains_key(&refund.order_id) {
            issues.push(IntegrityIssue::new(
                "refunds",
                id,
                format!("unknown order {}", refund.order_id),
            ));
        }
        for reviewer in refund.reviewers() {
            if let Err(problem) = member_with_role(data, reviewer, Role::Admin) {
                issues.push(IntegrityIssue::new("refunds", id, format!("reviewer: {}", problem)));
            }
        }
    }

    for (id, feedback) in &data.feedbacks {
        if !data.orders.contains_key(&feedback.order_id) {
            issues.push(IntegrityIssue::new(
                "feedbacks",
                id,
                format!("unknown order {}", feedback.order_id),
            ));
        }
    }
}

fn check_inventory(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (code, txn) in &data.inventory_transactions {
        if !data.materials.contains_key(&txn.material_id) {
            issues.push(IntegrityIssue::new(
                "inventoryTransactions",
                code,
                format!("unknown material {}", txn.material_id),
            ));
        }
    }
}

fn check_finance(data: &Dataset, issues: &mut Vec<IntegrityIssue>) {
    for (id, txn) in &data.finance_transactions {
        if let Err(problem) = finance_source(data, txn) {
            issues.push(IntegrityIssue::new("financeTransactions", id, problem));
        }
    }
}

fn finance_source(data: &Dataset, txn: &FinanceTransaction) -> Result<(), String> {
    let source = txn.source_id.as_str();
    match txn.source_type {
        SourceType::Order => match data.orders.get(source) {
            Some(order) if order.status.records_income() => Ok(()),
            Some(order) => Err(format!("order {} is {}", source, order.status)),
            None => Err(format!("unknown order {}", source)),
        },
        SourceType::Inventory => {
            if data.materials.contains_key(source) {
                Ok(())
            } else {
                Err(format!("unknown material {}", source))
            }
        }
        SourceType::Refund => match data.refunds.get(source) {
            Some(refund) if refund.status == RefundStatus::Processed => Ok(()),
            Some(refund) => Err(format!("refund {} is {}", source, refund.status)),
            None => Err(format!("unknown refund {}", source)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::Generator;
    use crate::models::{OrderId, OrderStatus};
    use chrono::{TimeZone, Utc};

    fn generated() -> Dataset {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let config = GeneratorConfig {
            num_refunds: 10,
            ..GeneratorConfig::default()
        };
        Generator::seeded(config, 99, now)
            .unwrap()
            .generate()
            .unwrap()
            .xoxo
    }

    fn first_order(data: &mut Dataset) -> &mut Order {
        data.orders.get_mut(&OrderId::from("ORD_001")).unwrap()
    }

    #[test]
    fn generated_dataset_is_consistent() {
        let issues = check(&generated());
        assert!(issues.is_empty(), "{:#?}", issues);
    }

    #[test]
    fn detects_total_drift() {
        let mut data = generated();
        first_order(&mut data).total_amount += 1;

        let issues = check(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].collection, "orders");
        assert_eq!(issues[0].id, "ORD_001");
        assert!(issues[0].problem.starts_with("total"));
    }

    #[test]
    fn detects_non_sales_creator() {
        let mut data = generated();
        first_order(&mut data).created_by = MemberId::from("ADMIN_001");

        let issues = check(&data);
        assert!(issues
            .iter()
            .any(|i| i.problem == "creator: member ADMIN_001 is admin, expected sales"));
    }

    #[test]
    fn detects_worker_outside_department() {
        let mut data = generated();
        let outsider = data
            .members
            .values()
            .find(|m| m.role == Role::Worker)
            .map(|m| (m.id.clone(), m.departments[0].clone()))
            .unwrap();

        let order = first_order(&mut data);
        let assignment = order
            .products
            .values_mut()
            .flat_map(|p| p.workflows.values_mut())
            .find(|a| a.department_code != outsider.1)
            .unwrap();
        assignment.members = vec![outsider.0.clone()];

        let issues = check(&data);
        assert!(issues
            .iter()
            .any(|i| i.problem.contains(&format!("worker {} is outside", outsider.0))));
    }

    #[test]
    fn detects_dangling_references() {
        let mut data = generated();
        data.orders.remove(&OrderId::from("ORD_001"));
        data.members.remove(&MemberId::from("WORKER_001"));

        let issues = check(&data);
        let references_order = issues
            .iter()
            .filter(|i| i.problem == "unknown order ORD_001")
            .count();
        let references_worker = issues
            .iter()
            .filter(|i| i.problem.contains("unknown member WORKER_001"))
            .count();

        // every record still citing the removed order is reported once
        let expected = data
            .warranty_claims
            .values()
            .filter(|w| w.original_order_id.as_str() == "ORD_001")
            .count()
            + data
                .refunds
                .values()
                .filter(|r| r.order_id.as_str() == "ORD_001")
                .count()
            + data
                .feedbacks
                .values()
                .filter(|f| f.order_id.as_str() == "ORD_001")
                .count()
            + data
                .finance_transactions
                .values()
                .filter(|t| t.source_type == SourceType::Order && t.source_id == "ORD_001")
                .count();
        assert_eq!(references_order, expected);

        let staffed = data
            .orders
            .values()
            .flat_map(|o| o.products.values())
            .flat_map(|p| p.workflows.values())
            .filter(|a| a.members.iter().any(|m| m.as_str() == "WORKER_001"))
            .count();
        assert_eq!(references_worker, staffed);
    }

    #[test]
    fn detects_income_from_open_order() {
        let mut data = generated();
        let income_source = data
            .finance_transactions
            .values()
            .find(|t| t.source_type == SourceType::Order)
            .map(|t| OrderId::from(t.source_id.as_str()))
            .unwrap();
        data.orders.get_mut(&income_source).unwrap().status = OrderStatus::Pending;

        let issues = check(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].collection, "financeTransactions");
        assert_eq!(
            issues[0].problem,
            format!("order {} is pending", income_source)
        );
    }

    #[test]
    fn issue_display_names_the_record() {
        let issue = IntegrityIssue::new("orders", "ORD_002", "creator missing");
        assert_eq!(issue.to_string(), "orders/ORD_002: creator missing");
    }
}
