use tracing::debug;

use super::codes::sequence_code;
use crate::models::{
    Dataset, FinanceCategory, FinanceTransaction, FinanceTxnId, FinanceType, InventoryTxnType,
    RefundRequest, SourceType,
};

/// Sequential finance ledger shared by the income, inventory and refund stages.
///
/// Order income is always recorded. Inventory and refund expenses are only
/// recorded while the ledger holds fewer than `cap` entries, so income alone
/// may push it past the cap.
#[derive(Debug)]
pub(crate) struct FinanceLedger {
    cap: usize,
    next_index: usize,
}

impl FinanceLedger {
    pub fn new(cap: usize) -> Self {
        Self { cap, next_index: 0 }
    }

    pub fn len(&self) -> usize {
        self.next_index
    }

    pub fn has_budget(&self) -> bool {
        self.next_index < self.cap
    }

    fn next_id(&mut self) -> FinanceTxnId {
        let id = FinanceTxnId::from(sequence_code("FIN", self.next_index));
        self.next_index += 1;
        id
    }

    /// One income record per confirmed or completed order, in order-ID order.
    pub fn record_order_income(&mut self, data: &mut Dataset) {
        let before = self.len();
        for (order_id, order) in &data.orders {
            let Some(amount) = order.income_amount() else {
                continue;
            };
            let id = self.next_id();
            data.finance_transactions.insert(
                id.clone(),
                FinanceTransaction {
                    id,
                    date: order.order_date,
                    kind: FinanceType::Income,
                    category: FinanceCategory::Order,
                    amount,
                    description: format!("Đơn hàng {}", order.code),
                    reference: order.code.clone(),
                    source_id: order_id.to_string(),
                    source_type: SourceType::Order,
                    created_at: order.order_date,
                    updated_at: order.updated_at,
                },
            );
        }
        debug!(count = self.len() - before, "order income recorded");
    }

    /// One expense per import transaction while the ledger has room.
    pub fn record_inventory_expenses(&mut self, data: &mut Dataset) {
        let before = self.len();
        for (code, txn) in &data.inventory_transactions {
            if txn.kind != InventoryTxnType::Import {
                continue;
            }
            if !self.has_budget() {
                break;
            }
            let id = self.next_id();
            data.finance_transactions.insert(
                id.clone(),
                FinanceTransaction {
                    id,
                    date: txn.created_at,
                    kind: FinanceType::Expense,
                    category: FinanceCategory::Inventory,
                    amount: txn.total_amount,
                    description: format!("Nhập kho {}", txn.material_name),
                    reference: code.to_string(),
                    source_id: txn.material_id.to_string(),
                    source_type: SourceType::Inventory,
                    created_at: txn.created_at,
                    updated_at: txn.created_at,
                },
            );
        }
        debug!(count = self.len() - before, "inventory expenses recorded");
    }

    /// Expense for a processed refund. Returns false when the ledger is full.
    pub fn record_refund_expense(
        &mut self,
        data: &mut Dataset,
        refund: &RefundRequest,
        refund_code: &str,
    ) -> bool {
        if !self.has_budget() {
            return false;
        }
        let id = self.next_id();
        data.finance_transactions.insert(
            id.clone(),
            FinanceTransaction {
                id,
                date: refund.updated_at,
                kind: FinanceType::Expense,
                category: FinanceCategory::Order,
                amount: refund.amount,
                description: format!("Hoàn tiền đơn hàng {}", refund.order_code),
                reference: refund_code.to_string(),
                source_id: refund.id.to_string(),
                source_type: SourceType::Refund,
                created_at: refund.updated_at,
                updated_at: refund.updated_at,
            },
        );
        true
    }
}
