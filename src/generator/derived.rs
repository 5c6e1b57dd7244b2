//! Records derived from a sampled subset of orders: warranty claims, refund
//! requests and customer feedback.

use rand::Rng;
use tracing::debug;

use super::codes::{business_code, generate_id};
use super::fields::{self, DAY_MS};
use super::finance::FinanceLedger;
use super::Generator;
use crate::errors::GeneratorResult;
use crate::models::{
    CustomerFeedback, Dataset, FeedbackId, FeedbackType, MemberId, RefundId, RefundRequest,
    RefundStatus, Role, WarrantyClaim, WarrantyClaimId,
};

const REFUND_REASON: &str = "Khách hàng yêu cầu hoàn tiền";
const REJECTION_REASON: &str = "Không đủ điều kiện hoàn tiền";

impl<R: Rng> Generator<R> {
    /// Warranty claims snapshot the customer and product fields of their order.
    pub(super) fn derive_warranty_claims(&mut self, data: &mut Dataset) -> GeneratorResult<()> {
        let sampled = self.sample_orders(data, self.config.num_warranty_claims);

        for (i, order_id) in sampled.into_iter().enumerate() {
            let id = WarrantyClaimId::from(generate_id("WC", i));
            let claim = {
                let order = data.order(&order_id)?;
                WarrantyClaim {
                    id: id.clone(),
                    code: business_code("WC", &self.now, i),
                    original_order_code: order.code.clone(),
                    customer_name: order.customer_name.clone(),
                    phone: order.phone.clone(),
                    email: order.email.clone(),
                    address: order.address.clone(),
                    customer_source: order.customer_source,
                    order_date: order.order_date,
                    delivery_date: order.delivery_date,
                    created_by: order.created_by.clone(),
                    created_by_name: order.created_by_name.clone(),
                    products: order.products.clone(),
                    status: fields::pick_variant(&mut self.rng),
                    total_amount: order.total_amount,
                    notes: format!("Khiếu nại cho đơn hàng {}", order.code),
                    issues: self
                        .catalog
                        .warranty_issues
                        .iter()
                        .map(|issue| issue.to_string())
                        .collect(),
                    created_at: order.order_date
                        + fields::millis_within(&mut self.rng, 7 * DAY_MS),
                    updated_at: order.order_date
                        + fields::millis_within(&mut self.rng, 10 * DAY_MS),
                    original_order_id: order_id,
                }
            };
            data.warranty_claims.insert(id, claim);
        }

        debug!(count = data.warranty_claims.len(), "warranty claims derived");
        Ok(())
    }

    /// Refund requests with status-dependent reviewer fields. Every processed
    /// refund also books an expense while the finance ledger has room.
    pub(super) fn derive_refunds(
        &mut self,
        data: &mut Dataset,
        ledger: &mut FinanceLedger,
    ) -> GeneratorResult<()> {
        let sampled = self.sample_orders(data, self.config.num_refunds);
        let admins = data.member_ids_with_role(Role::Admin);

        for (i, order_id) in sampled.into_iter().enumerate() {
            let id = RefundId::from(generate_id("RF", i));
            let refund_code = business_code("RF", &self.now, i);

            let mut refund = {
                let order = data.order(&order_id)?;
                let requested_at =
                    order.order_date + fields::millis_within(&mut self.rng, 7 * DAY_MS);
                let updated_at = requested_at + fields::millis_within(&mut self.rng, 3 * DAY_MS);
                RefundRequest {
                    id: id.clone(),
                    order_code: order.code.clone(),
                    amount: order.refundable_amount(),
                    reason: REFUND_REASON.to_string(),
                    kind: fields::pick_variant(&mut self.rng),
                    status: fields::pick_variant(&mut self.rng),
                    requested_by: order.created_by.clone(),
                    requested_by_name: order.created_by_name.clone(),
                    requested_at,
                    approved_by: None,
                    approved_by_name: None,
                    approved_at: None,
                    rejected_by: None,
                    rejected_by_name: None,
                    rejected_at: None,
                    rejection_reason: None,
                    processed_by: None,
                    processed_by_name: None,
                    processed_date: None,
                    notes: format!("Ghi chú cho yêu cầu hoàn tiền {}", refund_code),
                    created_at: requested_at,
                    updated_at,
                    order_id,
                }
            };
            self.review_refund(data, &admins, &mut refund)?;

            if refund.status == RefundStatus::Processed
                && !ledger.record_refund_expense(data, &refund, &refund_code)
            {
                debug!(refund = %refund.id, "finance ledger full, refund expense skipped");
            }
            data.refunds.insert(id, refund);
        }

        debug!(count = data.refunds.len(), "refunds derived");
        Ok(())
    }

    /// Fill the approver, rejecter and processor fields implied by the status.
    /// Without admin members they all stay empty.
    fn review_refund(
        &mut self,
        data: &Dataset,
        admins: &[MemberId],
        refund: &mut RefundRequest,
    ) -> GeneratorResult<()> {
        if admins.is_empty() {
            return Ok(());
        }

        if refund.status.is_approved() {
            let admin = self.pick_member(admins, "admin members")?;
            refund.approved_by_name = Some(data.member(&admin)?.name.clone());
            refund.approved_by = Some(admin);
            refund.approved_at =
                Some(refund.requested_at + fields::millis_within(&mut self.rng, 2 * DAY_MS));
        }

        if refund.status == RefundStatus::Rejected {
            let admin = self.pick_member(admins, "admin members")?;
            refund.rejected_by_name = Some(data.member(&admin)?.name.clone());
            refund.rejected_by = Some(admin);
            refund.rejected_at =
                Some(refund.requested_at + fields::millis_within(&mut self.rng, 2 * DAY_MS));
            refund.rejection_reason = Some(REJECTION_REASON.to_string());
        }

        if refund.status == RefundStatus::Processed {
            let admin = self.pick_member(admins, "admin members")?;
            refund.processed_by_name = Some(data.member(&admin)?.name.clone());
            refund.processed_by = Some(admin);
            refund.processed_date = Some(refund.updated_at);
        }

        Ok(())
    }

    /// Feedback collected by the order's creator shortly after delivery.
    /// Negative feedback types are rated 1-2, the others 3-5.
    pub(super) fn derive_feedbacks(&mut self, data: &mut Dataset) -> GeneratorResult<()> {
        let sampled = self.sample_orders(data, self.config.num_feedbacks);

        for (i, order_id) in sampled.into_iter().enumerate() {
            let id = FeedbackId::from(generate_id("FB", i));
            let feedback_type: FeedbackType = fields::pick_variant(&mut self.rng);
            let rating = if feedback_type.is_negative() {
                self.rng.gen_range(1..=2)
            } else {
                self.rng.gen_range(3..=5)
            };

            let feedback = {
                let order = data.order(&order_id)?;
                let after_delivery = |rng: &mut R| {
                    order.delivery_date + fields::millis_within(rng, 3 * DAY_MS)
                };
                CustomerFeedback {
                    id: id.clone(),
                    order_code: order.code.clone(),
                    customer_name: order.customer_name.clone(),
                    customer_phone: order.phone.clone(),
                    feedback_type,
                    rating,
                    notes: format!("Feedback cho đơn hàng {}", order.code),
                    collected_by: order.created_by.clone(),
                    collected_by_name: order.created_by_name.clone(),
                    collected_at: after_delivery(&mut self.rng),
                    created_at: after_delivery(&mut self.rng),
                    updated_at: after_delivery(&mut self.rng),
                    order_id,
                }
            };
            data.feedbacks.insert(id, feedback);
        }

        debug!(count = data.feedbacks.len(), "feedbacks derived");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn with_orders(config: GeneratorConfig, seed: u64) -> (Generator<StdRng>, Dataset) {
        let now = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let mut gen = Generator::seeded(config, seed, now).unwrap();
        let mut data = Dataset::default();
        gen.populate_departments(&mut data);
        gen.populate_members(&mut data);
        gen.populate_workflows(&mut data);
        gen.assemble_orders(&mut data).unwrap();
        (gen, data)
    }

    #[test]
    fn warranty_claims_snapshot_their_order() {
        let (mut gen, mut data) = with_orders(GeneratorConfig::default(), 3);
        gen.derive_warranty_claims(&mut data).unwrap();
        assert_eq!(data.warranty_claims.len(), 5);

        let claim = &data.warranty_claims[&WarrantyClaimId::from("WC_001")];
        assert!(claim.code.starts_with("WC20240517"));
        let order = data.order(&claim.original_order_id).unwrap();
        assert_eq!(claim.original_order_code, order.code);
        assert_eq!(claim.products, order.products);
        assert_eq!(claim.total_amount, order.total_amount);
        assert_eq!(claim.issues, ["Lỗi sản phẩm", "Không đúng mẫu"]);
        assert!(claim.created_at >= order.order_date);
        assert!(claim.created_at < order.order_date + 7 * DAY_MS);
    }

    #[test]
    fn refund_reviewers_match_status() {
        let (mut gen, mut data) = with_orders(
            GeneratorConfig {
                num_refunds: 20,
                ..GeneratorConfig::default()
            },
            17,
        );
        let mut ledger = FinanceLedger::new(100);
        gen.derive_refunds(&mut data, &mut ledger).unwrap();
        assert_eq!(data.refunds.len(), 20);

        let orders: HashSet<_> = data.refunds.values().map(|r| &r.order_id).collect();
        assert_eq!(orders.len(), 20);

        for refund in data.refunds.values() {
            let order = data.order(&refund.order_id).unwrap();
            assert_eq!(refund.amount, order.refundable_amount());
            assert_eq!(refund.approved_by.is_some(), refund.status.is_approved());
            assert_eq!(
                refund.rejection_reason.is_some(),
                refund.status == RefundStatus::Rejected
            );
            assert_eq!(
                refund.processed_date,
                (refund.status == RefundStatus::Processed).then_some(refund.updated_at)
            );
            for reviewer in refund.reviewers() {
                assert_eq!(data.member(reviewer).unwrap().role, Role::Admin);
            }
        }

        let processed = data
            .refunds
            .values()
            .filter(|r| r.status == RefundStatus::Processed)
            .count();
        assert_eq!(data.finance_transactions.len(), processed);
    }

    #[test]
    fn refunds_without_admins_stay_unreviewed() {
        let (mut gen, mut data) = with_orders(
            GeneratorConfig {
                num_admin_members: 0,
                num_refunds: 20,
                ..GeneratorConfig::default()
            },
            8,
        );
        let mut ledger = FinanceLedger::new(0);
        gen.derive_refunds(&mut data, &mut ledger).unwrap();

        assert!(data.refunds.values().all(|r| r.reviewers().next().is_none()));
        assert!(data.finance_transactions.is_empty());
    }

    #[test]
    fn feedback_rating_tracks_type() {
        let (mut gen, mut data) = with_orders(
            GeneratorConfig {
                num_feedbacks: 20,
                ..GeneratorConfig::default()
            },
            29,
        );
        gen.derive_feedbacks(&mut data).unwrap();
        assert_eq!(data.feedbacks.len(), 20);

        for feedback in data.feedbacks.values() {
            let expected = if feedback.feedback_type.is_negative() {
                1..=2
            } else {
                3..=5
            };
            assert!(expected.contains(&feedback.rating));

            let order = data.order(&feedback.order_id).unwrap();
            assert_eq!(feedback.collected_by, order.created_by);
            assert!(feedback.collected_at >= order.delivery_date);
        }
    }

    #[test]
    fn no_orders_no_derived_records() {
        let (mut gen, mut data) = with_orders(
            GeneratorConfig {
                num_orders: 0,
                ..GeneratorConfig::default()
            },
            1,
        );
        let mut ledger = FinanceLedger::new(25);
        gen.derive_warranty_claims(&mut data).unwrap();
        gen.derive_refunds(&mut data, &mut ledger).unwrap();
        gen.derive_feedbacks(&mut data).unwrap();

        assert!(data.warranty_claims.is_empty());
        assert!(data.refunds.is_empty());
        assert!(data.feedbacks.is_empty());
    }
}
