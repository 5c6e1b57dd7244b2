//! Property-based tests for the generator.
//!
//! Every seed and every small configuration must produce a dataset that
//! passes the integrity checker and respects the sampling caps.

mod common;

use proptest::prelude::*;
use std::collections::HashSet;

use xoxo_mockgen::models::{Role, SourceType};
use xoxo_mockgen::{integrity, GeneratorConfig};

fn small_config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (
        (0u32..=6, 1u32..=4, 0u32..=3, 0u32..=3),
        (0u32..=12, 0u32..=8, 0u32..=12, 0u32..=8),
        (0u32..=12, 0u32..=12, 0u32..=40, 0u32..=30),
    )
        .prop_map(
            |(
                (departments, sales, admins, workers),
                (orders, warranty, materials, categories),
                (refunds, feedbacks, inventory, finance),
            )| GeneratorConfig {
                num_departments: departments,
                num_sales_members: sales,
                num_admin_members: admins,
                num_dev_members: 1,
                num_workers_per_dept: workers,
                num_orders: orders,
                num_warranty_claims: warranty,
                num_materials: materials,
                num_categories: categories,
                num_inventory_txns: inventory,
                num_finance_txns: finance,
                num_refunds: refunds,
                num_feedbacks: feedbacks,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_seed_yields_a_consistent_dataset(seed in any::<u64>()) {
        let data = common::generate(GeneratorConfig::default(), seed);
        let issues = integrity::check(&data);
        prop_assert!(issues.is_empty(), "seed {}: {:?}", seed, issues);
    }

    #[test]
    fn small_configs_yield_consistent_datasets(
        config in small_config_strategy(),
        seed in any::<u64>(),
    ) {
        let data = common::generate(config.clone(), seed);
        let issues = integrity::check(&data);
        prop_assert!(issues.is_empty(), "{:?} seed {}: {:?}", config, seed, issues);

        let orders = config.num_orders as usize;
        prop_assert_eq!(data.orders.len(), orders);
        prop_assert_eq!(data.warranty_claims.len(), (config.num_warranty_claims as usize).min(orders));
        prop_assert_eq!(data.refunds.len(), (config.num_refunds as usize).min(orders));
        prop_assert_eq!(data.feedbacks.len(), (config.num_feedbacks as usize).min(orders));
        prop_assert_eq!(
            data.inventory_transactions.len(),
            (config.num_inventory_txns as usize).min(data.materials.len() * 2)
        );

        let departments = (config.num_departments as usize).min(5);
        prop_assert_eq!(data.departments.len(), departments);
        prop_assert_eq!(
            data.member_ids_with_role(Role::Worker).len(),
            departments * config.num_workers_per_dept as usize
        );

        let refunded: HashSet<_> = data.refunds.values().map(|r| &r.order_id).collect();
        prop_assert_eq!(refunded.len(), data.refunds.len());

        let income = data
            .finance_transactions
            .values()
            .filter(|t| t.source_type == SourceType::Order)
            .count();
        prop_assert!(data.finance_transactions.len() <= income.max(config.num_finance_txns as usize));
    }

    #[test]
    fn order_totals_are_consistent(seed in any::<u64>()) {
        let data = common::generate(GeneratorConfig::default(), seed);
        for order in data.orders.values() {
            prop_assert_eq!(order.subtotal, order.line_items_subtotal());
            prop_assert_eq!(
                order.total_amount,
                order.subtotal - order.discount_amount + order.shipping_fee
            );
            if order.total_amount >= 0 {
                prop_assert!(order.deposit_amount <= order.total_amount);
            }
            if order.deposit == 0 {
                prop_assert_eq!(order.deposit_amount, 0);
                prop_assert!(!order.is_deposit_paid);
            } else {
                prop_assert!((30..70).contains(&order.deposit));
            }
        }
    }
}
