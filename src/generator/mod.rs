//! The mock data pipeline.
//!
//! Stages run in strict dependency order, each reading only collections built
//! by an earlier stage:
//!
//! 1. departments, members, workflows, categories, materials
//! 2. orders with embedded products and workflow assignments
//! 3. warranty claims
//! 4. inventory transactions
//! 5. finance records for orders and inventory imports
//! 6. refunds (processed refunds append finance records)
//! 7. feedbacks

pub mod catalog;
pub mod codes;
pub mod fields;

mod derived;
mod finance;
mod inventory;
mod orders;
mod population;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use validator::Validate;

pub use catalog::Catalog;

use crate::config::GeneratorConfig;
use crate::errors::{GeneratorError, GeneratorResult};
use crate::models::{Dataset, MemberId, MockDocument, OrderId};
use finance::FinanceLedger;

/// Generator context: configuration, static pools, the random stream and the
/// clock every timestamp and date-stamped code is derived from.
pub struct Generator<R: Rng> {
    config: GeneratorConfig,
    catalog: Catalog,
    rng: R,
    now: DateTime<Utc>,
}

impl Generator<StdRng> {
    /// Entropy-seeded generator on the wall clock.
    pub fn from_entropy(config: GeneratorConfig) -> GeneratorResult<Self> {
        Self::new(config, StdRng::from_entropy(), Utc::now())
    }

    /// Reproducible generator: same seed and clock give the same document.
    pub fn seeded(config: GeneratorConfig, seed: u64, now: DateTime<Utc>) -> GeneratorResult<Self> {
        Self::new(config, StdRng::seed_from_u64(seed), now)
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(config: GeneratorConfig, rng: R, now: DateTime<Utc>) -> GeneratorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: Catalog::standard(),
            rng,
            now,
        })
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline. Any failure aborts the run with no partial document.
    pub fn generate(&mut self) -> GeneratorResult<MockDocument> {
        info!(
            orders = self.config.num_orders,
            clock = %self.now.to_rfc3339(),
            "Generating mock data"
        );

        let mut data = Dataset::default();

        self.populate_departments(&mut data);
        self.populate_members(&mut data);
        self.populate_workflows(&mut data);
        self.populate_categories(&mut data);
        self.populate_materials(&mut data);

        self.assemble_orders(&mut data)?;
        self.derive_warranty_claims(&mut data)?;
        self.record_inventory_transactions(&mut data)?;

        let mut ledger = FinanceLedger::new(self.config.num_finance_txns as usize);
        ledger.record_order_income(&mut data);
        ledger.record_inventory_expenses(&mut data);
        debug!(count = ledger.len(), "finance records before refunds");

        self.derive_refunds(&mut data, &mut ledger)?;
        self.derive_feedbacks(&mut data)?;

        info!(
            members = data.members.len(),
            orders = data.orders.len(),
            finance = data.finance_transactions.len(),
            "Mock data generated"
        );
        Ok(MockDocument { xoxo: data })
    }

    fn now_ms(&self) -> i64 {
        self.now.timestamp_millis()
    }

    /// A timestamp up to `span_ms` before the clock.
    fn millis_ago(&mut self, span_ms: i64) -> i64 {
        self.now_ms() - fields::millis_within(&mut self.rng, span_ms)
    }

    fn pick_member(&mut self, pool: &[MemberId], what: &'static str) -> GeneratorResult<MemberId> {
        use rand::seq::SliceRandom;

        pool.choose(&mut self.rng)
            .cloned()
            .ok_or(GeneratorError::EmptyPool(what))
    }

    /// Up to `wanted` order keys sampled without replacement.
    fn sample_orders(&mut self, data: &Dataset, wanted: u32) -> Vec<OrderId> {
        let ids: Vec<&OrderId> = data.orders.keys().collect();
        let take = (wanted as usize).min(ids.len());
        fields::permutation_prefix(&mut self.rng, ids.len(), take)
            .into_iter()
            .map(|i| ids[i].clone())
            .collect()
    }
}
