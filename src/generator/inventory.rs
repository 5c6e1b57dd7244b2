use chrono::Duration;
use rand::Rng;
use tracing::debug;

use super::codes::sequence_code;
use super::fields;
use super::Generator;
use crate::errors::GeneratorResult;
use crate::models::{
    Dataset, InventoryTransaction, InventoryTxnCode, InventoryTxnType, MaterialId,
};

const EXPORT_PROBABILITY: f32 = 0.4;

impl<R: Rng> Generator<R> {
    /// Stock movements against random materials, at most two per material.
    ///
    /// An export larger than the material's stock is cut to half the stock.
    pub(super) fn record_inventory_transactions(
        &mut self,
        data: &mut Dataset,
    ) -> GeneratorResult<()> {
        let material_ids: Vec<MaterialId> = data.materials.keys().cloned().collect();
        let wanted = (self.config.num_inventory_txns as usize).min(material_ids.len() * 2);

        for i in 0..wanted {
            let material_id = &material_ids[self.rng.gen_range(0..material_ids.len())];
            let material = data.material(material_id)?;

            let kind = if fields::chance(&mut self.rng, EXPORT_PROBABILITY) {
                InventoryTxnType::Export
            } else {
                InventoryTxnType::Import
            };

            let mut quantity = self.rng.gen_range(10..110);
            if kind == InventoryTxnType::Export && quantity > material.stock_quantity {
                quantity = material.stock_quantity / 2;
            }

            let price = if material.import_price > 0 {
                material.import_price
            } else {
                self.rng.gen_range(10_000..110_000)
            };

            let date = self.now - Duration::days(self.rng.gen_range(0..30));
            let reason = match kind {
                InventoryTxnType::Export => {
                    Some(fields::pick(&mut self.rng, self.catalog.export_reasons).to_string())
                }
                InventoryTxnType::Import => None,
            };

            let code = InventoryTxnCode::from(sequence_code("TXN", i));
            let txn = InventoryTransaction {
                code: code.clone(),
                material_id: material_id.clone(),
                material_name: material.name.clone(),
                kind,
                quantity,
                unit: material.unit.clone(),
                price,
                total_amount: quantity * price,
                date: date.format("%Y-%m-%d").to_string(),
                supplier: material.supplier.clone(),
                reason,
                note: format!("Giao dịch {} cho {}", kind, material.name),
                created_at: date.timestamp() * 1000,
            };
            data.inventory_transactions.insert(code, txn);
        }

        debug!(
            count = data.inventory_transactions.len(),
            "inventory transactions recorded"
        );
        Ok(())
    }
}
