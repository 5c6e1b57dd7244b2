//! Order assembly: products, per-product workflow assignments and totals.

use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use super::codes::{self, business_code, generate_id};
use super::fields::{self, DAY_MS, HOUR_MS};
use super::Generator;
use crate::errors::GeneratorResult;
use crate::models::{
    Dataset, DepartmentCode, Image, MemberId, Order, OrderId, OrderStatus, Product, ProductId,
    Role, ValueKind, WorkflowAssignment,
};

/// Assignments at these positions within a product may already be done.
const DONE_ELIGIBLE_POSITIONS: usize = 2;
const DONE_PROBABILITY: f32 = 0.7;
const DONE_IMAGES_PROBABILITY: f32 = 0.6;
const DISCOUNT_PROBABILITY: f32 = 0.5;
const SHIPPING_PROBABILITY: f32 = 0.7;
const DEPOSIT_PROBABILITY: f32 = 0.6;
const DEPOSIT_PAID_PROBABILITY: f32 = 0.8;
const CONSULTANT_PROBABILITY: f32 = 0.5;

/// Money fields of an order, derived from its subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pricing {
    pub discount: i64,
    pub discount_type: ValueKind,
    pub discount_amount: i64,
    pub shipping_fee: i64,
    pub total_amount: i64,
    pub deposit: i64,
    pub deposit_amount: i64,
    pub is_deposit_paid: bool,
}

impl Pricing {
    /// `total = subtotal - discount_amount + shipping_fee`, unclamped.
    /// The deposit is a whole percent of the total, truncated.
    pub fn compute(
        subtotal: i64,
        discount_type: ValueKind,
        discount: i64,
        shipping_fee: i64,
        deposit: i64,
        is_deposit_paid: bool,
    ) -> Self {
        let discount_amount = if discount > 0 {
            discount_type.resolve(subtotal, discount)
        } else {
            0
        };
        let total_amount = subtotal - discount_amount + shipping_fee;
        let deposit_amount = ValueKind::Percentage.resolve(total_amount, deposit);
        Self {
            discount,
            discount_type,
            discount_amount,
            shipping_fee,
            total_amount,
            deposit,
            deposit_amount,
            is_deposit_paid,
        }
    }
}

impl<R: Rng> Generator<R> {
    pub(super) fn assemble_orders(&mut self, data: &mut Dataset) -> GeneratorResult<()> {
        let sales = data.member_ids_with_role(Role::Sales);
        let departments: Vec<DepartmentCode> = data.departments.keys().cloned().collect();

        for i in 0..self.config.num_orders as usize {
            let order_id = OrderId::from(generate_id("ORD", i));
            let order = self.assemble_order(data, &order_id, i, &sales, &departments)?;
            data.orders.insert(order_id, order);
        }
        debug!(count = data.orders.len(), "orders assembled");
        Ok(())
    }

    fn assemble_order(
        &mut self,
        data: &Dataset,
        order_id: &OrderId,
        index: usize,
        sales: &[MemberId],
        departments: &[DepartmentCode],
    ) -> GeneratorResult<Order> {
        let code = business_code("ORD", &self.now, index);

        let created_by = self.pick_member(sales, "sales members")?;
        let created_by_name = data.member(&created_by)?.name.clone();

        let order_date = self.millis_ago(30 * DAY_MS);
        let delivery_date = order_date + self.rng.gen_range(3..13) * DAY_MS;

        let num_products = self.rng.gen_range(1..=3);
        let mut products = BTreeMap::new();
        for j in 0..num_products {
            let product_id = codes::product_id(order_id, j);
            let product = self.assemble_product(data, &product_id, departments, order_date)?;
            products.insert(product_id, product);
        }

        let subtotal: i64 = products.values().map(Product::line_total).sum();
        let pricing = self.price_order(subtotal);
        let status: OrderStatus = fields::pick_variant(&mut self.rng);

        let customer_name = fields::full_name(&mut self.rng, &self.catalog);
        let email_name = fields::full_name(&mut self.rng, &self.catalog);

        let mut order = Order {
            customer_name,
            phone: fields::phone_number(&mut self.rng),
            email: fields::email_for(&mut self.rng, &email_name),
            address: fields::street_address(&mut self.rng, &self.catalog),
            customer_source: fields::pick_variant(&mut self.rng),
            order_date,
            delivery_date,
            created_by,
            created_by_name,
            consultant_id: None,
            consultant_name: None,
            created_at: order_date,
            updated_at: order_date + fields::millis_within(&mut self.rng, DAY_MS),
            notes: format!("Ghi chú cho đơn hàng {}", code),
            discount: pricing.discount,
            discount_type: pricing.discount_type,
            shipping_fee: pricing.shipping_fee,
            products,
            status,
            total_amount: pricing.total_amount,
            discount_amount: pricing.discount_amount,
            subtotal,
            deposit: pricing.deposit,
            deposit_type: ValueKind::Percentage,
            deposit_amount: pricing.deposit_amount,
            is_deposit_paid: pricing.is_deposit_paid,
            code,
        };

        // The consultant slot is independent of the creator and may repeat them.
        if fields::chance(&mut self.rng, CONSULTANT_PROBABILITY) {
            let consultant = self.pick_member(sales, "sales members")?;
            order.consultant_name = Some(data.member(&consultant)?.name.clone());
            order.consultant_id = Some(consultant);
        }

        Ok(order)
    }

    fn assemble_product(
        &mut self,
        data: &Dataset,
        product_id: &ProductId,
        departments: &[DepartmentCode],
        order_date: i64,
    ) -> GeneratorResult<Product> {
        let name = fields::pick(&mut self.rng, self.catalog.product_names).to_string();
        let quantity = self.rng.gen_range(10..110);
        let price = self.rng.gen_range(50_000..550_000);

        // 2-4 distinct departments define the production path
        let wanted = self.rng.gen_range(2..=4);
        let path = fields::permutation_prefix(&mut self.rng, departments.len(), wanted);

        let mut workflows = BTreeMap::new();
        let mut position = 0;
        for idx in path {
            let department = &departments[idx];
            let templates = data.workflows_in(department);
            if templates.is_empty() {
                continue;
            }

            // Deterministic prefix of the department's templates, not a sample.
            let take = self.rng.gen_range(1..=2).min(templates.len());
            let workflow_code = templates[..take].to_vec();
            let workflow_name = workflow_code
                .iter()
                .map(|id| data.workflow(id).map(|wf| wf.name.clone()))
                .collect::<GeneratorResult<Vec<_>>>()?;

            let workers = data.workers_in(department);
            let staffed = self.rng.gen_range(1..=2).min(workers.len());
            let members = fields::permutation_prefix(&mut self.rng, workers.len(), staffed)
                .into_iter()
                .map(|i| workers[i].clone())
                .collect();

            let is_done = position < DONE_ELIGIBLE_POSITIONS
                && fields::chance(&mut self.rng, DONE_PROBABILITY);

            workflows.insert(
                codes::assignment_id(product_id, position),
                WorkflowAssignment {
                    department_code: department.clone(),
                    workflow_code,
                    workflow_name,
                    members,
                    is_done,
                    updated_at: order_date + position as i64 * HOUR_MS,
                },
            );
            position += 1;
        }

        let num_images = self.rng.gen_range(1..=3);
        let images = self.placeholder_images(product_id, "img", "product", num_images);

        let any_done = workflows.values().any(|wf: &WorkflowAssignment| wf.is_done);
        let images_done = if any_done && fields::chance(&mut self.rng, DONE_IMAGES_PROBABILITY) {
            let num_done = self.rng.gen_range(1..=2);
            self.placeholder_images(product_id, "img_done", "product_done", num_done)
        } else {
            Vec::new()
        };

        Ok(Product {
            name,
            quantity,
            price,
            commission_percentage: 5.0 + self.rng.gen::<f64>() * 10.0,
            images,
            images_done,
            workflows,
        })
    }

    fn placeholder_images(
        &self,
        product_id: &ProductId,
        uid_prefix: &str,
        name_prefix: &str,
        count: usize,
    ) -> Vec<Image> {
        (0..count)
            .map(|k| Image {
                uid: format!("{}_{}_{}", uid_prefix, product_id, k),
                name: format!("{}_{}.jpg", name_prefix, k + 1),
                url: self.catalog.image_url.to_string(),
            })
            .collect()
    }

    /// Optional discount (amount or percentage, type chosen per order),
    /// optional shipping fee and optional deposit.
    fn price_order(&mut self, subtotal: i64) -> Pricing {
        let discount_type: ValueKind = fields::pick_variant(&mut self.rng);
        let discount = if fields::chance(&mut self.rng, DISCOUNT_PROBABILITY) {
            match discount_type {
                ValueKind::Percentage => self.rng.gen_range(5..20),
                ValueKind::Amount => self.rng.gen_range(50_000..250_000),
            }
        } else {
            0
        };

        let shipping_fee = if fields::chance(&mut self.rng, SHIPPING_PROBABILITY) {
            self.rng.gen_range(20_000..70_000)
        } else {
            0
        };

        let (deposit, is_deposit_paid) = if fields::chance(&mut self.rng, DEPOSIT_PROBABILITY) {
            let percent = self.rng.gen_range(30..70);
            (percent, fields::chance(&mut self.rng, DEPOSIT_PAID_PROBABILITY))
        } else {
            (0, false)
        };

        Pricing::compute(
            subtotal,
            discount_type,
            discount,
            shipping_fee,
            deposit,
            is_deposit_paid,
        )
    }
}
