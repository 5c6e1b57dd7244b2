use serde::Deserialize;
use std::env as std_env;
use validator::Validate;

/// Default values for configuration
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_OUTPUT_PATH: &str = "./mock-data.json";
const DEFAULT_NUM_DEPARTMENTS: u32 = 5;
const DEFAULT_NUM_SALES_MEMBERS: u32 = 5;
const DEFAULT_NUM_ADMIN_MEMBERS: u32 = 2;
const DEFAULT_NUM_DEV_MEMBERS: u32 = 2;
const DEFAULT_NUM_WORKERS_PER_DEPT: u32 = 3;
const DEFAULT_NUM_ORDERS: u32 = 20;
const DEFAULT_NUM_WARRANTY_CLAIMS: u32 = 5;
const DEFAULT_NUM_MATERIALS: u32 = 15;
const DEFAULT_NUM_CATEGORIES: u32 = 5;
const DEFAULT_NUM_INVENTORY_TXNS: u32 = 30;
const DEFAULT_NUM_FINANCE_TXNS: u32 = 25;
const DEFAULT_NUM_REFUNDS: u32 = 3;
const DEFAULT_NUM_FEEDBACKS: u32 = 10;

/// Entity counts for one generation run.
///
/// Counts for pool-backed collections (departments, categories, materials) are
/// upper bounds: asking for more entries than the catalog holds yields fewer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    #[validate(range(min = 0, max = 100))]
    pub num_departments: u32,

    #[validate(range(min = 0, max = 1000))]
    pub num_sales_members: u32,

    #[validate(range(min = 0, max = 1000))]
    pub num_admin_members: u32,

    #[validate(range(min = 0, max = 1000))]
    pub num_dev_members: u32,

    /// Workers created for every generated department
    #[validate(range(min = 0, max = 1000))]
    pub num_workers_per_dept: u32,

    #[validate(range(min = 0, max = 10000))]
    pub num_orders: u32,

    /// Claims are sampled from orders without replacement
    #[validate(range(min = 0, max = 10000))]
    pub num_warranty_claims: u32,

    #[validate(range(min = 0, max = 1000))]
    pub num_materials: u32,

    #[validate(range(min = 0, max = 1000))]
    pub num_categories: u32,

    #[validate(range(min = 0, max = 10000))]
    pub num_inventory_txns: u32,

    /// Cap for finance records derived from inventory imports and processed refunds.
    /// Order income records are always written.
    #[validate(range(min = 0, max = 10000))]
    pub num_finance_txns: u32,

    #[validate(range(min = 0, max = 10000))]
    pub num_refunds: u32,

    #[validate(range(min = 0, max = 10000))]
    pub num_feedbacks: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_departments: DEFAULT_NUM_DEPARTMENTS,
            num_sales_members: DEFAULT_NUM_SALES_MEMBERS,
            num_admin_members: DEFAULT_NUM_ADMIN_MEMBERS,
            num_dev_members: DEFAULT_NUM_DEV_MEMBERS,
            num_workers_per_dept: DEFAULT_NUM_WORKERS_PER_DEPT,
            num_orders: DEFAULT_NUM_ORDERS,
            num_warranty_claims: DEFAULT_NUM_WARRANTY_CLAIMS,
            num_materials: DEFAULT_NUM_MATERIALS,
            num_categories: DEFAULT_NUM_CATEGORIES,
            num_inventory_txns: DEFAULT_NUM_INVENTORY_TXNS,
            num_finance_txns: DEFAULT_NUM_FINANCE_TXNS,
            num_refunds: DEFAULT_NUM_REFUNDS,
            num_feedbacks: DEFAULT_NUM_FEEDBACKS,
        }
    }
}

/// Initialise tracing for the CLI. Logs go to stderr so the summary on stdout
/// stays machine-readable. `RUST_LOG` overrides the default directive.
pub fn init_tracing(level: &str) {
    use tracing_subscriber::fmt;

    let default_directive = format!("xoxo_mockgen={}", level);
    let filter_directive = std_env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let _ = fmt()
        .with_env_filter(filter_directive)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let cfg = GeneratorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.num_orders, 20);
        assert_eq!(cfg.num_workers_per_dept, 3);
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let cfg = GeneratorConfig {
            num_orders: 50_000,
            ..GeneratorConfig::default()
        };
        let errors = cfg.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("num_orders"));
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let cfg: GeneratorConfig =
            serde_json::from_value(serde_json::json!({ "num_departments": 2, "num_orders": 3 }))
                .unwrap();
        assert_eq!(cfg.num_departments, 2);
        assert_eq!(cfg.num_orders, 3);
        assert_eq!(cfg.num_refunds, DEFAULT_NUM_REFUNDS);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<GeneratorConfig, _> =
            serde_json::from_value(serde_json::json!({ "num_customers": 4 }));
        assert!(result.is_err());
    }
}
