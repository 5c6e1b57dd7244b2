//! Index-based identifiers and date-stamped business codes.
//!
//! Uniqueness within a run comes from the monotonically increasing index, not
//! from checking existing keys.

use chrono::{DateTime, Utc};

use crate::models::{AssignmentId, OrderId, ProductId};

/// `{prefix}_{index+1:03}`, e.g. `generate_id("ORD", 0) == "ORD_001"`.
pub fn generate_id(prefix: &str, index: usize) -> String {
    format!("{}_{:03}", prefix, index + 1)
}

/// `{prefix}{YYYYMMDD}{index+1:03}` stamped with the generator clock.
pub fn business_code(prefix: &str, now: &DateTime<Utc>, index: usize) -> String {
    format!("{}{}{:03}", prefix, now.format("%Y%m%d"), index + 1)
}

/// `{prefix}_{index+1:06}`, used for materials, inventory and finance records.
pub fn sequence_code(prefix: &str, index: usize) -> String {
    format!("{}_{:06}", prefix, index + 1)
}

pub fn product_id(order_id: &OrderId, index: usize) -> ProductId {
    ProductId::from(format!("PROD_{}_{}", order_id, index + 1))
}

pub fn assignment_id(product_id: &ProductId, position: usize) -> AssignmentId {
    AssignmentId::from(format!("workflow_{}_{}", product_id, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("ORD", 0, "ORD_001")]
    #[case("WORKER", 11, "WORKER_012")]
    #[case("WF", 999, "WF_1000")]
    fn ids_are_one_based_and_zero_padded(
        #[case] prefix: &str,
        #[case] index: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(generate_id(prefix, index), expected);
    }

    #[test]
    fn business_codes_carry_the_clock_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(business_code("ORD", &now, 2), "ORD20240307003");
        assert_eq!(business_code("WC", &now, 0), "WC20240307001");
    }

    #[test]
    fn sequence_codes_use_six_digits() {
        assert_eq!(sequence_code("MAT", 0), "MAT_000001");
        assert_eq!(sequence_code("FIN", 24), "FIN_000025");
    }

    #[test]
    fn nested_ids_embed_their_parent() {
        let product = product_id(&OrderId::from("ORD_004"), 1);
        assert_eq!(product.as_str(), "PROD_ORD_004_2");
        assert_eq!(
            assignment_id(&product, 0).as_str(),
            "workflow_PROD_ORD_004_2_0"
        );
    }
}
