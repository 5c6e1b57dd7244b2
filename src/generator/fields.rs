//! Plausible-looking field values. Nothing here is validated beyond its range
//! bounds and collisions are acceptable.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use strum::IntoEnumIterator;

use super::catalog::Catalog;

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// First, middle and last name drawn independently.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog) -> String {
    let first = pick(rng, catalog.first_names);
    let middle = pick(rng, catalog.middle_names);
    let last = pick(rng, catalog.last_names);
    format!("{} {} {}", first, middle, last)
}

/// Mobile number: `09` followed by eight random digits.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("09{:08}", rng.gen_range(0..100_000_000))
}

/// Keeps only the ASCII alphanumerics of `name` and appends a number below 1000.
pub fn email_for<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    let local: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    format!("{}{}@gmail.com", local, rng.gen_range(0..1000))
}

/// `YYYY-MM-DD` with year in [1980, 2010) and day capped at 28.
pub fn date_of_birth<R: Rng + ?Sized>(rng: &mut R) -> String {
    let year = rng.gen_range(1980..2010);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub fn street_address<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog) -> String {
    let number = rng.gen_range(100..1000);
    let street = full_name(rng, catalog);
    let district = rng.gen_range(1..=12);
    format!("{} Đường {}, Quận {}, TP.HCM", number, street, district)
}

/// Uniform pick from a static pool; an empty pool yields an empty string.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Uniform pick over every variant of an enum.
pub fn pick_variant<T, R>(rng: &mut R) -> T
where
    T: IntoEnumIterator + Default,
    R: Rng + ?Sized,
{
    T::iter().choose(rng).unwrap_or_default()
}

/// First `take` entries of a random permutation of `0..len`: `take` distinct
/// indices sampled without replacement. `take` is capped at `len`.
pub fn permutation_prefix<R: Rng + ?Sized>(rng: &mut R, len: usize, take: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices.truncate(take);
    indices
}

/// True with probability `p`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.gen::<f32>() < p
}

/// Random offset in `[0, span_ms)`; zero for an empty span.
pub fn millis_within<R: Rng + ?Sized>(rng: &mut R, span_ms: i64) -> i64 {
    if span_ms <= 0 {
        0
    } else {
        rng.gen_range(0..span_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn email_strips_diacritics_and_spaces() {
        let mut rng = rng();
        let email = email_for(&mut rng, "Nguyễn Văn Minh");
        assert!(email.starts_with("NguynVnMinh"), "{}", email);
        assert!(email.ends_with("@gmail.com"));
        let digits = &email["NguynVnMinh".len()..email.len() - "@gmail.com".len()];
        assert!(digits.parse::<u32>().unwrap() < 1000);
    }

    #[test]
    fn phone_has_prefix_and_ten_digits() {
        let mut rng = rng();
        for _ in 0..100 {
            let phone = phone_number(&mut rng);
            assert_eq!(phone.len(), 10);
            assert!(phone.starts_with("09"));
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn date_of_birth_stays_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let dob = date_of_birth(&mut rng);
            let parts: Vec<u32> = dob.split('-').map(|p| p.parse().unwrap()).collect();
            assert!((1980..2010).contains(&parts[0]));
            assert!((1..=12).contains(&parts[1]));
            assert!((1..=28).contains(&parts[2]));
        }
    }

    #[test]
    fn full_name_has_three_parts() {
        let mut rng = rng();
        let catalog = Catalog::standard();
        let name = full_name(&mut rng, &catalog);
        assert_eq!(name.split(' ').count(), 3);
    }

    #[test]
    fn permutation_prefix_is_distinct_and_capped() {
        let mut rng = rng();
        let picked = permutation_prefix(&mut rng, 5, 3);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 3);
        assert!(picked.iter().all(|&i| i < 5));

        assert_eq!(permutation_prefix(&mut rng, 2, 4).len(), 2);
        assert!(permutation_prefix(&mut rng, 0, 1).is_empty());
    }

    #[test]
    fn pick_variant_reaches_every_status() {
        let mut rng = rng();
        let seen: HashSet<String> = (0..500)
            .map(|_| pick_variant::<OrderStatus, _>(&mut rng).to_string())
            .collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn empty_pool_and_span_degrade_gracefully() {
        let mut rng = rng();
        assert_eq!(pick(&mut rng, &[]), "");
        assert_eq!(millis_within(&mut rng, 0), 0);
        assert!(millis_within(&mut rng, DAY_MS) < DAY_MS);
    }
}
