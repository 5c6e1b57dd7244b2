#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use xoxo_mockgen::{Dataset, Generator, GeneratorConfig, GeneratorResult, MockDocument};

/// Fixed clock so date-stamped codes and timestamps are reproducible.
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

pub fn try_generate(config: GeneratorConfig, seed: u64) -> GeneratorResult<MockDocument> {
    Generator::seeded(config, seed, fixed_clock())?.generate()
}

pub fn generate(config: GeneratorConfig, seed: u64) -> Dataset {
    try_generate(config, seed)
        .expect("generation should succeed")
        .xoxo
}

pub fn generate_default(seed: u64) -> Dataset {
    generate(GeneratorConfig::default(), seed)
}
