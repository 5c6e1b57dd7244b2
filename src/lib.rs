//! xoxo mock data generator
//!
//! Builds a referentially consistent order-management dataset (departments,
//! staff, workflow templates, orders, warranty claims, inventory, finance,
//! refunds and feedback) and writes it as one JSON document under the `xoxo`
//! key, ready for bulk import into the back office.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod generator;
pub mod integrity;
pub mod models;
pub mod writer;

pub use config::GeneratorConfig;
pub use errors::{GeneratorError, GeneratorResult};
pub use generator::{Catalog, Generator};
pub use integrity::IntegrityIssue;
pub use models::{CollectionCounts, Dataset, MockDocument};
