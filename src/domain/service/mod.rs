//! Domain services

pub mod pricing_engine;
pub mod quote_aggregator;

pub use pricing_engine::compute;
pub use quote_aggregator::{calculate_breakdown, calculate_total};
