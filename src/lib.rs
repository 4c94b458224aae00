//! Granizo Calc Library
//!
//! Hail-damage (PDR) quote pricing for auto repair workshops: converts
//! per-panel dent counts into AW work units via tiered catalog tables,
//! applies material surcharges, and aggregates panel results into a
//! customer-facing quote price.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod output;
pub mod store;
