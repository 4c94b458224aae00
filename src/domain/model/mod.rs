//! Domain model types

pub mod damage;
pub mod quote;

pub use damage::{DentCounts, DentSize, MaterialFlags, PanelDamageReport, PanelOrientation};
pub use quote::{BucketLine, PanelLine, PricingResult, Quote, QuoteBreakdown, QuoteTotals};
