//! Constants and catalog data for hail damage pricing

pub mod aw_table;
pub mod panels;

pub use aw_table::{base_work_units, tiers};
pub use panels::{orientation_for, panel_name, panel_spec, PanelSpec, PANEL_CATALOG};

/// Default workshop hourly rate in euros, used when the caller supplies none
pub const DEFAULT_HOURLY_RATE: f64 = 28.0;

/// Customer-facing price per AW in euros (quote totals only)
pub const EURO_PER_WORK_UNIT: f64 = 2.8;

/// Aluminum panel surcharge (+25%)
pub const ALUMINUM_FACTOR: f64 = 1.25;

/// Glue-technique surcharge (+30%)
pub const GLUE_FACTOR: f64 = 1.30;

/// Pre-press surcharge for hardened damage (+60%)
pub const PRE_PRESS_FACTOR: f64 = 1.60;

/// Flat AW added when a panel cavity must be drilled/accessed
pub const CAVITY_ACCESS_EXTRA_AW: f64 = 4.0;
