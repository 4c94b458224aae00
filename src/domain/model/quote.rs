//! Quote and pricing result types

use serde::{Deserialize, Serialize};

use crate::domain::model::damage::{PanelDamageReport, PanelOrientation};

/// Priced result for one dent-size bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// AW work units, rounded half-up to whole units
    pub work_units: u32,
    /// Labor hours (work units / 10, one decimal)
    pub labor_hours: f64,
    /// Internal labor cost in euros (hours x hourly rate, two decimals)
    pub cost: f64,
}

impl PricingResult {
    /// Result for an empty bucket
    pub fn zero() -> Self {
        Self {
            work_units: 0,
            labor_hours: 0.0,
            cost: 0.0,
        }
    }
}

/// Aggregate totals for a whole vehicle damage report
///
/// `total_cost` is the customer-facing price: total AW converted at the
/// flat per-unit rate. It deliberately does not sum the per-bucket `cost`
/// figures, which are internal labor costing only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub total_work_units: u32,
    pub total_cost: f64,
}

impl QuoteTotals {
    pub fn zero() -> Self {
        Self {
            total_work_units: 0,
            total_cost: 0.0,
        }
    }
}

/// Priced bucket within a panel breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketLine {
    pub size_mm: u32,
    pub count: i32,
    pub result: PricingResult,
}

/// One panel's priced buckets within a breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLine {
    pub panel_id: String,
    pub panel_name: String,
    pub orientation: PanelOrientation,
    pub buckets: Vec<BucketLine>,
    pub panel_work_units: u32,
}

/// Per-panel pricing detail plus quote totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub panels: Vec<PanelLine>,
    pub totals: QuoteTotals,
}

/// Persisted quote record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub client_id: String,
    pub vehicle: String,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub chassis: Option<String>,
    pub damage: Vec<PanelDamageReport>,
    /// Total AW, recomputed whenever the damage record changes
    pub total_aw: u32,
    /// Customer price in euros, recomputed alongside `total_aw`
    pub price_euro: f64,
}

impl Quote {
    pub fn new(client_id: String, vehicle: String, damage: Vec<PanelDamageReport>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: chrono::Utc::now(),
            client_id,
            vehicle,
            plate: None,
            chassis: None,
            damage,
            total_aw: 0,
            price_euro: 0.0,
        }
    }

    pub fn with_plate(mut self, plate: String) -> Self {
        self.plate = Some(plate);
        self
    }

    pub fn with_chassis(mut self, chassis: String) -> Self {
        self.chassis = Some(chassis);
        self
    }
}
