//! Quote aggregation across all panels of a vehicle
//!
//! Reduces a full damage report to quote totals. The customer-facing price
//! is total AW x the flat per-unit rate, NOT the sum of the per-bucket
//! labor costs: bucket costs are internal costing figures, the flat
//! conversion is the quoted price. This two-tier split is deliberate
//! workshop policy.

use crate::constants::{orientation_for, panel_name, DEFAULT_HOURLY_RATE, EURO_PER_WORK_UNIT};
use crate::domain::model::{
    BucketLine, DentSize, PanelDamageReport, PanelLine, QuoteBreakdown, QuoteTotals,
};
use crate::domain::service::pricing_engine::{self, round_to};
use crate::error::{Error, Result};

/// Price every non-empty bucket of every panel, with per-panel detail
///
/// `hourly_rate` only affects the informational per-bucket costs; the
/// quote totals depend on AW alone.
///
/// # Errors
/// Any failing bucket aborts the whole aggregation with
/// `PanelComputation` naming the panel and bucket; no partial totals are
/// produced, since a quote must never silently drop a panel's damage.
pub fn calculate_breakdown(
    reports: &[PanelDamageReport],
    hourly_rate: f64,
) -> Result<QuoteBreakdown> {
    let mut panels = Vec::with_capacity(reports.len());
    let mut total_work_units: u32 = 0;

    for report in reports {
        let orientation = orientation_for(&report.panel_id);
        let mut buckets = Vec::new();
        let mut panel_work_units: u32 = 0;

        for size in DentSize::ALL {
            let count = report.dents.get(size);
            if count == 0 {
                continue;
            }

            let result = pricing_engine::compute(
                size.mm(),
                count,
                orientation,
                &report.materials,
                hourly_rate,
            )
            .map_err(|source| Error::PanelComputation {
                panel_id: report.panel_id.clone(),
                size_mm: size.mm(),
                source: Box::new(source),
            })?;

            panel_work_units += result.work_units;
            buckets.push(BucketLine {
                size_mm: size.mm(),
                count,
                result,
            });
        }

        total_work_units += panel_work_units;
        panels.push(PanelLine {
            panel_id: report.panel_id.clone(),
            panel_name: panel_name(&report.panel_id).to_string(),
            orientation,
            buckets,
            panel_work_units,
        });
    }

    Ok(QuoteBreakdown {
        panels,
        totals: totals_from_work_units(total_work_units),
    })
}

/// Reduce a damage report to quote totals
pub fn calculate_total(reports: &[PanelDamageReport]) -> Result<QuoteTotals> {
    // The flat conversion makes the hourly rate irrelevant to totals
    let breakdown = calculate_breakdown(reports, DEFAULT_HOURLY_RATE)?;
    Ok(breakdown.totals)
}

fn totals_from_work_units(total_work_units: u32) -> QuoteTotals {
    QuoteTotals {
        total_work_units,
        total_cost: round_to(total_work_units as f64 * EURO_PER_WORK_UNIT, 2),
    }
}
