//! Pricing engine for one dent-size bucket
//!
//! Converts a (size, count, orientation, material flags) tuple into AW work
//! units, labor hours and an internal labor cost. Pure function over the
//! static AW tier tables; the quote-level customer price is derived
//! separately by the aggregator.

use crate::constants::{
    base_work_units, ALUMINUM_FACTOR, CAVITY_ACCESS_EXTRA_AW, GLUE_FACTOR, PRE_PRESS_FACTOR,
};
use crate::domain::model::{DentSize, MaterialFlags, PanelOrientation, PricingResult};
use crate::error::{Error, Result};

/// Round to a fixed number of decimals, half away from zero
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Price one dent-size bucket
///
/// # Arguments
/// * `size_mm` - Dent diameter in millimeters; must be 20, 30 or 40
/// * `count` - Number of dents of that size on the panel
/// * `orientation` - Horizontal or vertical panel
/// * `materials` - Material/handling flags (`paint` has no pricing effect)
/// * `hourly_rate` - Workshop hourly rate in euros
///
/// # Pricing rules
/// The dent count is rounded up to the next catalog tier (clamped at the
/// top tier) to obtain the base AW. Surcharges then apply in fixed order,
/// each to the running value: aluminum x1.25, glue technique x1.30,
/// pre-press x1.60, and finally cavity access adds a flat 4 AW after the
/// multiplicative factors. The result is rounded half-up to whole AW;
/// hours are AW/10 and cost is hours x hourly rate.
///
/// # Errors
/// * `InvalidDentSize` when `size_mm` is not a supported size (never
///   silently defaulted)
/// * `InvalidDentCount` when `count` is negative
///
/// A zero count is a valid "no damage" input and returns the zero result
/// without consulting the tables.
pub fn compute(
    size_mm: u32,
    count: i32,
    orientation: PanelOrientation,
    materials: &MaterialFlags,
    hourly_rate: f64,
) -> Result<PricingResult> {
    let size = DentSize::from_mm(size_mm)?;

    if count < 0 {
        return Err(Error::InvalidDentCount(count));
    }
    if count == 0 {
        return Ok(PricingResult::zero());
    }

    let mut aw = base_work_units(orientation, size, count as u32) as f64;

    if materials.aluminum {
        aw *= ALUMINUM_FACTOR;
    }
    if materials.glue_technique {
        aw *= GLUE_FACTOR;
    }
    if materials.needs_pre_press {
        aw *= PRE_PRESS_FACTOR;
    }
    // Additive, strictly after the multiplicative surcharges
    if materials.needs_cavity_access {
        aw += CAVITY_ACCESS_EXTRA_AW;
    }

    let work_units = aw.round() as u32;
    let labor_hours = round_to(work_units as f64 / 10.0, 1);
    let cost = round_to(labor_hours * hourly_rate, 2);

    Ok(PricingResult {
        work_units,
        labor_hours,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HOURLY_RATE;

    fn no_flags() -> MaterialFlags {
        MaterialFlags::default()
    }

    // ==========================================
    // Catalog reference scenarios
    // ==========================================

    #[test]
    fn test_single_dent_no_flags() {
        // Horizontal 20mm, tier 1 -> 6 AW
        let result = compute(
            20,
            1,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result.work_units, 6);
        assert!((result.labor_hours - 0.6).abs() < 1e-9);
        assert!((result.cost - 16.8).abs() < 0.001);
    }

    #[test]
    fn test_two_dents_aluminum() {
        // Tier 2 -> 7 AW, aluminum 7 x 1.25 = 8.75 -> 9 AW
        let flags = MaterialFlags {
            aluminum: true,
            ..Default::default()
        };
        let result = compute(
            20,
            2,
            PanelOrientation::Horizontal,
            &flags,
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result.work_units, 9);
        assert!((result.labor_hours - 0.9).abs() < 1e-9);
        assert!((result.cost - 25.2).abs() < 0.001);
    }

    #[test]
    fn test_vertical_table_selected() {
        // Vertical 20mm tier 1 is cheaper than horizontal
        let h = compute(
            20,
            1,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        let v = compute(
            20,
            1,
            PanelOrientation::Vertical,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert!(v.work_units < h.work_units);
        assert_eq!(v.work_units, 4);
    }

    // ==========================================
    // Surcharge rules
    // ==========================================

    #[test]
    fn test_multiplicative_flags_compound() {
        // Base 7 AW: 7 x 1.25 x 1.30 = 11.375 -> 11
        let flags = MaterialFlags {
            aluminum: true,
            glue_technique: true,
            ..Default::default()
        };
        let result = compute(
            20,
            2,
            PanelOrientation::Horizontal,
            &flags,
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result.work_units, 11);
    }

    #[test]
    fn test_pre_press_factor() {
        // Base 6 AW: 6 x 1.60 = 9.6 -> 10
        let flags = MaterialFlags {
            needs_pre_press: true,
            ..Default::default()
        };
        let result = compute(
            20,
            1,
            PanelOrientation::Horizontal,
            &flags,
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result.work_units, 10);
    }

    #[test]
    fn test_cavity_access_applied_after_multipliers() {
        // Base 7 AW with aluminum + glue + cavity access:
        //   correct: 7 x 1.25 x 1.30 + 4 = 15.375 -> 15
        //   wrong (additive first): (7 + 4) x 1.25 x 1.30 = 17.875 -> 18
        let flags = MaterialFlags {
            aluminum: true,
            glue_technique: true,
            needs_cavity_access: true,
            ..Default::default()
        };
        let result = compute(
            20,
            2,
            PanelOrientation::Horizontal,
            &flags,
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result.work_units, 15);
        assert_ne!(result.work_units, 18);
    }

    #[test]
    fn test_paint_has_no_pricing_effect() {
        let painted = MaterialFlags {
            paint: true,
            ..Default::default()
        };
        let plain = compute(
            30,
            5,
            PanelOrientation::Vertical,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        let with_paint = compute(
            30,
            5,
            PanelOrientation::Vertical,
            &painted,
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(plain, with_paint);
    }

    // ==========================================
    // Tier clamping and monotonicity
    // ==========================================

    #[test]
    fn test_clamps_past_top_tier() {
        let at_top = compute(
            20,
            600,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        let beyond = compute(
            20,
            10_000,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(at_top.work_units, beyond.work_units);
    }

    #[test]
    fn test_work_units_monotonic_in_count() {
        let mut prev = 0;
        for count in 1..=650 {
            let result = compute(
                30,
                count,
                PanelOrientation::Vertical,
                &no_flags(),
                DEFAULT_HOURLY_RATE,
            )
            .unwrap();
            assert!(result.work_units >= prev, "regressed at count {}", count);
            prev = result.work_units;
        }
    }

    // ==========================================
    // Input validation
    // ==========================================

    #[test]
    fn test_zero_count_returns_zero() {
        let result = compute(
            40,
            0,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        )
        .unwrap();
        assert_eq!(result, PricingResult::zero());
    }

    #[test]
    fn test_unsupported_size_fails() {
        let result = compute(
            25,
            3,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        );
        assert!(matches!(result, Err(Error::InvalidDentSize(25))));
    }

    #[test]
    fn test_negative_count_fails() {
        let result = compute(
            20,
            -1,
            PanelOrientation::Horizontal,
            &no_flags(),
            DEFAULT_HOURLY_RATE,
        );
        assert!(matches!(result, Err(Error::InvalidDentCount(-1))));
    }

    // ==========================================
    // Hourly rate handling
    // ==========================================

    #[test]
    fn test_custom_hourly_rate() {
        // 6 AW -> 0.6h; at 35 euros/h -> 21.00
        let result =
            compute(20, 1, PanelOrientation::Horizontal, &no_flags(), 35.0).unwrap();
        assert!((result.cost - 21.0).abs() < 0.001);
    }

    #[test]
    fn test_cost_rounded_to_cents() {
        // 7 AW -> 0.7h; at 33.33 euros/h -> 23.331 -> 23.33
        let result =
            compute(20, 2, PanelOrientation::Horizontal, &no_flags(), 33.33).unwrap();
        assert!((result.cost - 23.33).abs() < 0.001);
    }
}
