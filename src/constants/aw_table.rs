//! AW (Arbeitswert) tier tables for hail damage pricing
//!
//! For each (orientation, dent size) combination the catalog lists a sparse
//! ascending set of dent-count tiers with the base AW charged at that tier.
//! A requested count is rounded UP to the next listed tier; counts beyond
//! the last tier are billed at the last tier (the catalog stops at 600
//! dents per panel per size).
//!
//! These values are catalog data. Do not regenerate them from a formula;
//! the steps between tiers are not a clean progression, and quoted amounts
//! must stay bit-for-bit stable across releases.

use crate::domain::model::{DentSize, PanelOrientation};

const HORIZONTAL_20: &[(u32, u32)] = &[
    (1, 6), (2, 7), (3, 8), (4, 9), (5, 10),
    (6, 11), (7, 12), (8, 13), (9, 14), (10, 15),
    (13, 16), (16, 18), (19, 21), (22, 23), (25, 25),
    (30, 29), (35, 33), (40, 36), (45, 40), (50, 43),
    (60, 50), (70, 57), (80, 64), (90, 71), (100, 78),
    (125, 94), (150, 111), (175, 127), (200, 143), (250, 175),
    (300, 207), (400, 268), (500, 329), (600, 389),
];

const HORIZONTAL_30: &[(u32, u32)] = &[
    (1, 8), (2, 9), (3, 10), (4, 11), (5, 13),
    (6, 14), (7, 15), (8, 16), (9, 17), (10, 18),
    (13, 21), (16, 24), (19, 26), (22, 29), (25, 32),
    (30, 37), (35, 41), (40, 46), (45, 50), (50, 55),
    (60, 63), (70, 72), (80, 81), (90, 89), (100, 98),
    (125, 119), (150, 139), (175, 160), (200, 180), (250, 220),
    (300, 259), (400, 336), (500, 412), (600, 487),
];

const HORIZONTAL_40: &[(u32, u32)] = &[
    (1, 10), (2, 12), (3, 13), (4, 14), (5, 16),
    (6, 17), (7, 18), (8, 19), (9, 21), (10, 22),
    (13, 26), (16, 29), (19, 33), (22, 36), (25, 40),
    (30, 46), (35, 51), (40, 57), (45, 62), (50, 68),
    (60, 79), (70, 90), (80, 100), (90, 111), (100, 121),
    (125, 147), (150, 173), (175, 198), (200, 223), (250, 272),
    (300, 321), (400, 417), (500, 511), (600, 603),
];

const VERTICAL_20: &[(u32, u32)] = &[
    (1, 4), (2, 5), (3, 6), (4, 7), (5, 8),
    (6, 9), (7, 10), (8, 11), (9, 12), (10, 13),
    (13, 14), (16, 15), (19, 16), (22, 18), (25, 20),
    (30, 23), (35, 27), (40, 30), (45, 33), (50, 36),
    (60, 42), (70, 48), (80, 53), (90, 59), (100, 65),
    (125, 79), (150, 93), (175, 107), (200, 121), (250, 148),
    (300, 175), (400, 227), (500, 279), (600, 329),
];

const VERTICAL_30: &[(u32, u32)] = &[
    (1, 6), (2, 7), (3, 8), (4, 9), (5, 10),
    (6, 11), (7, 12), (8, 13), (9, 14), (10, 15),
    (13, 17), (16, 19), (19, 21), (22, 24), (25, 26),
    (30, 30), (35, 34), (40, 38), (45, 41), (50, 45),
    (60, 53), (70, 60), (80, 67), (90, 74), (100, 81),
    (125, 99), (150, 116), (175, 133), (200, 150), (250, 184),
    (300, 217), (400, 281), (500, 345), (600, 408),
];

const VERTICAL_40: &[(u32, u32)] = &[
    (1, 8), (2, 9), (3, 10), (4, 12), (5, 13),
    (6, 14), (7, 15), (8, 16), (9, 17), (10, 18),
    (13, 21), (16, 24), (19, 27), (22, 30), (25, 33),
    (30, 38), (35, 43), (40, 47), (45, 52), (50, 57),
    (60, 66), (70, 75), (80, 84), (90, 93), (100, 101),
    (125, 123), (150, 144), (175, 166), (200, 187), (250, 228),
    (300, 269), (400, 349), (500, 428), (600, 506),
];

/// Tier table for one (orientation, size) combination
pub fn tiers(orientation: PanelOrientation, size: DentSize) -> &'static [(u32, u32)] {
    match (orientation, size) {
        (PanelOrientation::Horizontal, DentSize::Mm20) => HORIZONTAL_20,
        (PanelOrientation::Horizontal, DentSize::Mm30) => HORIZONTAL_30,
        (PanelOrientation::Horizontal, DentSize::Mm40) => HORIZONTAL_40,
        (PanelOrientation::Vertical, DentSize::Mm20) => VERTICAL_20,
        (PanelOrientation::Vertical, DentSize::Mm30) => VERTICAL_30,
        (PanelOrientation::Vertical, DentSize::Mm40) => VERTICAL_40,
    }
}

/// Base AW for a dent count, after tier resolution
///
/// Picks the smallest tier >= `count`; counts past the last tier are
/// clamped to it. `count` must be at least 1 (zero buckets are handled
/// before the table is consulted).
pub fn base_work_units(orientation: PanelOrientation, size: DentSize, count: u32) -> u32 {
    let table = tiers(orientation, size);
    for &(tier, aw) in table {
        if count <= tier {
            return aw;
        }
    }
    // Past the catalog's top tier
    table[table.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ORIENTATIONS: [PanelOrientation; 2] =
        [PanelOrientation::Horizontal, PanelOrientation::Vertical];

    #[test]
    fn test_reference_anchors() {
        // Anchors from the pricing catalog: horizontal 20mm, tiers 1 and 2
        assert_eq!(
            base_work_units(PanelOrientation::Horizontal, DentSize::Mm20, 1),
            6
        );
        assert_eq!(
            base_work_units(PanelOrientation::Horizontal, DentSize::Mm20, 2),
            7
        );
    }

    #[test]
    fn test_tier_rounds_up() {
        // 11 and 12 are not listed; both bill at the 13-dent tier
        let at_13 = base_work_units(PanelOrientation::Horizontal, DentSize::Mm20, 13);
        assert_eq!(
            base_work_units(PanelOrientation::Horizontal, DentSize::Mm20, 11),
            at_13
        );
        assert_eq!(
            base_work_units(PanelOrientation::Horizontal, DentSize::Mm20, 12),
            at_13
        );
    }

    #[test]
    fn test_clamps_to_top_tier() {
        for orientation in ALL_ORIENTATIONS {
            for size in DentSize::ALL {
                let top = base_work_units(orientation, size, 600);
                assert_eq!(base_work_units(orientation, size, 601), top);
                assert_eq!(base_work_units(orientation, size, 10_000), top);
            }
        }
    }

    #[test]
    fn test_tables_strictly_ascending() {
        for orientation in ALL_ORIENTATIONS {
            for size in DentSize::ALL {
                let table = tiers(orientation, size);
                assert!(!table.is_empty());
                for window in table.windows(2) {
                    assert!(window[0].0 < window[1].0, "tiers must ascend");
                    assert!(window[0].1 <= window[1].1, "AW must not decrease");
                }
            }
        }
    }

    #[test]
    fn test_monotonic_over_counts() {
        for orientation in ALL_ORIENTATIONS {
            for size in DentSize::ALL {
                let mut prev = 0;
                for count in 1..=650 {
                    let aw = base_work_units(orientation, size, count);
                    assert!(
                        aw >= prev,
                        "AW regressed at {:?}/{:?} count {}",
                        orientation,
                        size,
                        count
                    );
                    prev = aw;
                }
            }
        }
    }
}
