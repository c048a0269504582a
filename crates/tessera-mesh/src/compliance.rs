//! Partition trait compliance test helpers.
//!
//! These functions verify that a Partition implementation satisfies the
//! invariants kernels rely on. Reused across partition test modules.

use crate::partition::Partition;

/// Assert that every corner of every zone names a point in the partition.
pub fn assert_corners_in_range(part: &dyn Partition) {
    let n = part.point_count();
    for zone in 0..part.zone_count() {
        for &p in part.zone_points(zone) {
            assert!(
                p.index() < n,
                "zone {zone} corner {p} out of range for {n} points"
            );
        }
    }
}

/// Assert that every zone has at least three corners.
pub fn assert_zones_non_degenerate(part: &dyn Partition) {
    for zone in 0..part.zone_count() {
        let corners = part.zone_corner_count(zone);
        assert!(corners >= 3, "zone {zone} has {corners} corners");
    }
}

/// Assert that the coordinate slice length matches `point_count`.
pub fn assert_coords_cover_points(part: &dyn Partition) {
    assert_eq!(
        part.point_coords().len(),
        part.point_count(),
        "point_coords length differs from point_count"
    );
}

/// Assert that two reads of the same zone return the same corners.
pub fn assert_zone_points_stable(part: &dyn Partition) {
    for zone in 0..part.zone_count() {
        assert_eq!(part.zone_points(zone), part.zone_points(zone));
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(part: &dyn Partition) {
    assert_coords_cover_points(part);
    assert_corners_in_range(part);
    assert_zones_non_degenerate(part);
    assert_zone_points_stable(part);
}
