use itertools::Itertools;
use log::error;

use crate::collision_detection::OverlapChecker;
use crate::entities::{DiskLayout, Sheet};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Disk;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// No pair of distinct disks overlaps (touching is allowed).
pub fn no_overlap(disks: &[Disk]) -> bool {
    match disks
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, d1), (_, d2))| d1.collides_with(*d2))
    {
        Some(((i, d1), (j, d2))) => {
            error!("disks {i} [{d1}] and {j} [{d2}] overlap");
            false
        }
        None => true,
    }
}

/// Every disk lies fully inside the sheet.
pub fn all_contained(disks: &[Disk], sheet: &Sheet) -> bool {
    match disks
        .iter()
        .position(|d| !sheet.contains(d.center, d.radius))
    {
        Some(i) => {
            error!("disk {i} [{}] is not contained in {sheet:?}", disks[i]);
            false
        }
        None => true,
    }
}

pub fn layout_is_consistent(layout: &DiskLayout) -> bool {
    let index_in_sync = match layout.checker() {
        OverlapChecker::Naive => true,
        OverlapChecker::Indexed(index) => index.len() == layout.len(),
    };
    let max_radius_correct = layout
        .disks()
        .iter()
        .map(|d| d.radius)
        .fold(0.0, f64::max)
        == layout.max_radius();

    index_in_sync && max_radius_correct
}
