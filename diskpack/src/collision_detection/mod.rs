/// Overlap checker itself
mod overlap_checker;

/// Spatial indices over the centers of accepted disks
pub mod spatial_index;

#[doc(inline)]
pub use overlap_checker::OverlapChecker;
#[doc(inline)]
pub use overlap_checker::overlaps_any;
