use anyhow::Result;
use log::debug;

use crate::collision_detection::spatial_index::{KdTree, SpatialIndex, UniformGrid};
use crate::ensure_param;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Disk, Rect};
use crate::util::SpatialIndexConfig;

/// Decides whether a candidate disk overlaps any of the accepted disks.
///
/// The accepted disks themselves are owned by the [`DiskLayout`](crate::entities::DiskLayout),
/// the checker only owns the (optional) spatial index over their centers.
#[derive(Debug)]
pub enum OverlapChecker {
    /// Scans every accepted disk
    Naive,
    /// Scans only the disks whose centers are close enough to possibly overlap
    Indexed(Box<dyn SpatialIndex>),
}

impl OverlapChecker {
    /// Creates a checker for disks inside `bbox`.
    /// `max_diameter` is the largest diameter that will ever be registered, used to size grid cells by default.
    pub fn new(config: SpatialIndexConfig, bbox: Rect, max_diameter: f64) -> Result<Self> {
        let checker = match config {
            SpatialIndexConfig::Naive => OverlapChecker::Naive,
            SpatialIndexConfig::KdTree => OverlapChecker::Indexed(Box::new(KdTree::new())),
            SpatialIndexConfig::Grid { cell_size } => {
                let cell_size = cell_size.unwrap_or(max_diameter);
                ensure_param!(
                    cell_size.is_finite() && cell_size > 0.0,
                    "cell_size",
                    "grid cell size must be positive, got {cell_size}"
                );
                let grid = UniformGrid::try_new(bbox, cell_size)?;
                debug!("[CDE] grid index with {} cells of size {cell_size}", grid.n_cells());
                OverlapChecker::Indexed(Box::new(grid))
            }
        };
        Ok(checker)
    }

    /// Registers a newly accepted disk, which must be appended to `disks` right after.
    pub fn register(&mut self, disk: &Disk) {
        match self {
            OverlapChecker::Naive => {}
            OverlapChecker::Indexed(index) => index.insert(disk.center),
        }
    }

    /// Whether `candidate` overlaps any disk in `disks`.
    ///
    /// `max_radius` must be at least the largest radius in `disks`:
    /// two disks can only overlap if their centers are closer than `candidate.radius + max_radius`.
    pub fn overlaps(&self, candidate: &Disk, disks: &[Disk], max_radius: f64) -> bool {
        match self {
            OverlapChecker::Naive => overlaps_any(candidate, disks),
            OverlapChecker::Indexed(index) => {
                debug_assert!(index.len() == disks.len(), "index out of sync with disks");
                index.any_within(candidate.center, candidate.radius + max_radius, &mut |i| {
                    candidate.collides_with(&disks[i])
                })
            }
        }
    }
}

/// Whether `candidate` overlaps any disk in `neighborhood`.
pub fn overlaps_any<'a>(candidate: &Disk, neighborhood: impl IntoIterator<Item = &'a Disk>) -> bool {
    neighborhood.into_iter().any(|d| candidate.collides_with(d))
}
