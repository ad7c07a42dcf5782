use anyhow::Result;

use crate::collision_detection::OverlapChecker;
use crate::entities::{Sheet, efficiency};
use crate::geometry::primitives::Disk;
use crate::util::CDEConfig;
use crate::util::assertions;

/// The set of disks accepted so far inside a [`Sheet`], in acceptance order.
///
/// Disks can only be added: once accepted a disk is never moved or removed.
/// The layout keeps its [`OverlapChecker`] in sync with the accepted disks.
#[derive(Debug)]
pub struct DiskLayout {
    sheet: Sheet,
    disks: Vec<Disk>,
    checker: OverlapChecker,
    /// Largest radius among the accepted disks, 0 if empty
    max_radius: f64,
}

impl DiskLayout {
    /// Creates an empty layout. `max_diameter` is the largest diameter that may ever be placed.
    pub fn new(sheet: Sheet, cde_config: CDEConfig, max_diameter: f64) -> Result<Self> {
        let checker = OverlapChecker::new(cde_config.spatial_index, sheet.bbox(), max_diameter)?;
        Ok(Self {
            sheet,
            disks: vec![],
            checker,
            max_radius: 0.0,
        })
    }

    /// Whether `candidate` overlaps any accepted disk.
    ///
    /// The neighborhood searched by an indexed checker is bounded by the largest radius actually accepted,
    /// which is always sufficient, regardless of the distribution the diameters were drawn from.
    pub fn overlaps(&self, candidate: &Disk) -> bool {
        self.checker
            .overlaps(candidate, &self.disks, self.max_radius)
    }

    /// Adds a disk to the layout. The disk must be contained in the sheet and not overlap any accepted disk.
    pub fn place(&mut self, disk: Disk) -> usize {
        debug_assert!(self.sheet.contains(disk.center, disk.radius), "disk {disk} outside sheet");
        debug_assert!(!self.overlaps(&disk), "disk {disk} overlaps the layout");

        self.checker.register(&disk);
        self.disks.push(disk);
        self.max_radius = f64::max(self.max_radius, disk.radius);

        debug_assert!(assertions::layout_is_consistent(self));
        self.disks.len() - 1
    }

    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn checker(&self) -> &OverlapChecker {
        &self.checker
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Fraction of the sheet covered by the accepted disks
    pub fn efficiency(&self) -> Result<f64> {
        efficiency(self.sheet.width, self.sheet.height, &self.disks)
    }

    /// Consumes the layout, returning the accepted disks in acceptance order.
    pub fn into_disks(self) -> Vec<Disk> {
        self.disks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Point;
    use crate::util::SpatialIndexConfig;
    use test_case::test_case;

    #[test_case(SpatialIndexConfig::Naive; "naive")]
    #[test_case(SpatialIndexConfig::KdTree; "kd_tree")]
    #[test_case(SpatialIndexConfig::Grid { cell_size: None }; "grid")]
    fn place_and_check(spatial_index: SpatialIndexConfig) {
        let sheet = Sheet::try_new(100.0, 100.0).unwrap();
        let mut layout = DiskLayout::new(sheet, CDEConfig { spatial_index }, 20.0).unwrap();
        assert!(layout.is_empty());

        let big = Disk::new(Point(50.0, 50.0), 10.0);
        assert_eq!(layout.place(big), 0);
        assert_eq!(layout.max_radius(), 10.0);

        //small disk whose center is further than 2 * its own radius, but within reach of the big one
        let small = Disk::new(Point(50.0, 62.0), 3.0);
        assert!(layout.overlaps(&small));

        let free = Disk::new(Point(50.0, 63.0), 3.0);
        assert!(!layout.overlaps(&free));
        assert_eq!(layout.place(free), 1);
        assert_eq!(layout.len(), 2);
        let efficiency = layout.efficiency().unwrap();
        assert!(efficiency > 0.0 && efficiency < 1.0);
    }
}
