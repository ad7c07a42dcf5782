use std::collections::BTreeMap;

use anyhow::Result;

use crate::ensure_param;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Disk;

/// Fraction of the sheet area covered by `disks`: `Σ πr² / (width × height)`.
/// Zero for an empty set of disks. Fails for non-positive sheet dimensions.
pub fn efficiency(sheet_width: f64, sheet_height: f64, disks: &[Disk]) -> Result<f64> {
    ensure_param!(
        sheet_width.is_finite() && sheet_width > 0.0,
        "sheet_width",
        "sheet width must be positive, got {sheet_width}"
    );
    ensure_param!(
        sheet_height.is_finite() && sheet_height > 0.0,
        "sheet_height",
        "sheet height must be positive, got {sheet_height}"
    );
    let covered = disks.iter().map(|d| d.area()).sum::<f64>();
    Ok(covered / (sheet_width * sheet_height))
}

/// Number of disks per diameter bin.
/// Bin `k` holds the disks with `k * bin_width <= diameter < (k + 1) * bin_width`.
pub fn diameter_histogram(disks: &[Disk], bin_width: f64) -> Result<BTreeMap<i64, usize>> {
    ensure_param!(
        bin_width.is_finite() && bin_width > 0.0,
        "bin_width",
        "histogram bin width must be positive, got {bin_width}"
    );
    let mut bins = BTreeMap::new();
    for d in disks {
        let bin = (d.diameter() / bin_width).floor() as i64;
        *bins.entry(bin).or_insert(0) += 1;
    }
    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidParameter;
    use crate::geometry::primitives::Point;
    use float_cmp::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn empty_set_has_zero_efficiency() {
        assert_eq!(efficiency(10.0, 10.0, &[]).unwrap(), 0.0);
    }

    #[test]
    fn single_inscribed_disk() {
        let d = Disk::new(Point(5.0, 5.0), 5.0);
        let e = efficiency(10.0, 10.0, &[d]).unwrap();
        assert!(approx_eq!(f64, e, PI / 4.0, ulps = 4));
    }

    #[test]
    fn sums_over_all_disks() {
        let disks = [
            Disk::new(Point(1.0, 1.0), 1.0),
            Disk::new(Point(5.0, 5.0), 2.0),
        ];
        let e = efficiency(20.0, 10.0, &disks).unwrap();
        assert!(approx_eq!(f64, e, 5.0 * PI / 200.0, ulps = 4));
    }

    #[test]
    fn invalid_sheet_dimensions() {
        for (w, h) in [(0.0, 1.0), (1.0, -2.0)] {
            let err = efficiency(w, h, &[]).unwrap_err();
            assert!(err.downcast_ref::<InvalidParameter>().is_some());
        }
    }

    #[test]
    fn diameters_are_binned_by_unit() {
        let disks = [
            Disk::new(Point(10.0, 10.0), 5.0),
            Disk::new(Point(30.0, 10.0), 5.25),
            Disk::new(Point(50.0, 10.0), 6.0),
        ];
        let bins = diameter_histogram(&disks, 1.0).unwrap();
        assert_eq!(bins.into_iter().collect::<Vec<_>>(), vec![(10, 2), (12, 1)]);
        assert!(diameter_histogram(&disks, 0.0).is_err());
    }
}
