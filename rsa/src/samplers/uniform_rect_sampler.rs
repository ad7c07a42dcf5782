use diskpack::entities::Sheet;
use diskpack::geometry::primitives::{Point, Rect};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// Samples disk centers uniformly from the region of the sheet where a disk of a given radius fits entirely.
#[derive(Debug, Clone)]
pub struct UniformRectSampler {
    pub bbox: Rect,
    pub snap: CoordinateSnap,
    x: Uniform<f64>,
    y: Uniform<f64>,
}

impl UniformRectSampler {
    /// Sampler for disks with `radius` inside `sheet`, i.e. over `[r, W - r] × [r, H - r]`.
    /// `None` if the disk is too large to fit in the sheet.
    pub fn new(sheet: &Sheet, radius: f64, snap: CoordinateSnap) -> Option<Self> {
        let bbox = sheet.center_region(radius)?;
        let x = Uniform::new_inclusive(bbox.x_min, bbox.x_max).ok()?;
        let y = Uniform::new_inclusive(bbox.y_min, bbox.y_max).ok()?;
        Some(Self { bbox, snap, x, y })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        Point(
            self.snap.snap_within(x, self.bbox.x_min, self.bbox.x_max),
            self.snap.snap_within(y, self.bbox.y_min, self.bbox.y_max),
        )
    }
}

/// Grid onto which sampled center coordinates are snapped
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSnap {
    /// Coordinates are used as sampled
    #[default]
    None,
    /// Whole units, fractional part is truncated
    Integer,
    /// Rounded to one decimal
    Decimal,
}

impl CoordinateSnap {
    fn scale(&self) -> Option<f64> {
        match self {
            CoordinateSnap::None => None,
            CoordinateSnap::Integer => Some(1.0),
            CoordinateSnap::Decimal => Some(10.0),
        }
    }

    /// Snaps `v` onto the grid while staying inside `[lo, hi]`.
    /// If the regular snap leaves the range, the nearest grid value on the other side of `v` is used instead.
    /// If no grid value lies inside the range, `v` is returned unchanged.
    pub fn snap_within(&self, v: f64, lo: f64, hi: f64) -> f64 {
        let Some(s) = self.scale() else {
            return v;
        };
        let snapped = match self {
            CoordinateSnap::Integer => (v * s).trunc() / s,
            _ => (v * s).round() / s,
        };
        let range = lo..=hi;
        if range.contains(&snapped) {
            return snapped;
        }
        [(v * s).floor() / s, (v * s).ceil() / s]
            .into_iter()
            .find(|c| range.contains(c))
            .unwrap_or(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskpack::geometry::geo_traits::CollidesWith;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    #[test_case(CoordinateSnap::None; "continuous")]
    #[test_case(CoordinateSnap::Integer; "integer")]
    #[test_case(CoordinateSnap::Decimal; "decimal")]
    fn samples_stay_in_center_region(snap: CoordinateSnap) {
        let sheet = Sheet::try_new(30.0, 20.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        for radius in [0.5, 2.25, 5.5, 9.95] {
            let sampler = UniformRectSampler::new(&sheet, radius, snap).unwrap();
            for _ in 0..1000 {
                let p = sampler.sample(&mut rng);
                assert!(sampler.bbox.collides_with(&p), "{p} outside {:?}", sampler.bbox);
                assert!(sheet.contains(p, radius));
            }
        }
    }

    #[test]
    fn too_large_disk_has_no_sampler() {
        let sheet = Sheet::try_new(30.0, 20.0).unwrap();
        assert!(UniformRectSampler::new(&sheet, 10.0, CoordinateSnap::None).is_some());
        assert!(UniformRectSampler::new(&sheet, 10.01, CoordinateSnap::None).is_none());
    }

    #[test]
    fn snapping_respects_bounds() {
        //regular truncation would leave the range
        assert_eq!(CoordinateSnap::Integer.snap_within(5.7, 5.5, 94.5), 6.0);
        assert_eq!(CoordinateSnap::Integer.snap_within(42.9, 5.5, 94.5), 42.0);
        assert_eq!(CoordinateSnap::Decimal.snap_within(94.46, 5.55, 94.45), 94.4);
        //no integer inside the range
        assert_eq!(CoordinateSnap::Integer.snap_within(3.4, 3.2, 3.6), 3.4);
        assert_eq!(CoordinateSnap::None.snap_within(3.456, 0.0, 10.0), 3.456);
    }
}
