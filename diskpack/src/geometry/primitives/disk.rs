use std::f64::consts::PI;
use std::fmt::Display;

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;

/// Geometric primitive representing a filled circle, the unit of packing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
    pub center: Point,
    pub radius: f64,
}

impl Disk {
    /// Creates a disk, the radius must be positive and the center finite.
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "invalid disk radius: {}",
            radius
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid disk center: {:?}",
            center
        );
        Self { center, radius }
    }

    pub fn x(&self) -> f64 {
        self.center.0
    }

    pub fn y(&self) -> f64 {
        self.center.1
    }
}

impl CollidesWith<Disk> for Disk {
    /// Two disks overlap iff the distance between their centers is strictly smaller than the sum of their radii.
    /// Touching disks do not overlap.
    #[inline(always)]
    fn collides_with(&self, other: &Disk) -> bool {
        let sq_d = self.center.sq_distance(&other.center);
        let r_sum = self.radius + other.radius;
        sq_d < r_sum * r_sum
    }
}

impl Shape for Disk {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c: {}, r: {:.3}", self.center, self.radius)
    }
}
