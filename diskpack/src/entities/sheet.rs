use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ensure_param;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};

/// Rectangular region `[0, width] × [0, height]` in which disks are packed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
}

impl Sheet {
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        ensure_param!(
            width.is_finite() && width > 0.0,
            "sheet_width",
            "sheet width must be positive, got {width}"
        );
        ensure_param!(
            height.is_finite() && height > 0.0,
            "sheet_height",
            "sheet height must be positive, got {height}"
        );
        Ok(Self { width, height })
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// Region in which the center of a disk with `radius` must lie for the disk to be fully inside the sheet.
    /// `None` if the disk does not fit in the sheet at all.
    pub fn center_region(&self, radius: f64) -> Option<Rect> {
        self.bbox().shrink(radius)
    }

    /// Whether a disk with `radius` centered at `center` lies fully inside the sheet.
    pub fn contains(&self, center: Point, radius: f64) -> bool {
        self.center_region(radius)
            .is_some_and(|region| region.collides_with(&center))
    }
}
