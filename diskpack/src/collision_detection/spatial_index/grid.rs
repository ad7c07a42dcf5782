use std::ops::RangeInclusive;

use anyhow::Result;

use crate::collision_detection::spatial_index::SpatialIndex;
use crate::ensure_param;
use crate::geometry::primitives::{Point, Rect};

/// Uniform bucket grid over a bounding box, updated incrementally on insertion.
///
/// Each cell stores the indices of the points that fall inside it.
/// Points outside the bounding box are stored in the nearest border cell, so queries stay exact for any point.
#[derive(Clone, Debug)]
pub struct UniformGrid {
    bbox: Rect,
    cell_size: f64,
    n_rows: usize,
    n_cols: usize,
    cells: Vec<Vec<usize>>,
    points: Vec<Point>,
}

/// Upper bound on the number of cells of a [`UniformGrid`]
pub const MAX_GRID_CELLS: usize = 1 << 22;

impl UniformGrid {
    /// Fails if `cell_size` is not positive or would divide `bbox` into more than [`MAX_GRID_CELLS`] cells.
    pub fn try_new(bbox: Rect, cell_size: f64) -> Result<Self> {
        ensure_param!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell_size",
            "grid cell size must be positive, got {cell_size}"
        );
        //float to int casts saturate, the product is checked below
        let n_cols = usize::max(1, (bbox.width() / cell_size).ceil() as usize);
        let n_rows = usize::max(1, (bbox.height() / cell_size).ceil() as usize);
        let n_cells = n_rows.checked_mul(n_cols);
        ensure_param!(
            n_cells.is_some_and(|n| n <= MAX_GRID_CELLS),
            "cell_size",
            "grid cell size {cell_size} is too small for a {}x{} area, at most {MAX_GRID_CELLS} cells are allowed",
            bbox.width(),
            bbox.height()
        );

        Ok(Self {
            bbox,
            cell_size,
            n_rows,
            n_cols,
            cells: vec![vec![]; n_rows * n_cols],
            points: vec![],
        })
    }

    pub fn n_cells(&self) -> usize {
        self.n_rows * self.n_cols
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn col(&self, x: f64) -> usize {
        let col = ((x - self.bbox.x_min) / self.cell_size).floor();
        col.clamp(0.0, (self.n_cols - 1) as f64) as usize
    }

    fn row(&self, y: f64) -> usize {
        let row = ((y - self.bbox.y_min) / self.cell_size).floor();
        row.clamp(0.0, (self.n_rows - 1) as f64) as usize
    }

    fn cols_in_range(&self, x_min: f64, x_max: f64) -> RangeInclusive<usize> {
        self.col(x_min)..=self.col(x_max)
    }

    fn rows_in_range(&self, y_min: f64, y_max: f64) -> RangeInclusive<usize> {
        self.row(y_min)..=self.row(y_max)
    }
}

impl SpatialIndex for UniformGrid {
    fn insert(&mut self, point: Point) {
        let cell = self.row(point.1) * self.n_cols + self.col(point.0);
        self.cells[cell].push(self.points.len());
        self.points.push(point);
    }

    fn any_within(
        &self,
        center: Point,
        radius: f64,
        predicate: &mut dyn FnMut(usize) -> bool,
    ) -> bool {
        let sq_radius = radius * radius;
        let Point(x, y) = center;
        for row in self.rows_in_range(y - radius, y + radius) {
            for col in self.cols_in_range(x - radius, x + radius) {
                let cell = &self.cells[row * self.n_cols + col];
                let hit = cell
                    .iter()
                    .copied()
                    .filter(|&i| self.points[i].sq_distance(&center) <= sq_radius)
                    .any(&mut *predicate);
                if hit {
                    return true;
                }
            }
        }
        false
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
