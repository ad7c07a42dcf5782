use std::fmt::Debug;

use crate::geometry::primitives::Point;

mod grid;
mod kd_tree;

#[doc(inline)]
pub use grid::UniformGrid;
#[doc(inline)]
pub use kd_tree::KdTree;

/// A set of points supporting fixed-radius neighbor queries.
///
/// Points are identified by their insertion order: the n-th inserted point has index `n`.
/// Every implementation must return exactly the same indices for the same sequence of inserts and queries;
/// only the internal structure (and therefore the speed) differs.
pub trait SpatialIndex: Debug + Send + Sync {
    /// Adds a point, which receives index [`SpatialIndex::len`] (before insertion).
    fn insert(&mut self, point: Point);

    /// Whether `predicate` holds for any point within distance `radius` (inclusive) of `center`.
    /// Points are visited in no particular order and the search stops at the first hit.
    fn any_within(
        &self,
        center: Point,
        radius: f64,
        predicate: &mut dyn FnMut(usize) -> bool,
    ) -> bool;

    /// Indices of all points within distance `radius` (inclusive) of `center`, sorted ascending.
    /// An empty index yields an empty result.
    fn query_radius(&self, center: Point, radius: f64) -> Vec<usize> {
        let mut buffer = vec![];
        self.any_within(center, radius, &mut |i| {
            buffer.push(i);
            false
        });
        buffer.sort_unstable();
        buffer
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reference answer for a radius query: a full scan over all points.
pub fn brute_force_query(points: &[Point], center: Point, radius: f64) -> Vec<usize> {
    let sq_radius = radius * radius;
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.sq_distance(&center) <= sq_radius)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Rect;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn indices(bbox: Rect, cell_size: f64) -> Vec<Box<dyn SpatialIndex>> {
        vec![
            Box::new(KdTree::new()),
            Box::new(UniformGrid::try_new(bbox, cell_size).unwrap()),
        ]
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(7; "seed 7")]
    fn indices_agree_with_brute_force(seed: u64) {
        let bbox = Rect::try_new(0.0, 0.0, 200.0, 120.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut points = vec![];
        let mut indices = indices(bbox, 15.0);

        for _ in 0..300 {
            let p = Point(rng.random_range(0.0..200.0), rng.random_range(0.0..120.0));
            points.push(p);
            indices.iter_mut().for_each(|idx| idx.insert(p));

            let q = Point(rng.random_range(-10.0..210.0), rng.random_range(-10.0..130.0));
            let r = rng.random_range(0.0..40.0);
            let expected = brute_force_query(&points, q, r);
            for idx in indices.iter() {
                assert_eq!(idx.query_radius(q, r), expected, "{idx:?}");
            }
        }
    }

    #[test]
    fn empty_index_returns_nothing() {
        let bbox = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        for idx in indices(bbox, 1.0) {
            assert!(idx.is_empty());
            assert!(idx.query_radius(Point(5.0, 5.0), 100.0).is_empty());
        }
    }

    #[test]
    fn query_radius_is_inclusive() {
        let bbox = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        for mut idx in indices(bbox, 2.0) {
            idx.insert(Point(1.0, 1.0));
            idx.insert(Point(4.0, 5.0));
            assert_eq!(idx.query_radius(Point(1.0, 1.0), 5.0), vec![0, 1]);
            assert_eq!(idx.query_radius(Point(1.0, 1.0), 4.999), vec![0]);
        }
    }

    #[test]
    fn any_within_stops_at_first_hit() {
        let bbox = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        for mut idx in indices(bbox, 2.0) {
            for i in 0..20 {
                idx.insert(Point(i as f64 * 0.5, 5.0));
            }
            let mut n_visited = 0;
            assert!(idx.any_within(Point(5.0, 5.0), 10.0, &mut |_| {
                n_visited += 1;
                true
            }));
            assert_eq!(n_visited, 1, "{idx:?}");

            //a rejecting predicate sees exactly the points within the radius
            let mut visited = vec![];
            assert!(!idx.any_within(Point(0.0, 5.0), 1.0, &mut |i| {
                visited.push(i);
                false
            }));
            visited.sort_unstable();
            assert_eq!(visited, vec![0, 1, 2]);
        }
    }

    #[test]
    fn duplicate_points_are_all_reported() {
        let bbox = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        for mut idx in indices(bbox, 3.0) {
            for _ in 0..4 {
                idx.insert(Point(2.0, 2.0));
            }
            assert_eq!(idx.len(), 4);
            assert_eq!(idx.query_radius(Point(2.0, 2.0), 0.0), vec![0, 1, 2, 3]);
        }
    }
}
