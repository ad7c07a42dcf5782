use ordered_float::OrderedFloat;

use crate::collision_detection::spatial_index::SpatialIndex;
use crate::geometry::primitives::Point;

/// Static 2-d tree over a set of points, rebuilt from scratch on every insertion.
///
/// Rebuilding is O(n log² n) per insert, but keeps the tree perfectly balanced and the implementation trivial.
/// [`UniformGrid`](super::UniformGrid) is the incremental alternative.
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    points: Vec<Point>,
    nodes: Vec<KdNode>,
    root: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
struct KdNode {
    /// index of the point in `points`
    point: usize,
    axis: Axis,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn coord(self, p: &Point) -> f64 {
        match self {
            Axis::X => p.0,
            Axis::Y => p.1,
        }
    }

    fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl KdTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree over `points`, indexed in the order given.
    pub fn build(points: Vec<Point>) -> Self {
        let mut tree = KdTree {
            points,
            nodes: vec![],
            root: None,
        };
        tree.rebuild();
        tree
    }

    /// Discards all nodes and builds a balanced tree over the current points.
    pub fn rebuild(&mut self) {
        let mut order = (0..self.points.len()).collect::<Vec<usize>>();
        self.nodes.clear();
        self.nodes.reserve(self.points.len());
        self.root = Self::build_subtree(&self.points, &mut self.nodes, &mut order, Axis::X);
        debug_assert!(self.nodes.len() == self.points.len());
    }

    fn build_subtree(
        points: &[Point],
        nodes: &mut Vec<KdNode>,
        order: &mut [usize],
        axis: Axis,
    ) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        //ties are broken on index to make the shape of the tree independent of the sort implementation
        order.sort_unstable_by_key(|&i| (OrderedFloat(axis.coord(&points[i])), i));
        let median = order.len() / 2;
        let (left, rest) = order.split_at_mut(median);
        let (pivot, right) = rest.split_first_mut().expect("non-empty slice");

        let node_idx = nodes.len();
        nodes.push(KdNode {
            point: *pivot,
            axis,
            left: None,
            right: None,
        });
        let left = Self::build_subtree(points, nodes, left, axis.next());
        let right = Self::build_subtree(points, nodes, right, axis.next());
        nodes[node_idx].left = left;
        nodes[node_idx].right = right;

        Some(node_idx)
    }

    fn any_within_subtree(
        &self,
        node: Option<usize>,
        center: Point,
        radius: f64,
        predicate: &mut dyn FnMut(usize) -> bool,
    ) -> bool {
        let Some(node_idx) = node else {
            return false;
        };
        let node = &self.nodes[node_idx];
        let p = &self.points[node.point];
        if p.sq_distance(&center) <= radius * radius && predicate(node.point) {
            return true;
        }
        //left subtree holds coordinates <= pivot, right subtree coordinates >= pivot
        let pivot = node.axis.coord(p);
        let c = node.axis.coord(&center);
        (c - radius <= pivot && self.any_within_subtree(node.left, center, radius, predicate))
            || (c + radius >= pivot && self.any_within_subtree(node.right, center, radius, predicate))
    }

    /// Depth of the tree, 0 if empty
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[KdNode], node: Option<usize>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + usize::max(depth_of(nodes, nodes[n].left), depth_of(nodes, nodes[n].right)),
            }
        }
        depth_of(&self.nodes, self.root)
    }
}

impl SpatialIndex for KdTree {
    fn insert(&mut self, point: Point) {
        self.points.push(point);
        self.rebuild();
    }

    fn any_within(
        &self,
        center: Point,
        radius: f64,
        predicate: &mut dyn FnMut(usize) -> bool,
    ) -> bool {
        self.any_within_subtree(self.root, center, radius, predicate)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_stays_balanced() {
        let points = (0..1023)
            .map(|i| Point((i % 37) as f64, (i / 37) as f64))
            .collect();
        let tree = KdTree::build(points);
        assert_eq!(tree.depth(), 10);
    }

    #[test]
    fn insert_rebuilds() {
        let mut tree = KdTree::new();
        assert_eq!(tree.depth(), 0);
        tree.insert(Point(1.0, 1.0));
        tree.insert(Point(2.0, 2.0));
        tree.insert(Point(3.0, 3.0));
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.query_radius(Point(2.0, 2.0), 1.5), vec![0, 1, 2]);
        assert_eq!(tree.query_radius(Point(0.0, 0.0), 1.5), vec![0]);
    }
}
