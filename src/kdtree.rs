use std::cmp::Ordering;

/// Subtrees below this size are built on the current thread instead of
/// being handed to rayon.
const PARALLEL_CUTOFF: usize = 1024;

#[derive(Clone, Debug)]
struct KdNode {
    point: [f64; 2],
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

/// A balanced k-d tree over a static set of 2D points.
///
/// Space is split along alternating axes: x at even depths, y at odd
/// depths. Each node holds the lower median of its subset along the
/// split axis, its left subtree the points at or below the median, its
/// right subtree the points at or above it. The median itself appears
/// exactly once, so every subset strictly shrinks and the depth stays
/// O(log n).
///
/// The tree is immutable once built; updating the point set means
/// building a new tree.
pub struct KdTree {
    root: Option<Box<KdNode>>,
}

impl KdTree {
    /// Builds a tree from the given points. Accepts any finite set,
    /// including an empty one, in any order.
    pub fn build(points: &[[f64; 2]]) -> KdTree {
        let mut scratch = points.to_vec();
        KdTree {
            root: build_recursive(&mut scratch, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the indexed point with the smallest Euclidean distance to
    /// `query`, or `None` if the tree holds no points. Among equidistant
    /// points the winner is whichever one the traversal reaches first.
    pub fn nearest(&self, query: [f64; 2]) -> Option<[f64; 2]> {
        let mut best = None;
        nearest_recursive(self.root.as_deref(), query, 0, &mut best);
        best.map(|b| b.point)
    }
}

#[derive(Clone, Copy)]
struct Candidate {
    point: [f64; 2],
    dist: f64,
}

fn build_recursive(points: &mut [[f64; 2]], depth: usize) -> Option<Box<KdNode>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % 2;
    // Stable sort: equal coordinates keep their relative order, so the
    // same input always produces the same tree.
    points.sort_by(|a, b| a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal));

    let median = points.len() / 2;
    let point = points[median];
    let (lower, upper) = points.split_at_mut(median);
    let upper = &mut upper[1..];

    let (left, right) = if lower.len().max(upper.len()) >= PARALLEL_CUTOFF {
        rayon::join(
            || build_recursive(lower, depth + 1),
            || build_recursive(upper, depth + 1),
        )
    } else {
        (
            build_recursive(lower, depth + 1),
            build_recursive(upper, depth + 1),
        )
    };

    Some(Box::new(KdNode { point, left, right }))
}

fn nearest_recursive(
    node: Option<&KdNode>,
    query: [f64; 2],
    depth: usize,
    best: &mut Option<Candidate>,
) {
    let Some(node) = node else {
        return;
    };

    let dist = distance(query, node.point);
    if best.is_none_or(|b| dist < b.dist) {
        *best = Some(Candidate {
            point: node.point,
            dist,
        });
    }

    let axis = depth % 2;
    let diff = query[axis] - node.point[axis];

    // Descend towards the query's side of the splitting line first. A
    // query sitting exactly on the line counts as the right side.
    let (near, far) = if diff < 0.0 {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    nearest_recursive(near, query, depth + 1, best);

    // The far subtree can only hold a closer point if the splitting line
    // is closer to the query than the best match so far.
    if best.is_none_or(|b| diff.abs() < b.dist) {
        nearest_recursive(far, query, depth + 1, best);
    }
}

/// Euclidean distance between two points.
pub(crate) fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = KdTree::build(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.nearest([0.0, 0.0]), None);
    }

    #[test]
    fn test_nearest_small_set() {
        let tree = KdTree::build(&[
            [2.0, 3.0],
            [5.0, 4.0],
            [9.0, 6.0],
            [4.0, 7.0],
            [8.0, 1.0],
            [7.0, 2.0],
        ]);
        assert_eq!(tree.nearest([9.0, 2.0]), Some([8.0, 1.0]));
        assert_eq!(tree.nearest([2.0, 3.0]), Some([2.0, 3.0]));
        assert_eq!(tree.nearest([0.0, 10.0]), Some([4.0, 7.0]));
    }

    #[test]
    fn test_duplicate_points() {
        let tree = KdTree::build(&[[3.0, 3.0], [3.0, 3.0], [3.0, 3.0]]);
        assert_eq!(tree.nearest([1.0, 1.0]), Some([3.0, 3.0]));
        assert_eq!(tree.nearest([3.0, 3.0]), Some([3.0, 3.0]));
    }

    #[test]
    fn test_deterministic_rebuild() {
        let points = vec![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [2.0, 1.0], [2.0, 2.0]];
        let a = KdTree::build(&points);
        let b = KdTree::build(&points);
        for query in [[0.0, 0.0], [1.5, 1.5], [2.0, 3.0], [1.0, 2.0]] {
            assert_eq!(a.nearest(query), b.nearest(query));
        }
    }

    #[test]
    fn test_query_on_splitting_line() {
        // Query x equal to the root's x: the right subtree is searched
        // first, the left must still be reachable through backtracking.
        let tree = KdTree::build(&[[5.0, 0.0], [4.5, 8.0], [6.0, 8.0]]);
        assert_eq!(tree.nearest([5.0, 7.5]), Some([4.5, 8.0]));
    }
}
