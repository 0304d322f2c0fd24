use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::bounds::BoundingBox;
use crate::kdtree::{KdTree, distance};

/// The main container for exact 2D nearest-neighbor lookups.
///
/// This struct manages:
/// - The **points** being indexed, kept exactly as supplied.
/// - The **k-d tree** built over them for fast queries.
///
/// The tree is built once, eagerly, per point set. There is no
/// incremental insertion or removal: replacing the points through
/// [`set_points`](NearestIndex::set_points) discards the old tree and
/// builds a new one. A built index is read-only, so concurrent queries
/// need no locking.
pub struct NearestIndex {
    points: Vec<[f64; 2]>,
    tree: KdTree,
}

impl NearestIndex {
    /// Creates an index over the given points. Any finite set is
    /// accepted, including an empty one.
    pub fn new(points: Vec<[f64; 2]>) -> NearestIndex {
        let tree = KdTree::build(&points);
        NearestIndex { points, tree }
    }

    /// Creates an index from a flat interleaved buffer
    /// `[x0, y0, x1, y1, …]`. A trailing unpaired value is ignored.
    pub fn from_flat(coords: &[f64]) -> NearestIndex {
        let points = coords.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
        NearestIndex::new(points)
    }

    /// Replaces the indexed points and rebuilds the tree.
    pub fn set_points(&mut self, points: Vec<[f64; 2]>) {
        self.points = points;
        self.tree = KdTree::build(&self.points);
    }

    /// Returns the indexed point closest to `query` in Euclidean
    /// distance, or `None` if the index holds no points.
    pub fn find_nearest(&self, query: [f64; 2]) -> Option<[f64; 2]> {
        self.tree.nearest(query)
    }

    /// Linear-scan reference: returns the candidate closest to `query`
    /// without building an index, or `None` for an empty candidate list.
    ///
    /// For any query the returned distance equals the distance of the
    /// result of [`find_nearest`](NearestIndex::find_nearest) over the
    /// same points; under ties the point identity may differ.
    pub fn find_nearest_linear(query: [f64; 2], candidates: &[[f64; 2]]) -> Option<[f64; 2]> {
        let mut best: Option<([f64; 2], f64)> = None;
        for &candidate in candidates {
            let dist = distance(query, candidate);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((candidate, dist));
            }
        }
        best.map(|(point, _)| point)
    }

    /// Generates `count` points uniformly inside `bounds` and rebuilds
    /// the index over them.
    pub fn random_points(&mut self, count: usize, bounds: &BoundingBox) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push([
                rng.gen_range(bounds.min[0]..bounds.max[0]),
                rng.gen_range(bounds.min[1]..bounds.max[1]),
            ]);
        }
        self.set_points(points);
    }

    /// Imports points from a delimited text file and rebuilds the index.
    ///
    /// Expects one point per line, the two coordinates separated by a
    /// comma or whitespace. Blank lines are skipped. A line that does
    /// not hold exactly two numeric fields fails with
    /// [`io::ErrorKind::InvalidData`] and leaves the index unchanged.
    pub fn import_points<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut points = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            points.push(parse_point(line).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "line {}: expected two numeric coordinates, got {:?}",
                        number + 1,
                        line
                    ),
                )
            })?);
        }

        self.set_points(points);
        Ok(())
    }

    /// The indexed points, in the order they were supplied.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn count_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

fn parse_point(line: &str) -> Option<[f64; 2]> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());
    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some([x, y])
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for reproducible native runs
    }
}
