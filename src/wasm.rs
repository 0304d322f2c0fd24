use wasm_bindgen::prelude::*;

use crate::bounds::BoundingBox;
use crate::index::NearestIndex;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// Represents an axis-aligned bounding rectangle in 2D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl From<BoundingBox2D> for BoundingBox {
    fn from(b: BoundingBox2D) -> Self {
        Self {
            min: [b.min_x, b.min_y],
            max: [b.max_x, b.max_y],
        }
    }
}

/// WASM wrapper for the nearest-neighbor index.
///
/// Points cross the boundary as flat interleaved buffers
/// `[x0, y0, x1, y1, …]`; a query result comes back as a two-element
/// array, or `undefined` when the index is empty.
#[wasm_bindgen]
pub struct NearestIndex2D {
    inner: NearestIndex,
}

#[wasm_bindgen]
impl NearestIndex2D {
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64]) -> NearestIndex2D {
        NearestIndex2D {
            inner: NearestIndex::from_flat(points),
        }
    }

    pub fn set_points(&mut self, points: &[f64]) {
        self.inner = NearestIndex::from_flat(points);
    }

    pub fn random_points(&mut self, count: usize, bounds: BoundingBox2D) {
        self.inner.random_points(count, &bounds.into());
    }

    pub fn find_nearest(&self, x: f64, y: f64) -> Option<Vec<f64>> {
        self.inner.find_nearest([x, y]).map(|p| p.to_vec())
    }

    pub fn find_nearest_linear(x: f64, y: f64, candidates: &[f64]) -> Option<Vec<f64>> {
        let candidates: Vec<[f64; 2]> = candidates.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
        NearestIndex::find_nearest_linear([x, y], &candidates).map(|p| p.to_vec())
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.count_points()
    }

    pub fn get_point(&self, index: usize) -> Vec<f64> {
        self.inner.points()[index].to_vec()
    }
}
