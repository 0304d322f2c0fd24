/// Axis-aligned bounding rectangle for 2D space.
///
/// Used as the sampling region when filling an index with random points;
/// `min` must lie strictly below `max` on both axes.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }
}
