use neartwo::{BoundingBox, NearestIndex};

fn main() {
    // Initialize Rayon explicitly so thread creation happens before the
    // build we want to profile.
    rayon::ThreadPoolBuilder::new().build_global().unwrap();

    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);

    // 100,000 points is usually enough to get a good profile
    let mut index = NearestIndex::new(Vec::new());
    index.random_points(100_000, &bounds);

    // Query sweep (this is the hot path)
    for i in 0..10_000 {
        let t = i as f64 / 10_000.0 * 100.0;
        index.find_nearest([t, 100.0 - t]);
    }
}
