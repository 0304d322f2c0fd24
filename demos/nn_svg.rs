use neartwo::{BoundingBox, NearestIndex};
use plotters::prelude::*;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new("nearest_links.svg", (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let mut index = NearestIndex::new(Vec::new());
    index.random_points(400, &bounds);

    // Indexed points
    chart.draw_series(
        index
            .points()
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 2, BLUE.filled())),
    )?;

    // Random queries, each linked to its nearest indexed point
    let mut rng = rand::thread_rng();
    for _ in 0..40 {
        let query = [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)];
        if let Some(nearest) = index.find_nearest(query) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(query[0], query[1]), (nearest[0], nearest[1])],
                RED.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(Circle::new(
                (query[0], query[1]),
                3,
                RED.filled(),
            )))?;
        }
    }

    root.present()?;
    println!("Plot saved to nearest_links.svg");

    Ok(())
}
