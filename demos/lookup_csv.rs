use neartwo::NearestIndex;

// A dispatch-style workflow: a file of known site coordinates is indexed
// once, then incoming points of interest are matched to their closest
// site.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut index = NearestIndex::new(Vec::new());
    index.import_points("demos/data/site_locations.csv")?;
    println!("Indexed {} sites", index.count_points());

    let queries = [[132.3, -1.8], [5.0, -5.0], [119.31, 55.26]];

    for query in queries {
        match index.find_nearest(query) {
            Some(site) => println!(
                "({}, {}) -> nearest site at ({}, {})",
                query[0], query[1], site[0], site[1]
            ),
            None => println!("No sites indexed"),
        }
    }

    Ok(())
}
