//! Timing benchmark for snap over scenes of increasing size

use rand::Rng;
use rand::SeedableRng;
use snapline::{BoundingBox, snap};
use std::hint::black_box;
use std::time::Instant;

/// Generate a random bounding box with size UP TO max_size in a 1000x1000 scene
fn random_box<R: Rng>(rng: &mut R, max_size: f64) -> BoundingBox {
    let left = rng.random_range(0.0..(1000.0 - max_size));
    let top = rng.random_range(0.0..(1000.0 - max_size));
    let width = rng.random_range(0.0..max_size);
    let height = rng.random_range(0.0..max_size);
    BoundingBox::new(left, top, left + width, top + height)
}

fn main() {
    println!("snapline Benchmark");
    println!("==================\n");

    let num_queries = 10_000;
    let threshold = 8.0;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let cursors: Vec<(f64, f64)> = (0..num_queries)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();

    for num_items in [10, 100, 1_000, 10_000] {
        let boxes: Vec<BoundingBox> = (0..num_items).map(|_| random_box(&mut rng, 50.0)).collect();

        let mut snapped = 0_usize;
        let query_start = Instant::now();
        for &(x, y) in &cursors {
            let result = snap(black_box(&boxes), black_box(x), black_box(y), threshold);
            if result.is_snapped() {
                snapped += 1;
            }
        }
        let elapsed = query_start.elapsed();
        println!(
            "snap over {:>6} boxes - {} queries: {:>10.2}ms ({} snapped)",
            num_items,
            num_queries,
            elapsed.as_secs_f64() * 1000.0,
            snapped
        );
    }
}
