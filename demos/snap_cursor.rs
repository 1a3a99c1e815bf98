//! Snap a dragged cursor to the objects of a small scene.
use snapline::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapline=trace")))
        .init();

    let scene = [
        BoundingBox::new(0.0, 0.0, 100.0, 50.0),      // Box 0: header
        BoundingBox::new(200.0, 10.0, 260.0, 90.0),   // Box 1: button
        BoundingBox::new(120.0, 120.0, 180.0, 160.0), // Box 2: label
    ];

    let path = [(10.0, 10.0), (47.0, 118.0), (150.0, 100.0), (203.0, 52.0), (400.0, 400.0)];
    for (x, y) in path {
        let result = snap(&scene, x, y, 6.0);
        println!("cursor ({x}, {y}) -> ({}, {})", result.x, result.y);
        for line in result.guidelines() {
            println!("    {:?} guideline at {}", line.axis(), line.coordinate());
        }
    }
}
