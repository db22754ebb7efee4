//! Basic usage demo for vecline
//!
//! This demo shows the fundamental operations:
//! - Creating polylines
//! - Simplifying at several retain fractions
//! - Inspecting the result

use nalgebra::Point2;
use vecline_core::{Extent2D, Polyline2d};
use vecline_simplification::{PolylineSimplifier, VisvalingamSimplifier};

fn main() -> anyhow::Result<()> {
    println!("vecline simplification demo");
    println!("===========================");

    // A noisy sine wave with 1000 vertices
    let points: Vec<Point2<f64>> = (0..1000)
        .map(|i| {
            let x = i as f64 * 0.1;
            let y = x.sin() * 20.0 + (x * 7.3).cos() * 0.8;
            Point2::new(x, y)
        })
        .collect();
    let input = Polyline2d::from_points(points);

    let (min, max) = input.bounding_box();
    println!(
        "Input: {} vertices, length {:.1}, bounds ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        input.len(),
        input.total_length(),
        min.x,
        min.y,
        max.x,
        max.y
    );

    let simplifier = VisvalingamSimplifier::new();
    for fraction in [0.5, 0.25, 0.1, 0.01] {
        let output = simplifier.simplify(&input, fraction)?;
        println!(
            "Retain {:>4.0}%: {:>4} vertices, length {:.1}",
            fraction * 100.0,
            output.len(),
            output.total_length()
        );
    }

    // Endpoints survive even when everything else goes
    let minimal = simplifier.simplify(&input, 0.0)?;
    println!(
        "Retain    0%: {:>4} vertices (the two endpoints: {:?} and {:?})",
        minimal.len(),
        minimal[0],
        minimal[1]
    );

    Ok(())
}
