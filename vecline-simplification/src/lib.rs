//! Polyline simplification algorithms
//!
//! This crate provides algorithms for reducing polyline complexity while
//! preserving the overall shape of the line:
//! - Visvalingam–Whyatt incremental point elimination

pub mod visvalingam;

pub use visvalingam::*;

use vecline_core::{Polyline2d, Result};

/// Simplify a polyline by reducing the number of vertices
pub trait PolylineSimplifier {
    /// Simplify a polyline with a target retain fraction
    /// (1.0 = keep every vertex, 0.0 = keep only the two endpoints)
    fn simplify(&self, line: &Polyline2d, retain_fraction: f64) -> Result<Polyline2d>;
}
