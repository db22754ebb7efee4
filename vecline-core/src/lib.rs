//! Core data structures and traits for vecline
//!
//! This crate provides fundamental types for 2D polyline processing,
//! including points, polylines, and essential traits.

pub mod point;
pub mod polyline;
pub mod traits;
pub mod error;

pub use point::*;
pub use polyline::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};
