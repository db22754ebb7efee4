//! Polyline data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A generic ordered sequence of vertices defining connected line segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline<T> {
    pub points: Vec<T>,
}

/// A polyline with single precision 2D points
pub type Polyline2f = Polyline<Point2f>;

/// A polyline with double precision 2D points
pub type Polyline2d = Polyline<Point2d>;

impl<T> Polyline<T> {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new polyline with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polyline from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of vertices in the polyline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a vertex to the polyline
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the vertices
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.points.iter()
    }

    /// Get a mutable iterator over the vertices
    pub fn iter_mut(&mut self) -> std::slice::IterMut<T> {
        self.points.iter_mut()
    }

    /// Clear all vertices from the polyline
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Polyline2d {
    /// Total length of the polyline (sum of segment lengths)
    pub fn total_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|seg| (seg[1] - seg[0]).norm())
            .sum()
    }
}

impl<T> Default for Polyline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<T> IntoIterator for Polyline<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> From<Vec<T>> for Polyline<T> {
    fn from(points: Vec<T>) -> Self {
        Self::from_points(points)
    }
}
