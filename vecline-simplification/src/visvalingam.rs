//! Visvalingam–Whyatt polyline simplification
//!
//! Implements iterative point elimination: each step removes the vertex
//! whose deletion distorts the line least, measured by the area of the
//! triangle it forms with its two current neighbors. A priority queue with
//! arbitrary key update keeps every elimination cycle at O(log n), giving
//! O(n log n) total for eliminating O(n) points.

use crate::PolylineSimplifier;
use priority_queue::PriorityQueue;
use rayon::prelude::*;
use std::cmp::Ordering;
use vecline_core::{Error, Point2d, Polyline2d, Result};

const NONE: usize = usize::MAX;

// ============================================================
// Geometry Primitives
// ============================================================

#[inline]
fn segment_length(p: &Point2d, q: &Point2d) -> f64 {
    nalgebra::distance(p, q)
}

/// Triangle area via Heron's formula.
///
/// For collinear vertices the radicand can drift slightly negative from
/// floating-point error, so it is clamped to zero before the square root
/// to yield 0.0 instead of NaN.
fn triangle_area(a: &Point2d, b: &Point2d, c: &Point2d) -> f64 {
    let u = segment_length(a, b);
    let v = segment_length(b, c);
    let w = segment_length(c, a);
    let radicand = ((u + v + w) * (v + w - u) * (w + u - v) * (u + v - w)).max(0.0);
    0.25 * radicand.sqrt()
}

// ============================================================
// Point-Entry Arena
// ============================================================

/// Per-vertex record of the surviving chain.
///
/// `left`/`right` index the original point sequence (NONE for the two
/// permanent endpoints) and form a doubly linked list over the vertices
/// not yet eliminated. `area` is the significance score: the area of the
/// triangle this vertex forms with its current neighbors, infinite for
/// endpoints so they are never selected for removal.
#[derive(Debug, Clone)]
struct PointEntry {
    left: usize,
    right: usize,
    area: f64,
}

/// Build one entry per input point, linked in sequence order.
fn build_entries(points: &[Point2d]) -> Vec<PointEntry> {
    let n = points.len();
    let mut entries = Vec::with_capacity(n);
    for i in 0..n {
        let left = if i == 0 { NONE } else { i - 1 };
        let right = if i == n - 1 { NONE } else { i + 1 };
        let area = if left == NONE || right == NONE {
            f64::INFINITY
        } else {
            triangle_area(&points[left], &points[i], &points[right])
        };
        entries.push(PointEntry { left, right, area });
    }
    entries
}

/// Make `l` and `r` mutual neighbors after the vertex between them is
/// removed. This is the only structural mutation of the chain; it is
/// applied exactly once per removal.
fn relink(entries: &mut [PointEntry], l: usize, r: usize) {
    entries[l].right = r;
    entries[r].left = l;
}

/// Recompute the significance score of entry `i` from its current
/// neighbors. Returns true when the score changed and the caller must
/// restore the entry's queue position; endpoints keep their infinite
/// score and return false.
fn rescore(entries: &mut [PointEntry], points: &[Point2d], i: usize) -> bool {
    let (l, r) = (entries[i].left, entries[i].right);
    if l == NONE || r == NONE {
        return false;
    }
    entries[i].area = triangle_area(&points[l], &points[i], &points[r]);
    true
}

// ============================================================
// Significance Score for the Priority Queue
// ============================================================

#[derive(Debug, Clone, Copy)]
struct Significance {
    area: f64,
    index: usize,
}

impl PartialEq for Significance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Significance {}

impl PartialOrd for Significance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Significance {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-queue through a max-queue: smallest area pops first, equal
        // areas break toward the lowest original index so elimination
        // order is deterministic on regular geometry.
        other
            .area
            .total_cmp(&self.area)
            .then_with(|| other.index.cmp(&self.index))
    }
}

// ============================================================
// Elimination Driver
// ============================================================

/// Simplify a point sequence with the Visvalingam–Whyatt algorithm.
///
/// The output is a subsequence of the input preserving original order and
/// exact coordinate values; the first and last points always survive.
/// `retain_fraction` is the target proportion of points to keep. Values
/// outside (0, 1] are absorbed rather than rejected: anything >= 1.0
/// keeps every point, anything <= 0.0 (NaN included) deletes down to the
/// two endpoints. Fails with [`Error::InvalidInput`] when fewer than two
/// points are supplied.
pub fn simplify(points: &[Point2d], retain_fraction: f64) -> Result<Vec<Point2d>> {
    let n = points.len();
    if n < 2 {
        return Err(Error::InvalidInput(
            "polyline must have at least two points".to_string(),
        ));
    }

    let mut entries = build_entries(points);
    let mut removed = vec![false; n];

    let mut queue: PriorityQueue<usize, Significance> = PriorityQueue::with_capacity(n);
    for (i, entry) in entries.iter().enumerate() {
        queue.push(
            i,
            Significance {
                area: entry.area,
                index: i,
            },
        );
    }

    // Saturating float->usize casts absorb out-of-range fractions; the
    // n - 2 bound guarantees the two endpoints always survive.
    let retained = (n as f64 * retain_fraction).floor() as usize;
    let to_delete = (n - 2).min(n.saturating_sub(retained));

    for _ in 0..to_delete {
        let (victim, score) = queue.pop().ok_or_else(|| {
            Error::Internal(
                "significance queue drained before reaching the deletion target".to_string(),
            )
        })?;

        // An infinite minimum means only endpoints remain. Unreachable
        // under the n - 2 bound, but an endpoint must never be removed.
        if score.area.is_infinite() {
            break;
        }

        removed[victim] = true;
        let (l, r) = (entries[victim].left, entries[victim].right);
        relink(&mut entries, l, r);

        if rescore(&mut entries, points, l) {
            queue.change_priority(
                &l,
                Significance {
                    area: entries[l].area,
                    index: l,
                },
            );
        }
        if rescore(&mut entries, points, r) {
            queue.change_priority(
                &r,
                Significance {
                    area: entries[r].area,
                    index: r,
                },
            );
        }
    }

    Ok(points
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed[*i])
        .map(|(_, p)| *p)
        .collect())
}

/// Simplify many independent polylines in parallel.
///
/// Each line is processed by its own [`simplify`] run; no state is shared
/// between runs, so they execute fully in parallel. The first failing
/// line fails the whole batch.
pub fn simplify_batch(lines: &[Polyline2d], retain_fraction: f64) -> Result<Vec<Polyline2d>> {
    lines
        .par_iter()
        .map(|line| simplify(&line.points, retain_fraction).map(Polyline2d::from_points))
        .collect()
}

/// Visvalingam–Whyatt polyline simplifier.
///
/// Purely area-based: the output may self-intersect, matching the
/// classical definition of the algorithm. Topology preservation is out of
/// scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisvalingamSimplifier;

impl VisvalingamSimplifier {
    pub fn new() -> Self {
        Self
    }
}

impl PolylineSimplifier for VisvalingamSimplifier {
    fn simplify(&self, line: &Polyline2d, retain_fraction: f64) -> Result<Polyline2d> {
        Ok(Polyline2d::from_points(simplify(
            &line.points,
            retain_fraction,
        )?))
    }
}
