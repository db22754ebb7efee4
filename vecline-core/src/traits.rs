//! Core traits for vecline

use crate::{point::*, polyline::*};

/// Trait for objects with a 2D spatial extent
pub trait Extent2D {
    /// Get the axis-aligned bounding box of the object
    fn bounding_box(&self) -> (Point2d, Point2d);

    /// Get the center point of the object
    fn center(&self) -> Point2d;
}

impl<T> Extent2D for Polyline<T>
where
    T: Clone + Copy,
    Point2d: From<T>,
{
    fn bounding_box(&self) -> (Point2d, Point2d) {
        if self.is_empty() {
            return (Point2d::origin(), Point2d::origin());
        }

        let first_point = Point2d::from(self.points[0]);
        let mut min = first_point;
        let mut max = first_point;

        for point in &self.points {
            let p = Point2d::from(*point);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        (min, max)
    }

    fn center(&self) -> Point2d {
        let (min, max) = self.bounding_box();
        Point2d::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let line = Polyline2d::from_points(vec![
            Point2d::new(-1.0, 2.0),
            Point2d::new(3.0, -4.0),
            Point2d::new(0.0, 0.0),
        ]);
        let (min, max) = line.bounding_box();
        assert_eq!(min, Point2d::new(-1.0, -4.0));
        assert_eq!(max, Point2d::new(3.0, 2.0));
        assert_eq!(line.center(), Point2d::new(1.0, -1.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        let line = Polyline2d::new();
        assert_eq!(line.bounding_box(), (Point2d::origin(), Point2d::origin()));
    }
}
