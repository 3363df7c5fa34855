use super::point::{Point, SUBPIXELS};

/// Axis-aligned box on the fixed-point grid. `min` is the top-left corner in
/// canvas orientation, `max` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Box spanned by two opposite corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::from_raw(a.raw_x().min(b.raw_x()), a.raw_y().min(b.raw_y())),
            max: Point::from_raw(a.raw_x().max(b.raw_x()), a.raw_y().max(b.raw_y())),
        }
    }

    /// Smallest box covering all points, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_x = first.raw_x();
        let mut min_y = first.raw_y();
        let mut max_x = min_x;
        let mut max_y = min_y;

        for point in rest {
            min_x = min_x.min(point.raw_x());
            min_y = min_y.min(point.raw_y());
            max_x = max_x.max(point.raw_x());
            max_y = max_y.max(point.raw_y());
        }

        Some(Self {
            min: Point::from_raw(min_x, min_y),
            max: Point::from_raw(max_x, max_y),
        })
    }

    /// Box of the given pixel size centred on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        let half_w = (width * SUBPIXELS as f64 / 2.0).round() as i64;
        let half_h = (height * SUBPIXELS as f64 / 2.0).round() as i64;
        Self {
            min: Point::from_raw(center.raw_x() - half_w, center.raw_y() - half_h),
            max: Point::from_raw(center.raw_x() + half_w, center.raw_y() + half_h),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Centre point, rounded onto the grid.
    pub fn center(&self) -> Point {
        Point::from_raw(
            (self.min.raw_x() + self.max.raw_x()).div_euclid(2),
            (self.min.raw_y() + self.max.raw_y()).div_euclid(2),
        )
    }

    /// Inclusive containment; the edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.raw_x() >= self.min.raw_x()
            && point.raw_x() <= self.max.raw_x()
            && point.raw_y() >= self.min.raw_y()
            && point.raw_y() <= self.max.raw_y()
    }

    /// Grow (or shrink, for negative margins) every side by `margin` pixels.
    pub fn inflate(&self, margin: f64) -> Self {
        let m = (margin * SUBPIXELS as f64).round() as i64;
        Self {
            min: Point::from_raw(self.min.raw_x() - m, self.min.raw_y() - m),
            max: Point::from_raw(self.max.raw_x() + m, self.max.raw_y() + m),
        }
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: Point::from_raw(
                self.min.raw_x().min(other.min.raw_x()),
                self.min.raw_y().min(other.min.raw_y()),
            ),
            max: Point::from_raw(
                self.max.raw_x().max(other.max.raw_x()),
                self.max.raw_y().max(other.max.raw_y()),
            ),
        }
    }
}
