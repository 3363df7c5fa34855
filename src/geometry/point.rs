use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Fixed-point resolution: every coordinate is stored in 1/64 pixel steps.
pub const SUBPIXELS: i64 = 64;

/// Largest coordinate magnitude, in pixels, a document may place a shape at.
/// Raw values stay far enough inside `i64` that products of two coordinate
/// differences fit in `i128`.
pub const MAX_COORDINATE: f64 = 1_099_511_627_776.0;

fn to_fixed(value: f64) -> i64 {
    (value * SUBPIXELS as f64).round() as i64
}

fn from_fixed(raw: i64) -> f64 {
    raw as f64 / SUBPIXELS as f64
}

/// A canvas position on the fixed-point grid.
///
/// Translations and quarter-turn rotations are plain integer arithmetic on
/// the raw values, so they never accumulate drift.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point from pixel coordinates, snapping onto the grid.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: to_fixed(x),
            y: to_fixed(y),
        }
    }

    /// Create a point from raw grid units.
    pub const fn from_raw(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        from_fixed(self.x)
    }

    pub fn y(&self) -> f64 {
        from_fixed(self.y)
    }

    pub const fn raw_x(&self) -> i64 {
        self.x
    }

    pub const fn raw_y(&self) -> i64 {
        self.y
    }

    /// Euclidean distance in pixels.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// A displacement on the same fixed-point grid as [`Point`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Delta {
    dx: i64,
    dy: i64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0, dy: 0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx: to_fixed(dx),
            dy: to_fixed(dy),
        }
    }

    pub const fn from_raw(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    pub fn dx(&self) -> f64 {
        from_fixed(self.dx)
    }

    pub fn dy(&self) -> f64 {
        from_fixed(self.dy)
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Debug for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Δ({}, {})", self.dx(), self.dy())
    }
}

impl Add<Delta> for Point {
    type Output = Point;

    fn add(self, delta: Delta) -> Point {
        Point {
            x: self.x.saturating_add(delta.dx),
            y: self.y.saturating_add(delta.dy),
        }
    }
}

impl AddAssign<Delta> for Point {
    fn add_assign(&mut self, delta: Delta) {
        *self = *self + delta;
    }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, other: Point) -> Delta {
        Delta {
            dx: self.x.saturating_sub(other.x),
            dy: self.y.saturating_sub(other.y),
        }
    }
}

impl Add for Delta {
    type Output = Delta;

    fn add(self, other: Delta) -> Delta {
        Delta {
            dx: self.dx.saturating_add(other.dx),
            dy: self.dy.saturating_add(other.dy),
        }
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta {
            dx: self.dx.saturating_neg(),
            dy: self.dy.saturating_neg(),
        }
    }
}
