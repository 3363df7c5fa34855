//! Geometry kernel: fixed-point coordinates and the pure functions the
//! editing engine builds on. Nothing in here holds state.

mod bounds;
pub mod hit_testing;
mod point;
pub mod transform;

pub use bounds::BoundingBox;
pub use hit_testing::{distance_point_to_segment, point_in_polygon, polyline_distance};
pub use point::{Delta, MAX_COORDINATE, Point, SUBPIXELS};
pub use transform::{QuarterTurn, rotate_points, translate_points};
