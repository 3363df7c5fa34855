//! Geometry of the drag-to-place tools. Each turns a press point and a
//! release point into the corners or vertices handed to the engine.

use crate::geometry::Point;

/// Corners of the square spanned by a drag: the side is the shorter of the
/// two drag extents, laid out in the drag direction.
pub fn square_corners(origin: Point, at: Point) -> (Point, Point) {
    let dx = at.raw_x() - origin.raw_x();
    let dy = at.raw_y() - origin.raw_y();
    let side = dx.abs().min(dy.abs());
    let sign_x = if dx >= 0 { 1 } else { -1 };
    let sign_y = if dy >= 0 { 1 } else { -1 };
    let corner = Point::from_raw(origin.raw_x() + sign_x * side, origin.raw_y() + sign_y * side);
    (origin, corner)
}

/// Bounding corners of the circle centred on `center` passing through `rim`.
pub fn circle_corners(center: Point, rim: Point) -> (Point, Point) {
    let radius = center.distance(rim);
    (
        Point::new(center.x() - radius, center.y() - radius),
        Point::new(center.x() + radius, center.y() + radius),
    )
}

/// Upright isosceles triangle standing on `base_center`; its height is the
/// drag length and its base is half as wide.
pub fn triangle_vertices(base_center: Point, at: Point) -> [Point; 3] {
    let height = base_center.distance(at);
    let (x, y) = (base_center.x(), base_center.y());
    [
        Point::new(x, y - height),
        Point::new(x - height / 2.0, y),
        Point::new(x + height / 2.0, y),
    ]
}
