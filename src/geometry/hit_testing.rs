use super::point::Point;

/// Difference of two raw values, widened so it cannot overflow.
fn span(from: i64, to: i64) -> i128 {
    to as i128 - from as i128
}

/// Cross product of (b - a) x (p - a) in raw grid units.
///
/// Exact for coordinates within [`MAX_COORDINATE`](super::point::MAX_COORDINATE);
/// beyond that the products saturate instead of overflowing.
fn cross(a: Point, b: Point, p: Point) -> i128 {
    let abx = span(a.raw_x(), b.raw_x());
    let aby = span(a.raw_y(), b.raw_y());
    let apx = span(a.raw_x(), p.raw_x());
    let apy = span(a.raw_y(), p.raw_y());
    abx.saturating_mul(apy).saturating_sub(aby.saturating_mul(apx))
}

fn on_segment(point: Point, a: Point, b: Point) -> bool {
    cross(a, b, point) == 0
        && point.raw_x() >= a.raw_x().min(b.raw_x())
        && point.raw_x() <= a.raw_x().max(b.raw_x())
        && point.raw_y() >= a.raw_y().min(b.raw_y())
        && point.raw_y() <= a.raw_y().max(b.raw_y())
}

/// Ray-crossing containment test on the closed polygon `vertices`.
///
/// Points lying exactly on an edge or vertex count as inside. The test runs
/// on the raw grid values with 128-bit intermediates, so it is exact for any
/// coordinate a document can hold. Fewer than three vertices can only match
/// on their edges.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        if on_segment(point, a, b) {
            return true;
        }

        if (a.raw_y() > point.raw_y()) != (b.raw_y() > point.raw_y()) {
            // Compare point.x with the edge's x at point.y without dividing.
            let lhs = span(a.raw_x(), point.raw_x()).saturating_mul(span(a.raw_y(), b.raw_y()));
            let rhs = span(a.raw_y(), point.raw_y()).saturating_mul(span(a.raw_x(), b.raw_x()));
            let left_of_edge = if b.raw_y() > a.raw_y() { lhs < rhs } else { lhs > rhs };
            if left_of_edge {
                inside = !inside;
            }
        }
    }

    inside
}

/// Distance in pixels from `point` to the segment `a`-`b`, measured to the
/// nearest endpoint when the perpendicular foot falls outside the segment.
pub fn distance_point_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (point.x(), point.y());
    let (ax, ay) = (a.x(), a.y());
    let (abx, aby) = (b.x() - ax, b.y() - ay);

    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return point.distance(a);
    }

    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let foot_x = ax + abx * t;
    let foot_y = ay + aby * t;
    (px - foot_x).hypot(py - foot_y)
}

/// Smallest distance from `point` to any edge of the open polyline. A single
/// vertex degenerates to point distance; an empty slice is infinitely far.
pub fn polyline_distance(point: Point, vertices: &[Point]) -> f64 {
    match vertices {
        [] => f64::INFINITY,
        [only] => point.distance(*only),
        _ => vertices
            .windows(2)
            .map(|edge| distance_point_to_segment(point, edge[0], edge[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
