use std::cmp::Ordering;

use super::point::{Delta, Point, SUBPIXELS};

pub fn translate_points(points: &mut [Point], delta: Delta) {
    for point in points {
        *point += delta;
    }
}

/// One quarter turn about `pivot`, in the canvas' y-down orientation this is
/// clockwise on screen.
fn quarter_turn(point: Point, pivot: Point) -> Point {
    let dx = point.raw_x().saturating_sub(pivot.raw_x());
    let dy = point.raw_y().saturating_sub(pivot.raw_y());
    Point::from_raw(pivot.raw_x().saturating_sub(dy), pivot.raw_y().saturating_add(dx))
}

/// Nearest integer to `num / den` (`den > 0`), and whether `num / den` lies
/// exactly halfway, in which case the lower neighbour is returned.
fn round_half(num: i128, den: i128) -> (i128, bool) {
    let floor = num.div_euclid(den);
    let twice_rem = 2 * num.rem_euclid(den);
    match twice_rem.cmp(&den) {
        Ordering::Less => (floor, false),
        Ordering::Greater => (floor + 1, false),
        Ordering::Equal => (floor, true),
    }
}

/// A quarter turn about the mean of a vertex set.
///
/// The pivot `(cx, cy)` lies on the half-grid lattice where `cx + cy` and
/// `cy - cx` are whole raw units, stored as those two sums. Turning a grid
/// point about such a pivot lands on the grid again. Recomputing the pivot
/// from the turned vertices gives the same pivot, so four turns restore the
/// input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterTurn {
    sum: i64,
    diff: i64,
}

impl QuarterTurn {
    /// Pivot for `points`; `None` when empty.
    ///
    /// In lattice coordinates `u = x + y`, `v = y - x` the candidates are
    /// whole `(u, v)` with `u + v` even. Halfway ties prefer even `u + v`,
    /// and among two such candidates the one with even `u`. Both parities
    /// are unchanged by a quarter turn about a lattice point.
    pub fn about_mean(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len() as i128;
        let (sum_u, sum_v) = points.iter().fold((0i128, 0i128), |(su, sv), p| {
            let (x, y) = (p.raw_x() as i128, p.raw_y() as i128);
            (su + x + y, sv + y - x)
        });
        let (u, u_tie) = round_half(sum_u, n);
        let (v, v_tie) = round_half(sum_v, n);
        let even = |value: i128| value.rem_euclid(2) == 0;

        let (u, v) = match (u_tie, v_tie) {
            (false, false) => (u, v),
            (true, false) if even(u + v) => (u, v),
            (true, false) => (u + 1, v),
            (false, true) if even(u + v) => (u, v),
            (false, true) => (u, v + 1),
            (true, true) if even(u + v) => {
                if even(u) { (u, v) } else { (u + 1, v + 1) }
            }
            (true, true) => {
                if even(u) { (u, v + 1) } else { (u + 1, v) }
            }
        };

        Some(Self {
            sum: i64::try_from(u).ok()?,
            diff: i64::try_from(v).ok()?,
        })
    }

    /// Pivot in pixels.
    pub fn pivot(&self) -> (f64, f64) {
        let cx = (self.sum as f64 - self.diff as f64) / 2.0;
        let cy = (self.sum as f64 + self.diff as f64) / 2.0;
        (cx / SUBPIXELS as f64, cy / SUBPIXELS as f64)
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::from_raw(
            self.sum.saturating_sub(point.raw_y()),
            self.diff.saturating_add(point.raw_x()),
        )
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

/// Rigid rotation of every point about `pivot` by `degrees`.
///
/// Multiples of 90 are carried out as axis swaps and negations on the raw
/// grid values, so four quarter turns reproduce the input exactly. Any other
/// angle goes through trigonometry and is rounded back onto the grid.
pub fn rotate_points(points: &[Point], pivot: Point, degrees: i32) -> Vec<Point> {
    if degrees % 90 == 0 {
        let turns = degrees.rem_euclid(360) / 90;
        return points
            .iter()
            .map(|&p| (0..turns).fold(p, |acc, _| quarter_turn(acc, pivot)))
            .collect();
    }

    let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x() - pivot.x();
            let dy = p.y() - pivot.y();
            Point::new(pivot.x() + cos * dx - sin * dy, pivot.y() + sin * dx + cos * dy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quarter_turn_maps_axes() {
        let rotated = rotate_points(&[Point::new(10.0, 0.0)], Point::ORIGIN, 90);
        assert_eq!(rotated, vec![Point::new(0.0, 10.0)]);

        let back = rotate_points(&rotated, Point::ORIGIN, -90);
        assert_eq!(back, vec![Point::new(10.0, 0.0)]);
    }

    #[test]
    fn half_turn_about_offset_pivot() {
        let rotated = rotate_points(&[Point::new(4.0, 1.0)], Point::new(2.0, 2.0), 180);
        assert_eq!(rotated, vec![Point::new(0.0, 3.0)]);
    }

    #[test]
    fn arbitrary_angle_lands_on_grid() {
        let rotated = rotate_points(&[Point::new(10.0, 0.0)], Point::ORIGIN, 45);
        let expected = 10.0 / 2f64.sqrt();
        assert!((rotated[0].x() - expected).abs() < 1.0 / 64.0);
        assert!((rotated[0].y() - expected).abs() < 1.0 / 64.0);
    }

    #[test]
    fn halfway_mean_is_stable_under_turns() {
        // The mean of these two sits half a grid unit off the grid.
        let start = vec![Point::from_raw(0, 0), Point::from_raw(1, 0)];
        let expected = [
            vec![Point::from_raw(0, 0), Point::from_raw(0, 1)],
            vec![Point::from_raw(0, 0), Point::from_raw(-1, 0)],
            vec![Point::from_raw(0, 0), Point::from_raw(0, -1)],
            start.clone(),
        ];

        let mut current = start;
        for step in expected {
            current = QuarterTurn::about_mean(&current).unwrap().apply_all(&current);
            assert_eq!(current, step);
        }
    }

    #[test]
    fn mean_pivot_of_rectangle_is_its_middle() {
        let rect = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(QuarterTurn::about_mean(&rect).unwrap().pivot(), (2.0, 1.0));
        assert_eq!(QuarterTurn::about_mean(&[]), None);
    }

    fn arb_point() -> impl Strategy<Value = Point> {
        (-1_000_000i64..1_000_000, -1_000_000i64..1_000_000).prop_map(|(x, y)| Point::from_raw(x, y))
    }

    proptest! {
        #[test]
        fn four_quarter_turns_are_identity(
            points in prop::collection::vec(arb_point(), 0..20),
            pivot in arb_point(),
        ) {
            let mut current = points.clone();
            for _ in 0..4 {
                current = rotate_points(&current, pivot, 90);
            }
            prop_assert_eq!(current, points);
        }

        #[test]
        fn repeated_turns_about_the_mean_are_identity(points in prop::collection::vec(arb_point(), 1..20)) {
            let mut current = points.clone();
            for _ in 0..4 {
                current = QuarterTurn::about_mean(&current).unwrap().apply_all(&current);
            }
            prop_assert_eq!(current, points);
        }

        #[test]
        fn quarter_turn_preserves_distance_to_pivot(p in arb_point(), pivot in arb_point()) {
            let rotated = rotate_points(&[p], pivot, 90)[0];
            prop_assert_eq!(
                (rotated - pivot).dx().powi(2) + (rotated - pivot).dy().powi(2),
                (p - pivot).dx().powi(2) + (p - pivot).dy().powi(2)
            );
        }
    }
}
