//! Euclidean helpers in the disk chart (angles, circles, lines).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::Serialize;

use super::point::Coordinate;

/// Euclidean circle in the disk chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub centre: Coordinate,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(centre: Coordinate, radius: f64) -> Self {
        Self { centre, radius }
    }

    /// Point on the circle at angle `theta` (radians, measured from +x).
    #[inline]
    pub fn point_at(&self, theta: f64) -> Coordinate {
        Coordinate::new(
            self.centre.x + self.radius * theta.cos(),
            self.centre.y + self.radius * theta.sin(),
        )
    }

    /// Angle of `pt` seen from the centre, in [0, 2π).
    #[inline]
    pub fn angle_of(&self, pt: &Coordinate) -> f64 {
        normalize_angle((pt.y - self.centre.y).atan2(pt.x - self.centre.x))
    }
}

/// Map an `atan2` result into [0, 2π).
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let t = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if t >= TAU {
        0.0
    } else {
        t
    }
}

/// Wrap-around order test on angles in [0, 2π): true when walking from `alpha`
/// to `beta` in increasing angle is the shorter way round.
pub fn increasing_sweep(alpha: f64, beta: f64) -> bool {
    let wraps_forward = beta > 3.0 * FRAC_PI_2 && alpha < FRAC_PI_2;
    let long_forward = beta - alpha > PI;
    let short_backward = alpha > beta && alpha - beta <= PI;
    !(wraps_forward || long_forward || short_backward)
}

/// Smaller of the two angular gaps between `alpha` and `beta`, in [0, π].
#[inline]
pub fn shorter_gap(alpha: f64, beta: f64) -> f64 {
    let d = (alpha - beta).abs();
    if d > PI {
        TAU - d
    } else {
        d
    }
}

/// Intersections of `circle` with the line through `a` and `b`.
///
/// Returns the two points ordered along the direction `a → b`, the same
/// point twice for a tangent line, or `None` when the line misses the circle
/// or `a == b`.
pub fn circle_line_intersect(
    circle: &Circle,
    a: &Coordinate,
    b: &Coordinate,
) -> Option<(Coordinate, Coordinate)> {
    let d = a.distance(b);
    if !(d.is_finite()) || d <= 0.0 {
        return None;
    }
    let dx = (b.x - a.x) / d;
    let dy = (b.y - a.y) / d;
    // foot of the perpendicular from the centre
    let t = dx * (circle.centre.x - a.x) + dy * (circle.centre.y - a.y);
    let foot = Coordinate::new(a.x + t * dx, a.y + t * dy);
    let d2 = foot.distance(&circle.centre);
    if d2 > circle.radius {
        return None;
    }
    let dt = (circle.radius * circle.radius - d2 * d2).max(0.0).sqrt();
    let q1 = Coordinate::new(a.x + (t - dt) * dx, a.y + (t - dt) * dy);
    let q2 = Coordinate::new(a.x + (t + dt) * dx, a.y + (t + dt) * dy);
    Some((q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_direction_handles_wraparound() {
        assert!(increasing_sweep(0.5, 1.0));
        assert!(!increasing_sweep(1.0, 0.5));
        // 6.0 → 0.2 crosses 0 going up
        assert!(increasing_sweep(6.0, 0.2));
        assert!(!increasing_sweep(0.2, 6.0));
        // long way up is rejected
        assert!(!increasing_sweep(2.0, 5.5));
    }

    #[test]
    fn shorter_gap_never_exceeds_pi() {
        assert!((shorter_gap(0.2, 6.0) - (TAU - 5.8)).abs() < 1e-12);
        assert!((shorter_gap(1.0, 2.5) - 1.5).abs() < 1e-12);
        assert!(shorter_gap(0.0, PI) <= PI);
    }

    #[test]
    fn normalize_angle_range() {
        for &t in &[-PI, -1e-18, 0.0, 1.0, TAU, 7.0] {
            let n = normalize_angle(t);
            assert!((0.0..TAU).contains(&n), "{t} -> {n}");
        }
    }

    #[test]
    fn line_through_circle_centre() {
        let c = Circle::new(Coordinate::ORIGIN, 0.5);
        let (q1, q2) =
            circle_line_intersect(&c, &Coordinate::new(-1.0, 0.0), &Coordinate::new(1.0, 0.0))
                .unwrap();
        assert!(q1.approx_eq(&Coordinate::new(-0.5, 0.0), 1e-12));
        assert!(q2.approx_eq(&Coordinate::new(0.5, 0.0), 1e-12));
    }

    #[test]
    fn line_missing_circle() {
        let c = Circle::new(Coordinate::ORIGIN, 0.1);
        let miss =
            circle_line_intersect(&c, &Coordinate::new(-1.0, 0.5), &Coordinate::new(1.0, 0.5));
        assert!(miss.is_none());
    }
}
