//! Polyline approximation of a geodesic arc.

use serde::Serialize;

use super::arc::Arc;
use super::euclid::{circle_line_intersect, Circle};
use super::point::Coordinate;

/// Sampled geodesic edge.
///
/// Invariants:
/// - `points.first() == arc.start`, `points.last() == arc.end` (exact copies).
/// - Either `points.len() == 2` (arc shorter than the target spacing) or the
///   arc is cut into an even number of pieces of length `spacing`.
#[derive(Clone, Debug, Serialize)]
pub struct Edge {
    pub arc: Arc,
    points: Vec<Coordinate>,
    /// Step actually used, `arc.length / segments` (or the chord length when
    /// unsubdivided).
    spacing: f64,
    /// Samples that fell back to interpolation after a missed intersection.
    #[serde(skip)]
    fallbacks: u32,
}

impl Edge {
    /// Sample the geodesic from `start` to `end` with consecutive samples at
    /// most `target_spacing` apart.
    pub fn new(start: Coordinate, end: Coordinate, target_spacing: f64) -> Self {
        Self::from_arc(Arc::new(start, end), target_spacing)
    }

    pub fn from_arc(arc: Arc, target_spacing: f64) -> Self {
        let len = arc.length;
        if !(len >= target_spacing) {
            // short (or NaN) arcs near the rim are not subdivided
            return Self {
                arc,
                points: vec![arc.start, arc.end],
                spacing: len,
                fallbacks: 0,
            };
        }
        let segments = even_segments(len, target_spacing);
        let step = len / segments as f64;
        let mut points = Vec::with_capacity(segments + 1);
        let mut fallbacks = 0;
        points.push(arc.start);
        for k in 1..segments {
            let s = step * k as f64;
            let p = if arc.is_straight() {
                match spaced_point_on_line(&arc.start, &arc.end, s) {
                    Some(p) => p,
                    None => {
                        fallbacks += 1;
                        arc.point_at_length(s)
                    }
                }
            } else {
                arc.point_at_length(s)
            };
            points.push(p);
        }
        points.push(arc.end);
        Self {
            arc,
            points,
            spacing: step,
            fallbacks,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of polyline pieces (`points.len() - 1`).
    #[inline]
    pub fn segments(&self) -> usize {
        self.points.len() - 1
    }

    #[inline]
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.arc.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.arc.end
    }
}

/// Smallest even `n >= 2` with `len / n <= spacing`.
#[inline]
pub(crate) fn even_segments(len: f64, spacing: f64) -> usize {
    let half = (len / spacing / 2.0).ceil().max(1.0);
    2 * half as usize
}

/// Point at distance `d` from `a` on the ray towards `b`.
fn spaced_point_on_line(a: &Coordinate, b: &Coordinate, d: f64) -> Option<Coordinate> {
    circle_line_intersect(&Circle::new(*a, d), a, b).map(|(_, towards_b)| towards_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_segments_rounds_up_to_even() {
        assert_eq!(even_segments(0.1, 0.1), 2);
        assert_eq!(even_segments(0.25, 0.1), 4);
        assert_eq!(even_segments(0.4, 0.1), 4);
        assert_eq!(even_segments(0.41, 0.1), 6);
    }

    #[test]
    fn short_arc_keeps_only_endpoints() {
        let e = Edge::new(Coordinate::new(0.9, 0.0), Coordinate::new(0.9, 0.01), 0.1);
        assert_eq!(e.points().len(), 2);
        assert_eq!(e.points()[0], e.arc.start);
        assert_eq!(e.points()[1], e.arc.end);
    }

    #[test]
    fn diameter_is_cut_evenly() {
        let e = Edge::new(Coordinate::new(-0.5, 0.0), Coordinate::new(0.5, 0.0), 0.1);
        assert!(e.arc.is_straight());
        assert_eq!(e.segments(), 10);
        assert_eq!(e.fallbacks(), 0);
        for w in e.points().windows(2) {
            assert!((w[0].distance(&w[1]) - 0.1).abs() < 1e-9);
        }
    }
}
