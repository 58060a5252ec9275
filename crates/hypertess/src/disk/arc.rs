//! Geodesic arcs of the Poincaré disk (Dunham's construction).
//!
//! A geodesic through two disk points is either a diameter (when the chord
//! passes through the origin) or an arc of a circle orthogonal to the unit
//! circle. The supporting circle's centre is the pole of the geodesic, taken
//! from the Lorentz cross product of the two hyperboloid lifts.
//!
//! Conventions
//! - Angles are measured from the circle centre and normalised to [0, 2π).
//! - `clockwise` means the shorter sweep runs in decreasing angle.
//! - `length` is the Euclidean length of the drawn curve (chord or shorter
//!   circular sweep); it is what edge sampling and size-based termination use.

use nalgebra::Vector3;
use serde::Serialize;

use super::cfg::{DEGENERATE_EPS, ORIGIN_EPS};
use super::euclid::{increasing_sweep, shorter_gap, Circle};
use super::point::Coordinate;

/// Shape of the geodesic between the two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum ArcShape {
    /// Straight chord on a line through the disk centre.
    Line,
    /// Arc of `circle` from `start_angle` to `end_angle`.
    Circular {
        circle: Circle,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
}

/// Geodesic arc between two disk points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Arc {
    pub start: Coordinate,
    pub end: Coordinate,
    pub shape: ArcShape,
    pub length: f64,
}

impl Arc {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        if through_origin(&start, &end) {
            return Self {
                start,
                end,
                shape: ArcShape::Line,
                length: start.distance(&end),
            };
        }
        let pole = hyperboloid_cross(start.to_hyperboloid(), end.to_hyperboloid());
        let centre = Coordinate::new(pole.x / pole.z, pole.y / pole.z);
        let circle = Circle::new(centre, start.distance(&centre));
        let alpha = circle.angle_of(&start);
        let beta = circle.angle_of(&end);
        Self {
            start,
            end,
            shape: ArcShape::Circular {
                circle,
                start_angle: alpha,
                end_angle: beta,
                clockwise: !increasing_sweep(alpha, beta),
            },
            length: circle.radius * shorter_gap(alpha, beta),
        }
    }

    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self.shape, ArcShape::Line)
    }

    /// Endpoints coincide (zero-length geodesic).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.distance(&self.end) <= DEGENERATE_EPS
    }

    /// Point at Euclidean arc length `s` from the start, following the
    /// shorter sweep. `s` is not clamped.
    pub fn point_at_length(&self, s: f64) -> Coordinate {
        match self.shape {
            ArcShape::Line => {
                let d = self.start.distance(&self.end);
                if d <= DEGENERATE_EPS {
                    return self.start;
                }
                let t = s / d;
                Coordinate::from_vec(self.start.as_vec() + (self.end.as_vec() - self.start.as_vec()) * t)
            }
            ArcShape::Circular {
                circle,
                start_angle,
                clockwise,
                ..
            } => {
                let dir = if clockwise { -1.0 } else { 1.0 };
                circle.point_at(start_angle + dir * s / circle.radius)
            }
        }
    }
}

/// Does the chord through `a` and `b` pass through the origin?
#[inline]
pub fn through_origin(a: &Coordinate, b: &Coordinate) -> bool {
    (a.x * b.y - b.x * a.y).abs() <= ORIGIN_EPS
}

/// Cross product in the Lorentz metric; gives the pole of the geodesic
/// through the two lifted points.
#[inline]
pub fn hyperboloid_cross(a: Vector3<f64>, b: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        -a.x * b.y + a.y * b.x,
    )
}
