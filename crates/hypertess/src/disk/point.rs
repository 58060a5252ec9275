//! Poincaré-disk coordinates and the hyperboloid lift.
//!
//! The disk point is the only stored representation. The hyperboloid
//! (Weierstrass) form is a transient `Vector3` used to apply isometries; it is
//! produced by `to_hyperboloid` and consumed by `from_hyperboloid`.

use nalgebra::{Vector2, Vector3};
use serde::Serialize;

use super::cfg::DISK_EPS;
use crate::error::GeomWarning;

/// Point of the Poincaré disk, `x² + y² <= 1`.
///
/// Construction does not check the bound. Out-of-disk points surface through
/// [`Coordinate::check`], which `Polygon::warnings` runs over every stored
/// point of a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Disk centre.
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vec(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance in the disk chart.
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.as_vec() - other.as_vec()).norm()
    }

    /// Componentwise comparison with tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Coordinate, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// `None` when the point lies in the closed unit disk (up to `DISK_EPS`).
    pub fn check(&self) -> Option<GeomWarning> {
        let r2 = self.norm_squared();
        if r2.is_finite() && r2 <= 1.0 + DISK_EPS {
            None
        } else {
            Some(GeomWarning::OutsideDisk {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Lift to the hyperboloid: `f = 1/(1 - r²)`, `(2fx, 2fy, f(1 + r²))`.
    #[inline]
    pub fn to_hyperboloid(&self) -> Vector3<f64> {
        let r2 = self.norm_squared();
        let factor = 1.0 / (1.0 - r2);
        Vector3::new(2.0 * factor * self.x, 2.0 * factor * self.y, factor * (1.0 + r2))
    }

    /// Project a hyperboloid point back to the disk: `f = 1/(1 + z)`.
    #[inline]
    pub fn from_hyperboloid(h: Vector3<f64>) -> Self {
        let factor = 1.0 / (1.0 + h.z);
        Self {
            x: factor * h.x,
            y: factor * h.y,
        }
    }
}

impl From<Vector2<f64>> for Coordinate {
    fn from(v: Vector2<f64>) -> Self {
        Self::from_vec(v)
    }
}
