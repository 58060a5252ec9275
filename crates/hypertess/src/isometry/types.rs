//! Isometries of the hyperbolic plane as 3×3 Lorentz matrices.

use std::ops::Mul;

use nalgebra::{Matrix3, Vector3};

use crate::disk::Coordinate;

/// Orientation character of an isometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rotation-like, `+1`.
    Preserving,
    /// Reflection-like, `-1`.
    Reversing,
}

impl Orientation {
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Orientation::Preserving => 1,
            Orientation::Reversing => -1,
        }
    }
}

impl Mul for Orientation {
    type Output = Orientation;
    #[inline]
    fn mul(self, rhs: Orientation) -> Orientation {
        if self == rhs {
            Orientation::Preserving
        } else {
            Orientation::Reversing
        }
    }
}

/// Isometry acting on hyperboloid coordinates: `h ↦ M h`.
///
/// Invariants:
/// - Built in one step from its final `(matrix, orientation, anchor)`; there
///   are no setters.
/// - `anchor` is the tile edge an edge transform maps *to*; it drives
///   `IsometryGroup::shift`. Pure generators carry no anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Isometry {
    matrix: Matrix3<f64>,
    orientation: Orientation,
    anchor: Option<usize>,
}

impl Isometry {
    #[inline]
    pub fn new(matrix: Matrix3<f64>, orientation: Orientation, anchor: Option<usize>) -> Self {
        Self {
            matrix,
            orientation,
            anchor,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Orientation::Preserving, None)
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Apply `self`, then `next`.
    ///
    /// Matrix `next.M · self.M`; orientation is the product of both; the
    /// anchor is taken from `next`.
    #[inline]
    pub fn then(&self, next: &Isometry) -> Isometry {
        Isometry {
            matrix: next.matrix * self.matrix,
            orientation: self.orientation * next.orientation,
            anchor: next.anchor,
        }
    }

    /// Map a disk point: lift, multiply, project back.
    #[inline]
    pub fn apply(&self, c: &Coordinate) -> Coordinate {
        Coordinate::from_hyperboloid(self.matrix * c.to_hyperboloid())
    }

    /// Height of the image of the hyperboloid apex `(0, 0, 1)`.
    ///
    /// For a Lorentz isometry this is `cosh` of the distance the origin moves,
    /// so it is always `>= 1`.
    #[inline]
    pub fn apex_height(&self) -> f64 {
        (self.matrix * Vector3::z()).z
    }

    /// Finite entries and an apex that stays on the upper sheet.
    pub fn is_normalizable(&self) -> bool {
        self.matrix.iter().all(|v| v.is_finite()) && self.apex_height() >= 1.0 - 1e-6
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::identity()
    }
}
