//! Precomputed isometry table of the {p,q} symmetry group.
//!
//! The fundamental tile is the regular p-gon centred at the origin with its
//! first edge crossing the positive x-axis. All generators are closed-form in
//! `p` and `q`; the table is built once and never mutated.

use std::f64::consts::PI;

use nalgebra::Matrix3;

use super::types::{Isometry, Orientation};
use crate::error::InvariantViolation;

/// Tolerance for `Mᵀ J M ≈ J` (max-abs metric).
const LORENTZ_EPS: f64 = 1e-8;

/// How tile edge `i` is glued to its neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePairing {
    /// `Reversing`: neighbour is the mirror image across the edge.
    /// `Preserving`: neighbour is the half-turn image about the edge midpoint.
    pub orientation: Orientation,
    /// Edge of the neighbour that is glued to edge `i`.
    pub adjacent: usize,
}

/// Generators and per-edge transforms for a {p,q} tiling.
#[derive(Clone, Debug)]
pub struct IsometryGroup {
    p: usize,
    q: usize,
    hypotenuse_reflection: Isometry,
    edge_reflection: Isometry,
    edge_bisector_reflection: Isometry,
    rot2: Isometry,
    rotate_cw: Vec<Isometry>,
    rotate_ccw: Vec<Isometry>,
    pairings: Vec<EdgePairing>,
    edge_transforms: Vec<Isometry>,
}

impl IsometryGroup {
    /// Regular tiling: every edge pairs with itself as a rotation.
    ///
    /// Callers validate `(p - 2)(q - 2) > 4` first; for other inputs the
    /// edge reflection is not real.
    pub fn new(p: usize, q: usize) -> Self {
        let pairings = (0..p)
            .map(|i| EdgePairing {
                orientation: Orientation::Preserving,
                adjacent: i,
            })
            .collect();
        Self::build(p, q, pairings)
    }

    /// Explicit edge pairings. `None` unless `pairings` is a permutation of
    /// `0..p` of length `p`.
    pub fn with_pairings(p: usize, q: usize, pairings: Vec<EdgePairing>) -> Option<Self> {
        if pairings.len() != p {
            return None;
        }
        let mut seen = vec![false; p];
        for e in &pairings {
            if e.adjacent >= p || seen[e.adjacent] {
                return None;
            }
            seen[e.adjacent] = true;
        }
        Some(Self::build(p, q, pairings))
    }

    fn build(p: usize, q: usize, pairings: Vec<EdgePairing>) -> Self {
        let edge_reflection = edge_reflection(p, q);
        let edge_bisector_reflection = Isometry::new(
            Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, -1.0, 1.0)),
            Orientation::Reversing,
            None,
        );
        let rot2 = Isometry::new(
            edge_reflection.matrix() * edge_bisector_reflection.matrix(),
            Orientation::Preserving,
            None,
        );
        let rotate_cw: Vec<Isometry> = (0..p).map(|i| rotation(p, i, false)).collect();
        let rotate_ccw: Vec<Isometry> = (0..p).map(|i| rotation(p, i, true)).collect();

        let edge_transforms = (0..p)
            .map(|i| {
                let adj = pairings[i].adjacent;
                let glue = match pairings[i].orientation {
                    Orientation::Reversing => &edge_reflection,
                    Orientation::Preserving => &rot2,
                };
                let m = rotate_cw[i].matrix() * glue.matrix() * rotate_ccw[adj].matrix();
                Isometry::new(m, pairings[adj].orientation, Some(adj))
            })
            .collect();

        Self {
            p,
            q,
            hypotenuse_reflection: hypotenuse_reflection(p),
            edge_reflection,
            edge_bisector_reflection,
            rot2,
            rotate_cw,
            rotate_ccw,
            pairings,
            edge_transforms,
        }
    }

    #[inline]
    pub fn p(&self) -> usize {
        self.p
    }

    #[inline]
    pub fn q(&self) -> usize {
        self.q
    }

    /// Reflection across the hypotenuse of the fundamental triangle.
    #[inline]
    pub fn hypotenuse_reflection(&self) -> &Isometry {
        &self.hypotenuse_reflection
    }

    /// Reflection across tile edge 0.
    #[inline]
    pub fn edge_reflection(&self) -> &Isometry {
        &self.edge_reflection
    }

    /// Reflection across the x-axis (the perpendicular bisector of edge 0).
    #[inline]
    pub fn edge_bisector_reflection(&self) -> &Isometry {
        &self.edge_bisector_reflection
    }

    /// Half-turn about the midpoint of edge 0.
    #[inline]
    pub fn rot2(&self) -> &Isometry {
        &self.rot2
    }

    /// `rotate_cw()[i]` and `rotate_ccw()[i]` are mutually inverse rotations
    /// by `2πi/p` about the origin.
    #[inline]
    pub fn rotate_cw(&self) -> &[Isometry] {
        &self.rotate_cw
    }

    #[inline]
    pub fn rotate_ccw(&self) -> &[Isometry] {
        &self.rotate_ccw
    }

    #[inline]
    pub fn pairings(&self) -> &[EdgePairing] {
        &self.pairings
    }

    /// `edge_transforms()[i]` maps the central tile onto its neighbour
    /// across edge `i`.
    #[inline]
    pub fn edge_transforms(&self) -> &[Isometry] {
        &self.edge_transforms
    }

    /// Walk from the tile placed by `t` to the neighbour across the edge
    /// `shift` steps from `t`'s anchor (counted in `t`'s orientation).
    pub fn shift(&self, t: &Isometry, shift: i64) -> Result<Isometry, InvariantViolation> {
        let anchor = t.anchor().ok_or(InvariantViolation::MissingAnchor)? as i64;
        let p = self.p as i64;
        let index = (anchor + t.orientation().sign() * shift + 2 * p).rem_euclid(p);
        if !(0..p).contains(&index) {
            return Err(InvariantViolation::ShiftOutOfRange { index, p: self.p });
        }
        let out = t.then(&self.edge_transforms[index as usize]);
        if !out.is_normalizable() {
            return Err(InvariantViolation::NonNormalizable {
                z: out.apex_height(),
            });
        }
        Ok(out)
    }
}

/// Lorentz metric `J = diag(1, 1, -1)`.
#[inline]
pub fn lorentz_metric() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, -1.0))
}

/// Check `Mᵀ J M ≈ J` (max-abs metric).
pub fn is_lorentz(m: &Matrix3<f64>) -> bool {
    let j = lorentz_metric();
    (m.transpose() * j * m - j).amax() < LORENTZ_EPS
}

/// Reflection across edge 0, i.e. across the geodesic perpendicular to the
/// x-axis at hyperbolic distance `d` where `cosh d = cos(π/q) / sin(π/p)`.
fn edge_reflection(p: usize, q: usize) -> Isometry {
    let (p, q) = (p as f64, q as f64);
    let cosh_q = (PI / q).cos() / (PI / p).sin();
    let sinh_q = (cosh_q * cosh_q - 1.0).sqrt();
    let cosh_2q = 2.0 * cosh_q * cosh_q - 1.0;
    let sinh_2q = 2.0 * sinh_q * cosh_q;
    #[rustfmt::skip]
    let m = Matrix3::new(
        -cosh_2q, 0.0, sinh_2q,
        0.0,      1.0, 0.0,
        -sinh_2q, 0.0, cosh_2q,
    );
    Isometry::new(m, Orientation::Reversing, None)
}

fn hypotenuse_reflection(p: usize) -> Isometry {
    let a = 2.0 * PI / p as f64;
    #[rustfmt::skip]
    let m = Matrix3::new(
        a.cos(), a.sin(),  0.0,
        a.sin(), -a.cos(), 0.0,
        0.0,     0.0,      1.0,
    );
    Isometry::new(m, Orientation::Reversing, None)
}

/// Rotation by `2πi/p`; `inverse` flips the sign of the angle.
fn rotation(p: usize, i: usize, inverse: bool) -> Isometry {
    let a = 2.0 * PI * i as f64 / p as f64;
    let s = if inverse { -a.sin() } else { a.sin() };
    #[rustfmt::skip]
    let m = Matrix3::new(
        a.cos(), -s,      0.0,
        s,       a.cos(), 0.0,
        0.0,     0.0,     1.0,
    );
    Isometry::new(m, Orientation::Preserving, None)
}
