//! Hyperbolic isometries and the {p,q} isometry table.
//!
//! Purpose
//! - Represent isometries as immutable 3×3 matrices on the hyperboloid model,
//!   where composition is a matrix product and the orientation character
//!   multiplies.
//! - Precompute, per (p,q), the reflections, rotations and the p edge
//!   transforms that carry the central tile onto its neighbours; `shift` walks
//!   from one placed tile to an adjacent one by composing with these.
//!
//! Conventions
//! - Points are column vectors; `a.then(&b)` has matrix `b.M · a.M`.
//! - Edge 0 of the central tile crosses the positive x-axis; edge `i` is its
//!   image under `rotate_cw()[i]`.

mod group;
mod types;

pub use group::{is_lorentz, lorentz_metric, EdgePairing, IsometryGroup};
pub use types::{Isometry, Orientation};
