//! Poincaré-disk primitives: points, geodesic arcs, sampled edges, triangles.
//!
//! Purpose
//! - Provide the immutable building blocks the tessellation engine transforms:
//!   a `Coordinate` with its hyperboloid lift, the geodesic `Arc` between two
//!   points, an `Edge` sampled along that arc, and the triangular `Polygon`.
//!
//! Assumptions and conventions
//! - Points live in the closed unit disk; violations are reported as
//!   `GeomWarning`s by `Coordinate::check` / `Polygon::warnings`, never
//!   clamped.
//! - Lengths used for sampling and size checks are Euclidean lengths in the
//!   disk chart (what a renderer sees), not hyperbolic distances.
//! - Tolerances are fixed constants in `cfg`.
//!
//! References
//! - D. Dunham, "Hyperbolic symmetry" (1986) for the pole construction.
//! - Code cross-refs: `crate::isometry::Isometry::apply`, `crate::tessellation`.

pub mod arc;
pub mod cfg;
pub mod edge;
pub mod euclid;
pub mod point;
pub mod polygon;

pub use arc::{Arc, ArcShape};
pub use cfg::DEFAULT_SPACING;
pub use edge::Edge;
pub use euclid::Circle;
pub use point::Coordinate;
pub use polygon::{Polygon, SurfaceTag};

#[cfg(test)]
mod tests;
