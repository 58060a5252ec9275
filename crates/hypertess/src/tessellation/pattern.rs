//! Fundamental region, fundamental pattern, and the central pattern.
//!
//! The fundamental region is the right triangle with vertices at the disk
//! centre, at a vertex of the central p-gon, and at the midpoint of its first
//! edge. Reflecting it across the x-axis gives a kite (the fundamental
//! pattern); rotating the kite p times fills the central p-gon.

use std::f64::consts::PI;

use crate::disk::{Coordinate, Polygon, SurfaceTag};
use crate::isometry::IsometryGroup;

/// Vertices of the fundamental triangle (Dunham's closed form).
///
/// With `cosh2 = cot(π/p)·cot(π/q)` the central p-gon's circumradius is
/// `sinh2 / (cosh2 + 1)` in the disk; with `coshq = cos(π/q) / sin(π/p)` its
/// inradius is `sinhq / (coshq + 1)`.
pub fn fundamental_vertices(p: usize, q: usize) -> [Coordinate; 3] {
    let (pf, qf) = (p as f64, q as f64);
    let cot = |x: f64| x.cos() / x.sin();
    let cosh2 = cot(PI / pf) * cot(PI / qf);
    let sinh2 = (cosh2 * cosh2 - 1.0).sqrt();
    let coshq = (PI / qf).cos() / (PI / pf).sin();
    let sinhq = (coshq * coshq - 1.0).sqrt();

    let vertex_radius = sinh2 / (cosh2 + 1.0);
    let midpoint_x = sinhq / (coshq + 1.0);

    [
        Coordinate::ORIGIN,
        Coordinate::new(
            (PI / pf).cos() * vertex_radius,
            (PI / pf).sin() * vertex_radius,
        ),
        Coordinate::new(midpoint_x, 0.0),
    ]
}

pub fn fundamental_region(group: &IsometryGroup, spacing: f64) -> Polygon {
    Polygon::new(
        fundamental_vertices(group.p(), group.q()),
        SurfaceTag::Primary,
        spacing,
    )
}

/// `[upper, lower]`: the region and its mirror image across the x-axis with
/// the other surface tag.
pub fn fundamental_pattern(group: &IsometryGroup, spacing: f64) -> [Polygon; 2] {
    let upper = fundamental_region(group, spacing);
    let lower = upper.transform_with_tag(group.edge_bisector_reflection(), SurfaceTag::Secondary);
    [upper, lower]
}

/// The 2p triangles of the central p-gon.
///
/// Copy `i` is the kite rotated by `rotate_cw[i]`; odd copies are first
/// mirrored across the x-axis so that neighbouring kites meet mirror to
/// mirror. Tags alternate `Primary`, `Secondary` throughout.
pub fn central_pattern(group: &IsometryGroup, spacing: f64) -> Vec<Polygon> {
    let plain = fundamental_pattern(group, spacing);
    let bisector = group.edge_bisector_reflection();
    let reflected = [plain[0].transform(bisector), plain[1].transform(bisector)];

    let mut out = Vec::with_capacity(2 * group.p());
    out.extend(plain.iter().cloned());
    for (i, rot) in group.rotate_cw().iter().enumerate().skip(1) {
        let kite = if i % 2 == 1 { &reflected } else { &plain };
        out.extend(kite.iter().map(|poly| poly.transform(rot)));
    }
    out
}
