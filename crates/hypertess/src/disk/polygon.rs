//! Triangular tile pieces with sampled geodesic edges.

use serde::Serialize;

use super::edge::Edge;
use super::point::Coordinate;
use crate::error::GeomWarning;
use crate::isometry::Isometry;

/// Which of the two alternating surface treatments a polygon gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SurfaceTag {
    Primary,
    Secondary,
}

impl SurfaceTag {
    /// Material slot index used by renderers (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SurfaceTag::Primary => 0,
            SurfaceTag::Secondary => 1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            SurfaceTag::Primary => SurfaceTag::Secondary,
            SurfaceTag::Secondary => SurfaceTag::Primary,
        }
    }
}

/// Hyperbolic triangle: three vertices, three sampled edges, an incentre.
///
/// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % 3]`.
#[derive(Clone, Debug, Serialize)]
pub struct Polygon {
    vertices: [Coordinate; 3],
    edges: [Edge; 3],
    centroid: Coordinate,
    tag: SurfaceTag,
    /// Sample spacing the edges were built with; reused by `transform`.
    #[serde(skip)]
    spacing: f64,
}

impl Polygon {
    pub fn new(vertices: [Coordinate; 3], tag: SurfaceTag, spacing: f64) -> Self {
        let [a, b, c] = vertices;
        let edges = [
            Edge::new(a, b, spacing),
            Edge::new(b, c, spacing),
            Edge::new(c, a, spacing),
        ];
        Self {
            vertices,
            edges,
            centroid: incentre(&vertices),
            tag,
            spacing,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Coordinate; 3] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    #[inline]
    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    #[inline]
    pub fn tag(&self) -> SurfaceTag {
        self.tag
    }

    /// Image under `t`, keeping the surface tag.
    pub fn transform(&self, t: &Isometry) -> Polygon {
        self.transform_with_tag(t, self.tag)
    }

    /// Image under `t` with an explicit surface tag.
    pub fn transform_with_tag(&self, t: &Isometry, tag: SurfaceTag) -> Polygon {
        let vertices = self.vertices.map(|v| t.apply(&v));
        Polygon::new(vertices, tag, self.spacing)
    }

    /// Numerical problems found in this polygon's geometry: every vertex,
    /// interior edge sample and the centroid is checked against the disk.
    pub fn warnings(&self) -> Vec<GeomWarning> {
        let interior = self.edges.iter().flat_map(|e| {
            let pts = e.points();
            pts.get(1..pts.len().saturating_sub(1)).unwrap_or(&[])
        });
        let mut out: Vec<GeomWarning> = self
            .vertices
            .iter()
            .chain(interior)
            .chain(std::iter::once(&self.centroid))
            .filter_map(Coordinate::check)
            .collect();
        for e in &self.edges {
            if e.arc.is_degenerate() {
                out.push(GeomWarning::DegenerateArc {
                    x: e.arc.start.x,
                    y: e.arc.start.y,
                });
            }
            if e.fallbacks() > 0 {
                out.push(GeomWarning::NoIntersection {
                    samples: e.fallbacks(),
                });
            }
        }
        out
    }
}

/// Incentre `(a·A + b·B + c·C) / (a + b + c)`, `a` opposite `A` etc.
fn incentre(v: &[Coordinate; 3]) -> Coordinate {
    let [pa, pb, pc] = v;
    let a = pb.distance(pc);
    let b = pc.distance(pa);
    let c = pa.distance(pb);
    let sum = a + b + c;
    if sum <= 0.0 {
        return *pa;
    }
    Coordinate::from_vec((pa.as_vec() * a + pb.as_vec() * b + pc.as_vec() * c) / sum)
}
