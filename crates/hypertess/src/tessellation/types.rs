//! Output types handed to rendering collaborators.

use serde::Serialize;

use crate::disk::{Coordinate, Polygon};
use crate::error::GeomWarning;
use crate::isometry::Isometry;

/// One placed copy of the central pattern.
///
/// Invariants:
/// - `polygons` has the central pattern's length (2p) and order.
/// - `polygons[k] == central[k].transform(transform)`.
#[derive(Clone, Debug, Serialize)]
pub struct Tile {
    layer: usize,
    #[serde(skip)]
    transform: Isometry,
    polygons: Vec<Polygon>,
}

impl Tile {
    pub(crate) fn place(pattern: &[Polygon], transform: Isometry, layer: usize) -> Self {
        Self {
            layer,
            transform,
            polygons: pattern.iter().map(|poly| poly.transform(&transform)).collect(),
        }
    }

    #[inline]
    pub fn layer(&self) -> usize {
        self.layer
    }

    #[inline]
    pub fn transform(&self) -> &Isometry {
        &self.transform
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Image of the disk centre, i.e. the centre of this p-gon.
    #[inline]
    pub fn centre(&self) -> Coordinate {
        self.transform.apply(&Coordinate::ORIGIN)
    }

    /// Length of the first edge of the first polygon; the size measure used
    /// by `Termination::MinEdgeLength`.
    #[inline]
    pub fn reference_edge_length(&self) -> f64 {
        self.polygons
            .first()
            .map(|poly| poly.edges()[0].arc.length)
            .unwrap_or(0.0)
    }

    pub fn warnings(&self) -> Vec<GeomWarning> {
        self.polygons.iter().flat_map(|poly| poly.warnings()).collect()
    }
}
