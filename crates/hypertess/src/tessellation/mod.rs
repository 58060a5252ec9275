//! Regular {p,q} tessellations of the Poincaré disk.
//!
//! Purpose
//! - Validate a `TilingConfig`, build the isometry table and the central
//!   pattern, then enumerate placed copies of that pattern layer by layer.
//!
//! Why this design (short)
//! - Fallible factory: an invalid configuration is an `Err` listing every
//!   violated rule; nothing is built.
//! - The output is immutable and regenerated in full on any parameter change.
//! - Geometry warnings do not abort; they are logged, collected, and turned
//!   into an error only in strict mode.
//!
//! References
//! - D. Dunham, "Hyperbolic symmetry" (1986); H. S. M. Coxeter (1957).
//! - Code cross-refs: `crate::isometry::IsometryGroup::shift`,
//!   `crate::rules::ExposureRules`.

mod config;
mod engine;
mod pattern;
mod types;

use std::time::Instant;

use tracing::info;

pub use config::{Termination, TilingConfig};
pub use engine::{generate_layers, LayerOutput};
pub use pattern::{central_pattern, fundamental_pattern, fundamental_region, fundamental_vertices};
pub use types::Tile;

use crate::disk::Polygon;
use crate::error::{GeomWarning, TessellationError};
use crate::isometry::IsometryGroup;
use crate::rules::ExposureRules;

/// A generated tessellation.
///
/// Invariants:
/// - `layers[0]` holds exactly the central tile (identity transform).
/// - Every tile has `central.len() == 2p` polygons.
#[derive(Clone, Debug)]
pub struct Tessellation {
    config: TilingConfig,
    group: IsometryGroup,
    rules: ExposureRules,
    fundamental: Polygon,
    central: Vec<Polygon>,
    layers: Vec<Vec<Tile>>,
    warnings: Vec<GeomWarning>,
}

impl Tessellation {
    pub fn new(config: TilingConfig) -> Result<Self, TessellationError> {
        config.validate()?;
        let (p, q) = (config.p as usize, config.q as usize);
        let started = Instant::now();

        let group = IsometryGroup::new(p, q);
        let rules = ExposureRules::new(p, q);
        let fundamental = fundamental_region(&group, config.spacing);
        let central = central_pattern(&group, config.spacing);

        let LayerOutput { layers, warnings } =
            generate_layers(&group, &rules, &central, config.termination)?;

        let tiles: usize = layers.iter().map(Vec::len).sum();
        info!(
            p,
            q,
            termination = ?config.termination,
            layers = layers.len(),
            tiles,
            warnings = warnings.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "generated tessellation"
        );

        if config.strict && !warnings.is_empty() {
            return Err(TessellationError::Geometry(warnings));
        }
        Ok(Self {
            config,
            group,
            rules,
            fundamental,
            central,
            layers,
            warnings,
        })
    }

    #[inline]
    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    #[inline]
    pub fn group(&self) -> &IsometryGroup {
        &self.group
    }

    #[inline]
    pub fn rules(&self) -> &ExposureRules {
        &self.rules
    }

    #[inline]
    pub fn fundamental_region(&self) -> &Polygon {
        &self.fundamental
    }

    #[inline]
    pub fn central_pattern(&self) -> &[Polygon] {
        &self.central
    }

    /// Layers in order; each layer's tiles in generation order.
    #[inline]
    pub fn layers(&self) -> &[Vec<Tile>] {
        &self.layers
    }

    /// All tiles, layer by layer.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.layers.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    pub fn polygon_count(&self) -> usize {
        self.tile_count() * self.central.len()
    }

    #[inline]
    pub fn warnings(&self) -> &[GeomWarning] {
        &self.warnings
    }
}
