//! Curated surface for renderers and tools.
//!
//! Re-exports grouped by concern. Prefer these imports over reaching into
//! submodules.

// Disk geometry
pub use crate::disk::{Arc, ArcShape, Circle, Coordinate, Edge, Polygon, SurfaceTag, DEFAULT_SPACING};
// Isometries
pub use crate::isometry::{is_lorentz, EdgePairing, Isometry, IsometryGroup, Orientation};
// Combinatorics
pub use crate::rules::{Exposure, ExposureRules};
// Engine
pub use crate::tessellation::{
    central_pattern, fundamental_pattern, fundamental_region, generate_layers, LayerOutput,
    Tessellation, Termination, Tile, TilingConfig,
};
// Errors
pub use crate::error::{
    ConfigError, ConfigViolation, GeomWarning, InvariantViolation, TessellationError,
};

/// Build a tessellation with default spacing and `MaxLayers(layers)`.
pub fn tessellate(p: u32, q: u32, layers: usize) -> Result<Tessellation, TessellationError> {
    Tessellation::new(TilingConfig::new(p, q).with_max_layers(layers))
}
