//! Regular hyperbolic tessellations {p,q} of the Poincaré disk.
//!
//! Layout
//! - `disk`: points, geodesic arcs, sampled edges, triangles.
//! - `isometry`: Lorentz-matrix isometries and the per-(p,q) generator table.
//! - `rules`: Dunham's exposure tables driving the layer walk.
//! - `tessellation`: configuration, fundamental/central pattern, the walk.
//!
//! API Policy
//! - The output contract for renderers is `Tessellation::layers()`: tiles of
//!   2p triangles, each with vertices, sampled edges, a centroid and a
//!   surface tag. Everything past that (meshes, textures, drawing) belongs to
//!   the caller.

pub mod api;
pub mod disk;
pub mod error;
pub mod isometry;
pub mod rules;
pub mod tessellation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{
    ConfigError, ConfigViolation, GeomWarning, InvariantViolation, TessellationError, MAX_SIDES,
};
pub use tessellation::{Tessellation, Termination, TilingConfig};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::disk::{Coordinate, Edge, Polygon, SurfaceTag};
    pub use crate::isometry::{Isometry, IsometryGroup, Orientation};
    pub use crate::rules::{Exposure, ExposureRules};
    pub use crate::tessellation::{Tessellation, Termination, Tile, TilingConfig};
    pub use crate::TessellationError;
}
