//! Tolerance defaults for disk geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants, same as the 4D tolerances elsewhere in this
//!   workspace's history. The only user-facing knob is the edge sample spacing,
//!   which lives on `TilingConfig`.

/// Slack allowed on `x² + y² <= 1` before a point is reported outside the disk.
pub(crate) const DISK_EPS: f64 = 1e-9;
/// Collinearity threshold for "chord passes through the origin".
pub(crate) const ORIGIN_EPS: f64 = 1e-10;
/// Below this length two endpoints are treated as coincident.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;
/// Default maximum distance between consecutive edge samples (disk units).
pub const DEFAULT_SPACING: f64 = 0.1;
