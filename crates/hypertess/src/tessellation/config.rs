//! Tiling configuration and its validation.

use serde::Serialize;

use crate::disk::DEFAULT_SPACING;
use crate::error::{ConfigError, ConfigViolation, MAX_SIDES};

/// When the layer walk stops descending.
///
/// The two policies give different output shapes for the same (p,q): a fixed
/// number of rings, or rings that run out towards the rim once tiles become
/// too small to matter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Termination {
    /// Expand tiles of layer `L` only while `L < n`. `0` keeps the central
    /// tile alone.
    MaxLayers(usize),
    /// Expand a tile only while the first edge of its first polygon is at
    /// least this long (Euclidean, disk units).
    MinEdgeLength(f64),
}

impl Default for Termination {
    fn default() -> Self {
        Termination::MaxLayers(3)
    }
}

/// Parameters of a {p,q} tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TilingConfig {
    /// Sides of each tile.
    pub p: u32,
    /// Tiles meeting at each vertex.
    pub q: u32,
    pub termination: Termination,
    /// Maximum distance between consecutive edge samples.
    pub spacing: f64,
    /// Treat geometry warnings as errors.
    pub strict: bool,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            p: 7,
            q: 3,
            termination: Termination::default(),
            spacing: DEFAULT_SPACING,
            strict: false,
        }
    }
}

impl TilingConfig {
    pub fn new(p: u32, q: u32) -> Self {
        Self {
            p,
            q,
            ..Self::default()
        }
    }

    pub fn with_max_layers(mut self, n: usize) -> Self {
        self.termination = Termination::MaxLayers(n);
        self
    }

    pub fn with_min_edge_length(mut self, len: f64) -> Self {
        self.termination = Termination::MinEdgeLength(len);
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check every rule and report all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut violations = Vec::new();
        if self.p < 3 {
            violations.push(ConfigViolation::PTooSmall(self.p));
        }
        if self.q < 3 {
            violations.push(ConfigViolation::QTooSmall(self.q));
        }
        if self.p > MAX_SIDES {
            violations.push(ConfigViolation::PTooLarge(self.p));
        }
        if self.q > MAX_SIDES {
            violations.push(ConfigViolation::QTooLarge(self.q));
        }
        let (p, q) = (u64::from(self.p), u64::from(self.q));
        if p.saturating_sub(2) * q.saturating_sub(2) <= 4 {
            violations.push(ConfigViolation::NotHyperbolic {
                p: self.p,
                q: self.q,
            });
        }
        if let Termination::MinEdgeLength(len) = self.termination {
            if !(len.is_finite() && len > 0.0) {
                violations.push(ConfigViolation::InvalidMinEdgeLength(len));
            }
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            violations.push(ConfigViolation::InvalidSpacing(self.spacing));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError { violations })
        }
    }
}
