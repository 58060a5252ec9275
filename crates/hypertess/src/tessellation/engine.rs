//! Layer-by-layer enumeration of tiles (Dunham's exposure method).
//!
//! The walk is depth-first over an explicit stack of frames rather than
//! native recursion, so deep or fine tilings cannot exhaust the call stack.
//! Children are pushed in reverse, which makes the emission order identical
//! to the recursive pre-order. Whether a tile may branch is decided before its
//! children are built and pushed.

use tracing::{debug, warn};

use super::config::Termination;
use super::types::Tile;
use crate::disk::Polygon;
use crate::error::{GeomWarning, InvariantViolation};
use crate::isometry::{Isometry, IsometryGroup};
use crate::rules::{Exposure, ExposureRules};

/// Layers of placed tiles plus the geometry warnings met on the way.
#[derive(Clone, Debug, Default)]
pub struct LayerOutput {
    pub layers: Vec<Vec<Tile>>,
    pub warnings: Vec<GeomWarning>,
}

/// Place the central tile at layer 0 and enumerate the rest of the tiling.
pub fn generate_layers(
    group: &IsometryGroup,
    rules: &ExposureRules,
    central: &[Polygon],
    termination: Termination,
) -> Result<LayerOutput, InvariantViolation> {
    LayerWalker::new(group, rules, central, termination).run()
}

/// Pending tile; `exposure` is `None` for tiles that close a vertex fan and
/// are emitted without branching.
struct Frame {
    exposure: Option<Exposure>,
    tile: Tile,
}

/// Walk state: shared frozen tables plus the append-only output.
struct LayerWalker<'a> {
    group: &'a IsometryGroup,
    rules: &'a ExposureRules,
    central: &'a [Polygon],
    termination: Termination,
    out: LayerOutput,
    stack: Vec<Frame>,
}

impl<'a> LayerWalker<'a> {
    fn new(
        group: &'a IsometryGroup,
        rules: &'a ExposureRules,
        central: &'a [Polygon],
        termination: Termination,
    ) -> Self {
        Self {
            group,
            rules,
            central,
            termination,
            out: LayerOutput::default(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Result<LayerOutput, InvariantViolation> {
        self.emit(Tile::place(self.central, Isometry::identity(), 0));
        if self.termination == Termination::MaxLayers(0) {
            return Ok(self.out);
        }
        let seeds = self.seed_frames()?;
        self.push_all(seeds);
        while let Some(frame) = self.stack.pop() {
            let children = match frame.exposure {
                Some(e) if self.may_branch(&frame.tile) => self.children(e, &frame.tile)?,
                _ => Vec::new(),
            };
            self.emit(frame.tile);
            self.push_all(children);
        }
        for (l, layer) in self.out.layers.iter().enumerate() {
            debug!(layer = l, tiles = layer.len(), "layer");
        }
        Ok(self.out)
    }

    fn p(&self) -> usize {
        self.group.p()
    }

    fn frame(&self, exposure: Option<Exposure>, transform: Isometry, layer: usize) -> Frame {
        Frame {
            exposure,
            tile: Tile::place(self.central, transform, layer),
        }
    }

    /// Layer-1 tiles: for each edge of the central p-gon, the `q - 2` tiles
    /// around the vertex at the edge's far end.
    fn seed_frames(&self) -> Result<Vec<Frame>, InvariantViolation> {
        let (p, q) = (self.p(), self.rules.q());
        let slots = q - 2;
        let mut frames = Vec::with_capacity(p * slots);
        for i in 0..p {
            let mut q_tran = self.group.edge_transforms()[i];
            for j in 0..slots {
                let exposure = if p == 3 && j == q - 3 {
                    None
                } else {
                    Some(self.rules.exposure(0, i, j))
                };
                frames.push(self.frame(exposure, q_tran, 1));
                if j + 1 < slots {
                    q_tran = self.group.shift(&q_tran, -1)?;
                }
            }
        }
        Ok(frames)
    }

    fn may_branch(&self, tile: &Tile) -> bool {
        match self.termination {
            Termination::MaxLayers(n) => tile.layer() < n,
            Termination::MinEdgeLength(min) => tile.reference_edge_length() >= min,
        }
    }

    /// Children of a tile with exposure `e`, in emission order.
    fn children(&self, e: Exposure, tile: &Tile) -> Result<Vec<Frame>, InvariantViolation> {
        let p = self.p();
        let layer = tile.layer();
        let tran = tile.transform();
        let mut frames = Vec::new();
        let mut p_skip = self.rules.p_skip(e);
        for v in 0..self.rules.vertices_to_do(e) {
            let p_tran = self.group.shift(tran, p_skip)?;
            let q_skip = self.rules.q_skip(e, v);
            let mut q_tran = if q_skip % p as i64 != 0 {
                self.group.shift(&p_tran, q_skip)?
            } else {
                p_tran
            };
            let pgons = self.rules.pgons_to_do(e, v);
            for j in 0..pgons {
                let exposure = if p == 3 && j == pgons - 1 {
                    None
                } else {
                    Some(self.rules.exposure(layer, v, j))
                };
                frames.push(self.frame(exposure, q_tran, layer + 1));
                if j + 1 < pgons {
                    q_tran = self.group.shift(&q_tran, -1)?;
                }
            }
            p_skip = (p_skip + 1) % p as i64;
        }
        Ok(frames)
    }

    fn push_all(&mut self, frames: Vec<Frame>) {
        self.stack.extend(frames.into_iter().rev());
    }

    fn emit(&mut self, tile: Tile) {
        let warnings = tile.warnings();
        if !warnings.is_empty() {
            warn!(
                layer = tile.layer(),
                count = warnings.len(),
                first = %warnings[0],
                "geometry warnings in placed tile"
            );
            self.out.warnings.extend(warnings);
        }
        let l = tile.layer();
        if self.out.layers.len() <= l {
            self.out.layers.resize_with(l + 1, Vec::new);
        }
        self.out.layers[l].push(tile);
    }
}
