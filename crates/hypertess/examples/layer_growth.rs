//! Layer growth and timing report for a handful of {p,q} tilings.
//!
//! Purpose
//! - Print tiles per layer and generation time for a few tilings, to see how
//!   quickly the rings grow towards the rim.
//!
//! References
//! - Code: crates/hypertess/src/tessellation/engine.rs::generate_layers

use std::time::Instant;

use hypertess::{Tessellation, TilingConfig};

fn main() {
    for (p, q) in [(7, 3), (4, 5), (5, 4), (3, 7), (8, 3)] {
        let started = Instant::now();
        let t = Tessellation::new(TilingConfig::new(p, q).with_max_layers(4))
            .expect("valid hyperbolic tiling");
        println!(
            "{{{p},{q}}}: layers {:?}, {} tiles, {} polygons, {:.1} ms",
            t.layer_sizes(),
            t.tile_count(),
            t.polygon_count(),
            started.elapsed().as_secs_f64() * 1e3
        );
    }
}
