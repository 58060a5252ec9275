use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hypertess::tessellation::Tile;
use hypertess::{Tessellation, Termination, TilingConfig};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser, Debug)]
#[command(name = "hypertess-cli")]
#[command(about = "Generate regular hyperbolic {p,q} tessellations of the Poincaré disk")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Generate a tessellation and write it as JSON plus a provenance sidecar
    Generate {
        #[command(flatten)]
        tiling: TilingArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small JSON summary (layer sizes, counts, code revision)
    Report {
        #[command(flatten)]
        tiling: TilingArgs,
    },
    /// Validate a configuration and list every violated rule
    Check {
        #[command(flatten)]
        tiling: TilingArgs,
    },
}

#[derive(Args, Clone, Debug)]
struct TilingArgs {
    /// Sides of each polygon
    #[arg(long)]
    p: u32,
    /// Polygons meeting at each vertex
    #[arg(long)]
    q: u32,
    /// Number of layers around the central polygon (default 3)
    #[arg(long, conflicts_with = "min_edge")]
    layers: Option<usize>,
    /// Stop branching once a tile's reference edge is shorter than this
    #[arg(long = "min-edge")]
    min_edge: Option<f64>,
    /// Maximum distance between edge samples
    #[arg(long, default_value_t = hypertess::disk::DEFAULT_SPACING)]
    spacing: f64,
    /// Fail on geometry warnings
    #[arg(long)]
    strict: bool,
}

impl TilingArgs {
    fn config(&self) -> TilingConfig {
        let base = TilingConfig::new(self.p, self.q)
            .with_spacing(self.spacing)
            .strict(self.strict);
        match (self.layers, self.min_edge) {
            (_, Some(len)) => base.with_min_edge_length(len),
            (Some(n), None) => base.with_max_layers(n),
            (None, None) => base,
        }
    }
}

/// The exported renderer contract.
#[derive(Serialize)]
struct Export<'a> {
    version: &'static str,
    config: &'a TilingConfig,
    layer_sizes: Vec<usize>,
    warnings: Vec<String>,
    layers: &'a [Vec<Tile>],
}

#[derive(Serialize, Debug)]
struct Summary {
    code_rev: String,
    p: u32,
    q: u32,
    termination: Termination,
    layer_sizes: Vec<usize>,
    tiles: usize,
    polygons: usize,
    warnings: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    dispatch(Cmd::parse())
}

fn dispatch(cmd: Cmd) -> Result<()> {
    match cmd.action {
        Action::Generate { tiling, out } => generate(&tiling, &out),
        Action::Report { tiling } => report(&tiling),
        Action::Check { tiling } => check(&tiling),
    }
}

fn build(tiling: &TilingArgs) -> Result<Tessellation> {
    let config = tiling.config();
    Tessellation::new(config)
        .with_context(|| format!("generating {{{},{}}} tessellation", config.p, config.q))
}

fn generate(tiling: &TilingArgs, out: &Path) -> Result<()> {
    let t = build(tiling)?;
    tracing::info!(out = %out.display(), tiles = t.tile_count(), "generate");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let export = Export {
        version: hypertess::VERSION,
        config: t.config(),
        layer_sizes: t.layer_sizes(),
        warnings: t.warnings().iter().map(ToString::to_string).collect(),
        layers: t.layers(),
    };
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    serde_json::to_writer(BufWriter::new(file), &export)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut payload = provenance::Payload::new(serde_json::to_value(t.config())?);
    payload.notes = run_notes(&t);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

/// Human-readable facts about a run that the params alone do not show.
fn run_notes(t: &Tessellation) -> Vec<String> {
    let mut notes = vec![
        format!("termination: {:?}", t.config().termination),
        format!("layer sizes: {:?}", t.layer_sizes()),
        format!("{} tiles, {} polygons", t.tile_count(), t.polygon_count()),
    ];
    let warnings = t.warnings();
    notes.push(format!("{} geometry warning(s)", warnings.len()));
    if let Some(first) = warnings.first() {
        notes.push(format!("first warning: {first}"));
    }
    notes
}

fn summarize(t: &Tessellation) -> Summary {
    let config = t.config();
    Summary {
        code_rev: provenance::current_git_rev(),
        p: config.p,
        q: config.q,
        termination: config.termination,
        layer_sizes: t.layer_sizes(),
        tiles: t.tile_count(),
        polygons: t.polygon_count(),
        warnings: t.warnings().len(),
    }
}

fn report(tiling: &TilingArgs) -> Result<()> {
    let t = build(tiling)?;
    println!("{}", serde_json::to_string_pretty(&summarize(&t))?);
    Ok(())
}

fn check(tiling: &TilingArgs) -> Result<()> {
    let config = tiling.config();
    match config.validate() {
        Ok(()) => {
            println!("{{{},{}}}: ok", config.p, config.q);
            Ok(())
        }
        Err(err) => {
            for v in &err.violations {
                println!("- {v}");
            }
            bail!(
                "{{{},{}}}: {} violation(s)",
                config.p,
                config.q,
                err.violations.len()
            )
        }
    }
}
