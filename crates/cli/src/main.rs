use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use navgeo::api::{build_regions, BuildCfg, Circle, Coord, GeomCfg, Locate, RegionGraph};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod mesh;
mod provenance;

use mesh::{MeshFile, RegionsFile};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build convex regions from a triangulated mesh and query them")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build regions and write them (plus a provenance sidecar) to `out`
    Build {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Skip the second pass that merges whole adjacent regions
        #[arg(long)]
        no_region_pass: bool,
        /// Check every region after building (failures are logged)
        #[arg(long)]
        validate: bool,
    },
    /// Print the region and triangle containing a point
    Locate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        z: i32,
        #[arg(long, value_enum, default_value_t = Strategy::Angular)]
        strategy: Strategy,
    },
    /// Print the regions a circle overlaps
    Overlap {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        z: i32,
        #[arg(long)]
        radius: u32,
        /// Comparison tolerance for the distance checks
        #[arg(long, default_value_t = navgeo::api::LOW_EPSILON)]
        eps: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    RayCast,
    Angular,
    BinarySearch,
}

impl From<Strategy> for Locate {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::RayCast => Locate::RayCast,
            Strategy::Angular => Locate::Angular,
            Strategy::BinarySearch => Locate::BinarySearch,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build {
            input,
            out,
            no_region_pass,
            validate,
        } => {
            let cfg = BuildCfg {
                merge_regions: !no_region_pass,
                validate,
            };
            build(&input, &out, cfg)
        }
        Action::Locate {
            input,
            x,
            z,
            strategy,
        } => locate(&input, Coord::new(x, z), strategy.into()),
        Action::Overlap {
            input,
            x,
            z,
            radius,
            eps,
        } => {
            let radius = i32::try_from(radius).context("radius does not fit in i32")?;
            let circle = Circle::new(Coord::new(x, z), radius);
            let hits = overlap(&input, circle, GeomCfg::with_cmp(eps))?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn load_graph(input: &Path, cfg: BuildCfg) -> Result<RegionGraph> {
    let mesh = MeshFile::load(input)?;
    let triangles = mesh.triangles()?;
    build_regions(&triangles, cfg).with_context(|| format!("building regions from {}", input.display()))
}

fn build(input: &Path, out: &Path, cfg: BuildCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "build");
    let graph = load_graph(input, cfg)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = RegionsFile::from(&graph);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "merge_regions": cfg.merge_regions,
        "validate": cfg.validate,
        "regions": graph.len(),
    }));
    let sidecar = write_sidecar(out, payload)?;
    tracing::info!(regions = graph.len(), sidecar = %sidecar.display(), "wrote regions");
    Ok(())
}

fn locate(input: &Path, p: Coord, strategy: Locate) -> Result<()> {
    tracing::info!(input = %input.display(), x = p.x, z = p.z, ?strategy, "locate");
    let graph = load_graph(input, BuildCfg::default())?;
    let hit = graph.locate_triangle(p, strategy);
    let obj = serde_json::json!({
        "x": p.x,
        "z": p.z,
        "strategy": format!("{strategy:?}"),
        "region": hit.map(|(r, _)| r.0),
        "triangle": hit.map(|(_, t)| t.0),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn overlap(input: &Path, circle: Circle, geom: GeomCfg) -> Result<serde_json::Value> {
    tracing::info!(
        input = %input.display(),
        x = circle.center.x,
        z = circle.center.z,
        radius = circle.radius,
        eps = geom.eps_cmp,
        "overlap"
    );
    let graph = load_graph(input, BuildCfg::default())?;
    let regions: Vec<usize> = graph
        .regions_overlapping_circle(&circle, geom)
        .into_iter()
        .map(|r| r.0)
        .collect();
    Ok(serde_json::json!({
        "x": circle.center.x,
        "z": circle.center.z,
        "radius": circle.radius,
        "eps_cmp": geom.eps_cmp,
        "regions": regions,
    }))
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": navgeo::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
