//! Move country shapes from a GeoJSON file and write the result back out.
//!
//! Usage:
//!   truesize drag --input countries.geojson --feature GRL --to 10,0
//!   truesize planet --input countries.geojson --feature FRA --body Moon --to 0,0
//!   truesize mercator --from-lat 72 --to-lat 0
//!   truesize bodies

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use truesize::config::{BodyConfig, DEFAULT_BODIES_PATH, find_body, load_bodies};
use truesize::export::{self, geojson, summary};
use truesize::geometry::{CountryFeature, load_features};
use truesize::primitives::LonLat;
use truesize::session::{DragSession, Placement};
use truesize::sphere::mercator_scale;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Drag countries across the globe and compare their true size"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotate a feature so its centroid lands on a new point
    Drag(PlaceArgs),
    /// Resize a feature for another body, then move it
    Planet {
        #[command(flatten)]
        place: PlaceArgs,

        /// Target body name (case-insensitive)
        #[arg(long)]
        body: String,

        /// Body catalog (YAML file, TOML file, or directory of TOML files)
        #[arg(long, default_value = DEFAULT_BODIES_PATH)]
        bodies: PathBuf,
    },
    /// Print the Mercator size ratio between two latitudes
    Mercator {
        /// Latitude the shape starts at (degrees)
        #[arg(long, allow_negative_numbers = true)]
        from_lat: f64,

        /// Latitude the shape is moved to (degrees)
        #[arg(long, allow_negative_numbers = true)]
        to_lat: f64,
    },
    /// List the bodies in a catalog with their scale factors
    Bodies {
        #[arg(long, default_value = DEFAULT_BODIES_PATH)]
        bodies: PathBuf,
    },
}

#[derive(Args)]
struct PlaceArgs {
    /// GeoJSON FeatureCollection to read
    #[arg(long)]
    input: PathBuf,

    /// Feature id (or name when the feature has no id)
    #[arg(long)]
    feature: String,

    /// Drop point as "lon,lat" in degrees
    #[arg(long, allow_hyphen_values = true)]
    to: LonLat,

    /// Where to write the moved feature as GeoJSON (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional CSV summary of the placement
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Drag(place) => run_place(&place, None),
        Command::Planet {
            place,
            body,
            bodies,
        } => {
            let catalog = load_bodies(&bodies)
                .with_context(|| format!("loading body catalog {}", bodies.display()))?;
            let body = find_body(&catalog, &body)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Body '{}' not found in catalog", body))?;
            run_place(&place, Some(body))
        }
        Command::Mercator { from_lat, to_lat } => {
            let scale = mercator_scale(from_lat, to_lat);
            println!("{}", format_scale(scale));
            Ok(())
        }
        Command::Bodies { bodies } => {
            let catalog = load_bodies(&bodies)
                .with_context(|| format!("loading body catalog {}", bodies.display()))?;
            for body in &catalog {
                println!(
                    "{:<12} {:>12.1} km  x{:.3}",
                    body.name,
                    body.diameter_km,
                    body.scale_factor()
                );
            }
            Ok(())
        }
    }
}

fn run_place(args: &PlaceArgs, body: Option<BodyConfig>) -> anyhow::Result<()> {
    let features = load_features(&args.input)
        .with_context(|| format!("reading features from {}", args.input.display()))?;
    info!(count = features.len(), input = %args.input.display(), "loaded features");

    let mut session = DragSession::new(features);
    session.set_body(body);
    session.drag(&args.feature, args.to)?;
    let placement = session.place(&args.feature)?;
    log_placement(&placement, session.body());

    let moved: Vec<CountryFeature> = vec![placement.feature.clone()];
    let mut writer = export::writer_for_path(&args.output)?;
    geojson::write_feature_collection(writer.as_mut(), &moved)?;

    if let Some(path) = &args.summary {
        write_summary(path, &placement, session.body())?;
    }
    Ok(())
}

fn write_summary(
    path: &Path,
    placement: &Placement,
    body: Option<&BodyConfig>,
) -> anyhow::Result<()> {
    let writer = export::writer_for_path(path)?;
    let record = placement.summary_record(body.map(|b| b.name.as_str()));
    summary::write_records(writer, &[record])
        .with_context(|| format!("writing summary {}", path.display()))?;
    Ok(())
}

fn log_placement(placement: &Placement, body: Option<&BodyConfig>) {
    info!(
        feature = placement.feature.label(),
        from = %placement.origin,
        to = %placement.target,
        distance_deg = placement.distance_rad.to_degrees(),
        mercator = %format_scale(placement.mercator_scale),
        body = body.map(|b| b.name.as_str()).unwrap_or("Earth"),
        "placed feature"
    );
}

fn format_scale(scale: f64) -> String {
    if scale.is_finite() {
        format!("{:.4}", scale)
    } else {
        "unbounded".to_string()
    }
}
