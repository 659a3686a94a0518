//! Hotspot Curation CLI
//!
//! Detects dense accident clusters in a raw records CSV and exports
//! them for hazard-catalog curation.
//!
//! Usage:
//!   curate-hotspots --input data/accident_records.csv \
//!                   --output outputs/hotspot_clusters.json \
//!                   --catalog-out data/asia_accident_hotspots.csv

use anyhow::Result;
use clap::Parser;
use hotspot_curator::{
    detect_clusters, export, loader, ClusterParams, CurationMetadata, CurationResult,
    DEFAULT_EPS, DEFAULT_MIN_SAMPLES,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "curate-hotspots",
    about = "Detect accident hotspot clusters for the hazard catalog"
)]
struct Args {
    /// Path to the raw accident records CSV
    #[arg(short, long)]
    input: PathBuf,

    /// Neighborhood radius in coordinate degrees
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,

    /// Minimum points for a dense region
    #[arg(long, default_value_t = DEFAULT_MIN_SAMPLES)]
    min_samples: usize,

    /// Output clusters JSON file
    #[arg(short, long, default_value = "outputs/hotspot_clusters.json")]
    output: PathBuf,

    /// Also write the clusters as a hazard-catalog CSV source
    #[arg(long)]
    catalog_out: Option<PathBuf>,

    /// Also output GeoJSON
    #[arg(long)]
    geojson: bool,

    /// Write a static review map to this HTML file
    #[arg(long)]
    map: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let records = loader::load_accident_csv(&args.input)?;

    let params = ClusterParams {
        eps: args.eps,
        min_samples: args.min_samples,
    };
    let clusters = detect_clusters(&records, &params);

    info!("Top clusters by accident count:");
    for c in clusters.iter().take(10) {
        info!(
            "  {:5} points | ({:.4}, {:.4}) | {} | {} fatal",
            c.count, c.center_lat, c.center_lon, c.severity, c.fatal_count
        );
    }

    let clustered_points: usize = clusters.iter().map(|c| c.count).sum();
    let result = CurationResult {
        metadata: CurationMetadata {
            input_points: records.len(),
            clustered_points,
            clusters_found: clusters.len(),
            eps: args.eps,
            min_samples: args.min_samples,
            generated_at: chrono::Utc::now().to_rfc3339(),
        },
        clusters,
    };

    info!("Writing clusters to {:?}", args.output);
    ensure_parent_dir(&args.output)?;
    let writer = BufWriter::new(File::create(&args.output)?);
    serde_json::to_writer_pretty(writer, &result)?;

    if args.geojson {
        let geojson_path = args.output.with_extension("geojson");
        info!("Writing GeoJSON to {:?}", geojson_path);
        let writer = BufWriter::new(File::create(&geojson_path)?);
        serde_json::to_writer_pretty(writer, &export::to_geojson(&result.clusters))?;
    }

    if let Some(catalog_path) = &args.catalog_out {
        ensure_parent_dir(catalog_path)?;
        export::write_catalog_csv(&result.clusters, catalog_path)?;
    }

    if let Some(map_path) = &args.map {
        ensure_parent_dir(map_path)?;
        export::write_map_html(&result.clusters, map_path)?;
        info!("Review map written to {:?}", map_path);
    }

    info!(
        "Done: {} clusters from {} records ({} noise)",
        result.metadata.clusters_found,
        result.metadata.input_points,
        result.metadata.input_points - clustered_points
    );

    Ok(())
}
