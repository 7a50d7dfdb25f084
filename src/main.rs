use clap::Parser;
use std::path::PathBuf;
use terrain_forge::{
    config::{AppConfig, ConfigSource},
    export::save_build,
    procgen::{ItemKind, TerrainBuildPipeline, TerrainBuildResult},
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to terrain.toml configuration file
    #[arg(short, long, default_value = "./terrain.toml")]
    config: String,

    /// Override the build seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Scene output file (.json or MessagePack); overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print placement counts per item kind after the build
    #[arg(long)]
    summary: bool,

    /// Write the default configuration to --config and exit
    #[arg(long)]
    init: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.init {
        AppConfig::default().save(&args.config)?;
        println!("Wrote default configuration to {}", args.config);
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&args.config);

    // Initialize tracing
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if config.logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting terrain-forge v{}", env!("CARGO_PKG_VERSION"));
    match source {
        ConfigSource::File => info!("Configuration loaded from: {}", args.config),
        ConfigSource::Missing => info!("No configuration at {}, using defaults", args.config),
        ConfigSource::Invalid(e) => warn!("Failed to load config {}: {}, using defaults", args.config, e),
    }

    if let Some(seed) = args.seed {
        config.build.seed = seed;
    }

    let pipeline = TerrainBuildPipeline::new(config.build)?;
    let result = pipeline.build()?;

    info!(
        "Build complete: {} waypoints, {} placements, highest point {:.2}",
        result.waypoints.len(),
        result.placement_count(),
        result.field.max_height_sample()
    );

    if args.summary {
        print_summary(&result);
    }

    let output = args.output.or_else(|| config.output.path.map(PathBuf::from));
    match output {
        Some(path) => save_build(&path, &result)?,
        None => info!("No output path configured, scene not written"),
    }

    Ok(())
}

fn print_summary(result: &TerrainBuildResult) {
    const KINDS: [ItemKind; 7] = [
        ItemKind::Tree,
        ItemKind::Bush,
        ItemKind::Rock,
        ItemKind::FlowerRed,
        ItemKind::FlowerBlue,
        ItemKind::Water,
        ItemKind::Cloud,
    ];

    println!(
        "Terrain {}x{} (resolution {}), seed {}",
        result.field.width, result.field.length, result.field.resolution, result.seed
    );
    println!(
        "Spawn point: ({:.2}, {:.2}, {:.2})",
        result.spawn_point.x, result.spawn_point.y, result.spawn_point.z
    );

    let all = result
        .decorations
        .iter()
        .chain(&result.water_bodies)
        .chain(&result.clouds);
    let counts = all.fold([0usize; KINDS.len()], |mut counts, placement| {
        if let Some(i) = KINDS.iter().position(|k| *k == placement.kind) {
            counts[i] += 1;
        }
        counts
    });

    for (kind, count) in KINDS.iter().zip(counts) {
        println!("  {:?}: {}", kind, count);
    }
}
