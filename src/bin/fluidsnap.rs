use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render one particle-fluid frame (JSON) as a velocity-colored PNG.
#[derive(Parser, Debug)]
#[command(name = "fluidsnap", version, allow_negative_numbers = true)]
struct Cli {
    /// Frame JSON; its base name is the frame number (e.g. `00042.json`).
    json_frame_path: PathBuf,

    /// Directory the PNG is written to (created if missing).
    out_dir: PathBuf,

    /// Visible world width, in world units.
    world_width: f64,

    /// Visible world height, in world units.
    world_height: f64,

    /// Particle radius, in world units.
    particle_radius: f64,

    /// Number of discrete velocity colors.
    #[arg(long, default_value_t = fluidsnap::DEFAULT_PALETTE_SIZE)]
    palette_size: usize,

    /// Velocity mapped to the first palette color.
    #[arg(long, default_value_t = fluidsnap::DEFAULT_MIN_VELOCITY)]
    min_velocity: f64,

    /// Velocity span covered by the palette.
    #[arg(long, default_value_t = fluidsnap::DEFAULT_VELOCITY_RANGE)]
    velocity_range: f64,

    /// Output pixels per world unit.
    #[arg(long, default_value_t = 100.0)]
    pixels_per_unit: f64,

    /// Brightness multiplier applied to particle colors.
    #[arg(long, default_value_t = 1.0)]
    emission: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir '{}'", cli.out_dir.display()))?;

    let config = fluidsnap::RenderConfig {
        palette_size: cli.palette_size,
        min_velocity: cli.min_velocity,
        velocity_range: cli.velocity_range,
        ..fluidsnap::RenderConfig::new(
            cli.world_width,
            cli.world_height,
            cli.particle_radius,
            cli.out_dir.clone(),
        )
    };
    let engine = fluidsnap::CpuEngine::new(fluidsnap::CpuEngineOpts {
        pixels_per_unit: cli.pixels_per_unit,
        emission_strength: cli.emission,
        ..fluidsnap::CpuEngineOpts::default()
    });

    let rendered = fluidsnap::render_frame_file(&cli.json_frame_path, &config, engine)
        .with_context(|| format!("render frame '{}'", cli.json_frame_path.display()))?;

    tracing::info!(
        particles = rendered.particle_count,
        "wrote {}",
        rendered.output_path.display()
    );
    Ok(())
}
