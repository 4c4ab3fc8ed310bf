/// Wiregrid Terminal - rotatable wireframe grid with a hidden message
///
/// Controls:
///   - Left mouse drag: Rotate the grid
///   - Up / Down: Zoom the perspective in and out
///   - Q/ESC: Quit
use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::{fs::File, path::PathBuf, sync::Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wiregrid_core::{GridDimensions, GridRenderer, RenderConfig, TextMask, ViewState};
use wiregrid_terminal::TerminalApp;

#[derive(Parser)]
#[command(name = "wiregrid-terminal", about = "Rotatable 3D wireframe grid in the terminal")]
struct Cli {
    /// Seed for the grid dimensions and starting rotation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Canvas units per lattice step (one unit is a column or half a row)
    #[arg(short = 'l', long, default_value_t = 2.0)]
    segment_length: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file; the terminal itself is the drawing surface
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        let filter = if cli.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dims = GridDimensions::random(&mut rng);
    let view = ViewState::random(&mut rng);

    let config = RenderConfig {
        segment_length: cli.segment_length,
        ..RenderConfig::default()
    };
    let grid = GridRenderer::new(dims, TextMask::the_internet()?, config);
    info!(?dims, ?view, "starting terminal renderer");

    let mut app = TerminalApp::new(grid, view)?;
    app.run()?;

    info!("terminal renderer closed");
    Ok(())
}
