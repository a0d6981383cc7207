/* 3rd party libraries */
use clap::Parser;
use std::io;
use std::path::PathBuf;

/* Custom libraries */
use config::Config;
use console::Console;
use layout::BuildingLayout;
use setup::BuildingSetup;
use simulation::StandaloneBuilding;
use surface::RecordingSurface;
use view::{SystemClock, ViewModel};

/* Modules */
mod config;
mod console;
mod control;
mod layout;
mod setup;
mod shared;
mod simulation;
mod source;
mod surface;
mod view;

/// Live mirror and manual override console for an elevator bank.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Configuration file
    #[clap(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of floors, asked for when left out
    #[clap(long)]
    floors: Option<i64>,

    /// Number of elevators, asked for when left out
    #[clap(long)]
    elevators: Option<i64>,

    /// Draw one frame and print its draw calls as JSON instead of starting the console
    #[clap(long)]
    snapshot: bool,
}

/* Main */
fn main() -> io::Result<()> {
    let args = Args::parse();

    // Load the configuration
    let config = match config::load_config(&args.config) {
        Ok(config) => Some(config),
        Err(config::ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            eprintln!("{}: {}", args.config.display(), e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        config
            .as_ref()
            .map(|config| config.console.log_level.clone())
            .unwrap_or_else(|| "info".to_string()),
    ))
    .init();

    let config = config.unwrap_or_else(|| {
        log::warn!("{} not found, using default configuration", args.config.display());
        Config::default()
    });

    // Floor and elevator counts must be valid before anything is drawn
    let setup = unwrap_or_exit!(building_setup(&args, &config), "Building setup failed");
    log::info!(
        "Building with {} floors and {} elevators",
        setup.num_floors,
        setup.num_elevators
    );

    if args.snapshot {
        let json = unwrap_or_exit!(snapshot_json(&config, setup), "Snapshot failed");
        println!("{}", json);
        return Ok(());
    }

    let console = unwrap_or_exit!(Console::new(&config, setup), "Console failed to start");
    let input_rx = console::spawn_stdin_reader()?;
    console.run(input_rx, &mut io::stdout())
}

fn building_setup(args: &Args, config: &Config) -> Result<BuildingSetup, setup::SetupError> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    match (args.floors, args.elevators) {
        (None, None) => setup::prompt_setup(&mut input, &mut output, &config.setup),
        (floors, elevators) => setup::complete_setup(floors, elevators, &mut input, &mut output, &config.setup),
    }
}

fn snapshot_json(config: &Config, setup: BuildingSetup) -> Result<String, Box<dyn std::error::Error>> {
    let building = StandaloneBuilding::new(setup.num_floors, setup.num_elevators);
    let mut view = ViewModel::new(
        setup.num_floors,
        building.elevators(),
        building.floors(),
        BuildingLayout::new(config.layout.clone()),
        RecordingSurface::new(),
        Box::new(SystemClock),
    )?;
    view.activate();

    let surface = view.surface();
    if let Some((width, height)) = surface.size() {
        log::info!("Snapshot of {} draw calls on a {}x{} canvas", surface.ops().len(), width, height);
    }
    Ok(surface.to_json()?)
}
