//! Command line front end: renders the wheel to a PNG, optionally after
//! replaying a pointer drag, and prints the value readout.

use std::path::PathBuf;

use clap::Parser;
use colorwheel::error::{AppError, Result};
use colorwheel::{AppConfig, WheelApp};
use colorwheel_ui::Point;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Wheel side in pixels (overrides the config)
    #[arg(short, long)]
    size: Option<u32>,

    /// Brightness in [0, 1] (overrides the config)
    #[arg(short, long)]
    brightness: Option<f32>,

    /// Pointer sample as x,y in canvas pixels; repeat to describe a drag
    #[arg(short, long = "drag", value_name = "X,Y")]
    drag: Vec<String>,

    /// Where to write the rendered wheel
    #[arg(short, long, default_value = "colorwheel.png")]
    output: PathBuf,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

fn parse_sample(sample: &str) -> Result<Point> {
    let (x, y) = sample
        .split_once(',')
        .ok_or_else(|| AppError::invalid_drag_sample(sample))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_drag_sample(sample))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_drag_sample(sample))?;
    Ok(Point::new(x, y))
}

/// Read the config file named on the command line, if any.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

fn run(cli: Cli, mut config: AppConfig) -> Result<()> {
    if let Some(size) = cli.size {
        config.wheel.size = size;
    }
    if let Some(brightness) = cli.brightness {
        config.initial.brightness = brightness;
    }
    config.validate()?;

    if let Some(path) = &cli.save_config {
        config.save(path)?;
        return Ok(());
    }

    let samples = cli
        .drag
        .iter()
        .map(|s| parse_sample(s))
        .collect::<Result<Vec<_>>>()?;

    let mut app = WheelApp::new(config);
    app.replay_drag(&samples);

    for line in app.readout() {
        println!("{}", line);
    }
    app.save_png(&cli.output)
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli);

    // RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    if let Err(e) = config.and_then(|config| run(cli, config)) {
        log::error!("{}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
