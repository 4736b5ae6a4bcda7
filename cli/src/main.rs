//! Parking Service - interactive terminal front end
//!
//! Keeps every ticket in memory for the lifetime of the process.
//!
//! ```sh
//! # Run with default config (~/.config/parking-service/config.toml)
//! parking-service
//!
//! # Custom config path, JSON ticket output
//! parking-service --config ./parking.toml --output json
//!
//! # Validate config without starting
//! parking-service --check
//! ```

mod menu;
mod render;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use parking_service::telemetry::init_tracing;
use parking_service::{
    default_config_path, AppConfig, InMemoryTicketRepository, OutputFormat, ParkingService,
    SystemClock,
};

use crate::menu::Menu;

/// Parking lot ticketing and fee calculator.
#[derive(Parser, Debug)]
#[command(
    name = "parking-service",
    version,
    about = "Parking lot ticketing and fee calculator",
    long_about = "Registers vehicle entries and exits, computes parking fees \
                  (30-minute blocks, per-ticket cap, weekend discount) and reports \
                  daily revenue.\n\n\
                  Default config: ~/.config/parking-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override how tickets are printed (text or json).
    #[arg(long)]
    output: Option<OutputFormat>,

    /// Validate the configuration file and exit without starting the menu.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(output) = cli.output {
        config.display.output = output;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Date format : {}", config.display.date_format);
        println!("   Output      : {}", config.display.output);
        return Ok(());
    }

    init_tracing(&config.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Run the menu ───────────────────────────────────────────
    let service = ParkingService::new(Arc::new(InMemoryTicketRepository::new()));
    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(&service, &SystemClock, &config.display, stdin.lock(), stdout.lock()).run()?;

    info!("Parking service stopped");
    Ok(())
}
