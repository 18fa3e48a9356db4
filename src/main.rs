//! Traystack - Fast-Food Tray Storage Manager
//!
//! Starts an interactive session on stdin/stdout, or replays a script file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use clap::Parser;
use traystack::{Session, SystemClock, APP_NAME, APP_VERSION};
use traystack_core::{Mode, StorageUnit, STORAGE_CAPACITY_DEFAULT};

// =============================================================================
// CLI
// =============================================================================

/// Fast-food tray storage manager
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "Manage a fixed-capacity rack of food trays with LIFO/FIFO removal")]
#[command(version)]
struct Cli {
    /// Number of trays the storage unit holds
    #[arg(long, env = "TRAYSTACK_CAPACITY", default_value_t = STORAGE_CAPACITY_DEFAULT, value_parser = parse_capacity)]
    capacity: usize,

    /// Initial removal mode (STACK_FRONT_BOTH/lifo or ADD_FRONT_REMOVE_OPP/fifo)
    #[arg(long, env = "TRAYSTACK_MODE", default_value = "STACK_FRONT_BOTH", value_parser = parse_mode)]
    mode: Mode,

    /// Replay menu input from a file instead of stdin
    #[arg(long)]
    input: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s.parse().map_err(|e| format!("{e}"))?;
    if capacity == 0 {
        return Err("capacity must be at least 1".to_string());
    }
    Ok(capacity)
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = Mode::all().iter().map(Mode::as_str).collect();
        format!("unknown mode '{s}', expected one of {}", known.join(", "))
    })
}

// =============================================================================
// Main
// =============================================================================

fn main() -> anyhow::Result<()> {
    // Load .env so TRAYSTACK_* can come from a file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging (stderr, the menu owns stdout)
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("{} v{}", APP_NAME, APP_VERSION);

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let path = shellexpand::tilde(path).to_string();
            tracing::info!("Replaying input from {}", path);
            let file = File::open(&path).with_context(|| format!("failed to open input file {path}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let unit = StorageUnit::new(cli.capacity, cli.mode);
    let mut session = Session::new(unit, input, io::stdout().lock(), SystemClock);
    session.run().context("session aborted")?;

    Ok(())
}
