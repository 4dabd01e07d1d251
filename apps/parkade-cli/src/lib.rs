//! # Parkade CLI Library
//!
//! Interactive console for the parking facility.
//!
//! ## Module Organization
//! ```text
//! parkade_cli/
//! ├── lib.rs          ◄─── You are here (flags, startup, logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── facility.rs ◄─── Shared facility behind a mutex
//! │   └── config.rs   ◄─── Layout and currency configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── parking.rs  ◄─── Park / unpark
//! │   └── status.rs   ◄─── Occupancy, tickets, revenue
//! ├── menu.rs         ◄─── Line-based menu loop
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (stderr, RUST_LOG aware)                         │
//! │  2. Load AppConfig from PARKADE_* environment variables                 │
//! │  3. Apply command-line overrides                                        │
//! │  4. Build the facility (validates the layout)                           │
//! │  5. Run the menu on stdin/stdout until "Exit" or end of input           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use menu::Menu;
use state::{AppConfig, FacilityState};

/// Command-line flags. Each layout flag overrides its `PARKADE_*` variable.
#[derive(Debug, Parser)]
#[command(name = "parkade")]
#[command(about = "Smart parking facility console")]
pub struct Cli {
    /// Number of floors
    #[arg(long)]
    pub floors: Option<u32>,

    /// Car slots per floor
    #[arg(long)]
    pub car_slots: Option<u32>,

    /// Bike slots per floor
    #[arg(long)]
    pub bike_slots: Option<u32>,

    /// Electric car slots per floor
    #[arg(long)]
    pub ev_slots: Option<u32>,

    /// Handicapped car slots per floor
    #[arg(long)]
    pub handicapped_car_slots: Option<u32>,

    /// Handicapped bike slots per floor
    #[arg(long)]
    pub handicapped_bike_slots: Option<u32>,

    /// Print command results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut AppConfig) {
        let facility = &mut config.facility;
        let overrides = [
            (self.floors, &mut facility.floor_count),
            (self.car_slots, &mut facility.car_slots_per_floor),
            (self.bike_slots, &mut facility.bike_slots_per_floor),
            (self.ev_slots, &mut facility.electric_slots_per_floor),
            (
                self.handicapped_car_slots,
                &mut facility.handicapped_car_slots_per_floor,
            ),
            (
                self.handicapped_bike_slots,
                &mut facility.handicapped_bike_slots_per_floor,
            ),
        ];

        for (flag, target) in overrides {
            if let Some(value) = flag {
                *target = value;
            }
        }
    }
}

/// Runs the console until the user exits.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    cli.apply_to(&mut config);

    let state = FacilityState::new(config.facility.clone()).context("Invalid facility layout")?;
    info!(
        floors = config.facility.floor_count,
        slots_per_floor = config.facility.slots_per_floor(),
        "Facility ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&state, &config, stdin.lock(), stdout.lock())
        .json(cli.json)
        .run()
        .context("Console I/O failed")?;

    info!("Shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with menu output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parkade_core=debug` - Log slot searches
/// - Default: WARN, INFO for the parkade crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,parkade=info"));

    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["parkade", "--floors", "2", "--ev-slots", "3", "--json"]);
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.facility.floor_count, 2);
        assert_eq!(config.facility.electric_slots_per_floor, 3);
        assert_eq!(config.facility.car_slots_per_floor, 10);
        assert!(cli.json);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["parkade"]);
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flag_rejects_negative() {
        assert!(Cli::try_parse_from(["parkade", "--car-slots", "-1"]).is_err());
    }
}
