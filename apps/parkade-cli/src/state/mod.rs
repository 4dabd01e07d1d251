//! # State Module
//!
//! Application state for the CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │   FacilityState              │  │   AppConfig                  │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<                  │  │  facility layout             │    │
//! │  │    ParkingFacility           │  │  currency symbol             │    │
//! │  │  >>                          │  │                              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • FacilityState: one lock around the whole facility                   │
//! │  • AppConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod facility;

pub use config::{AppConfig, ConfigError};
pub use facility::FacilityState;
