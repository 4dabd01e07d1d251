//! # parkade-core: Pure Parking Engine
//!
//! This crate is the **heart** of Parkade. It allocates slots, issues
//! tickets and bills parking sessions, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkade Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    parkade-cli (menu loop)                      │   │
//! │  │    Park ──► Unpark ──► Status ──► Tickets ──► Revenue           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ parkade-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ facility  │  │   floor   │  │   slot    │  │  ticket   │  │   │
//! │  │   │ park()    │─►│ first-fit │─►│ occupy()  │  │ close()   │  │   │
//! │  │   │ unpark()  │  │ scan      │  │ vacate()  │  │ duration  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • TIME IS PASSED IN                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`vehicle`] - Vehicle types and their standard rates
//! - [`slot`] - A single parking space
//! - [`ticket`] - Parking session records
//! - [`floor`] - Ordered slots with first-fit lookup
//! - [`facility`] - The top-level engine (park, unpark, status)
//! - [`billing`] - Rate table and charge calculation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`config`] - Facility layout configuration
//! - [`validation`] - Input rules for callers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use parkade_core::{FacilityConfig, Money, ParkingFacility, VehicleType};
//!
//! let mut facility = ParkingFacility::new(FacilityConfig::default()).unwrap();
//!
//! let entry = Utc::now();
//! let ticket = facility.park_at(VehicleType::Car, "KA01AB1234", entry).unwrap();
//! assert_eq!(ticket.floor, 1);
//! assert_eq!(ticket.slot_id, 1);
//!
//! let receipt = facility
//!     .unpark_at("KA01AB1234", entry + Duration::minutes(150))
//!     .unwrap();
//! assert_eq!(receipt.billed_hours, 3);
//! assert_eq!(receipt.charge, Money::from_cents(6000)); // 3h × $20.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod config;
pub mod error;
pub mod facility;
pub mod floor;
pub mod money;
pub mod slot;
pub mod ticket;
pub mod validation;
pub mod vehicle;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parkade_core::Money` instead of
// `use parkade_core::money::Money`

pub use billing::RateTable;
pub use config::FacilityConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use facility::{FloorStatus, OccupancyStatus, ParkingFacility, ParkingReceipt};
pub use floor::Floor;
pub use money::Money;
pub use slot::{Slot, SlotStatus};
pub use ticket::Ticket;
pub use vehicle::{Vehicle, VehicleType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum charge for a single parking session, in cents ($200.00).
///
/// ## Business Reason
/// A vehicle left overnight (or for days) is never billed more than one
/// daily maximum per session.
pub const DAILY_MAX_CENTS: i64 = 20_000;

/// Value of the ticket counter before the first ticket is issued.
///
/// The first ticket a facility issues is `TICKET_ID_BASE + 1`.
pub const TICKET_ID_BASE: u64 = 1000;

/// Maximum length of a registration plate accepted by [`validation`].
pub const MAX_REGISTRATION_LEN: usize = 16;
