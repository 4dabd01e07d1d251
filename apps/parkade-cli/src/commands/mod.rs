//! # Commands Module
//!
//! Every operation the menu can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── parking.rs  ◄─── park_vehicle, unpark_vehicle
//! ├── slots.rs    ◄─── set_slot_status
//! └── status.rs   ◄─── get_status, list_active_tickets, get_revenue
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Menu reads "1", "1", "ka01ab"                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  park_vehicle(&state, VehicleType::Car, "ka01ab")                       │
//! │    1. validate + normalize registration  ──► "KA01AB"                   │
//! │    2. lock facility, park                                               │
//! │    3. CoreError ──► ApiError                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Ticket, ApiError>  ──► menu renders text or JSON                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never print; rendering is the menu's job.

pub mod parking;
pub mod slots;
pub mod status;
