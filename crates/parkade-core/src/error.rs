//! # Error Types
//!
//! Domain-specific error types for parkade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parkade-core errors (this file)                                       │
//! │  ├── CoreError        - Park/unpark/configuration failures             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  parkade-cli errors (in app)                                           │
//! │  └── ApiError         - What the menu shows (code + message)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Slot and floor level operations (`Slot::occupy`, `Floor::vacate_slot`)
//! signal rejection through their return values (`Err(vehicle)` handing the
//! vehicle back, or `None`). Those are control-flow signals used inside the
//! facility and never surface to callers as distinct error kinds.

use thiserror::Error;

use crate::slot::SlotStatus;
use crate::vehicle::VehicleType;

// =============================================================================
// Core Error
// =============================================================================

/// Parking engine errors.
///
/// No variant is fatal: every failing operation leaves the facility exactly
/// as it was before the call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No free slot of the requested type exists on any floor.
    ///
    /// ## When This Occurs
    /// - Every compatible slot is occupied
    /// - The layout has no slot of this type at all (e.g. HandicappedCar
    ///   on a cars-and-bikes-only facility)
    /// - The only compatible slots are Reserved or under Maintenance
    ///
    /// Not retried internally; the caller tries again later.
    #[error("No free {vehicle_type} slot available")]
    NoCapacity { vehicle_type: VehicleType },

    /// Unpark was given a registration with no active ticket.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Park was given a registration that already holds an active ticket.
    ///
    /// ## User Workflow
    /// ```text
    /// park(Car, "AB12")  ──► Ticket #1001
    ///      │
    ///      ▼
    /// park(Car, "AB12")  ──► AlreadyParked { "AB12", 1001 }
    ///      │
    ///      ▼
    /// Ticket #1001 untouched, no second slot claimed
    /// ```
    #[error("Vehicle {registration} is already parked (ticket {ticket_id})")]
    AlreadyParked {
        registration: String,
        ticket_id: u64,
    },

    /// No slot with this id exists on this floor.
    #[error("Slot {slot_id} not found on floor {floor}")]
    SlotNotFound { floor: u32, slot_id: u32 },

    /// The slot cannot change status right now.
    #[error("Slot {slot_id} on floor {floor} is {status}, cannot change status")]
    SlotBusy {
        floor: u32,
        slot_id: u32,
        status: SlotStatus,
    },

    /// The facility layout is unusable.
    #[error("Invalid facility configuration: {0}")]
    InvalidConfig(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used by callers for early validation before the engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
