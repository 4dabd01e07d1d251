//! # Validation Module
//!
//! Input validation for callers of the engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (parkade-cli)                                           │
//! │  ├── Reads a line, parses numbers                                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CLI command (Rust)                                           │
//! │  └── THIS MODULE: registration and selector rules                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (ParkingFacility)                                     │
//! │  ├── One active ticket per registration                                │
//! │  └── Exact slot type match                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself takes registrations as given.
//!
//! ## Usage
//! ```rust
//! use parkade_core::validation::{normalize_registration, validate_vehicle_selector};
//! use parkade_core::VehicleType;
//!
//! assert_eq!(normalize_registration(" ka01-ab ").unwrap(), "KA01-AB");
//! assert_eq!(validate_vehicle_selector(2).unwrap(), VehicleType::Bike);
//! ```

use crate::error::ValidationError;
use crate::vehicle::VehicleType;
use crate::MAX_REGISTRATION_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Registration
// =============================================================================

/// Validates a registration plate.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 16 characters
/// - ASCII letters, digits and hyphens only
pub fn validate_registration(registration: &str) -> ValidationResult<()> {
    let registration = registration.trim();

    if registration.is_empty() {
        return Err(ValidationError::Required {
            field: "registration".to_string(),
        });
    }

    if registration.len() > MAX_REGISTRATION_LEN {
        return Err(ValidationError::TooLong {
            field: "registration".to_string(),
            max: MAX_REGISTRATION_LEN,
        });
    }

    if !registration
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "registration".to_string(),
            reason: "must contain only letters, digits and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a registration and returns its canonical form
/// (trimmed, upper-case), so `ka01` and `KA01` are the same vehicle.
pub fn normalize_registration(registration: &str) -> ValidationResult<String> {
    validate_registration(registration)?;
    Ok(registration.trim().to_ascii_uppercase())
}

// =============================================================================
// Selectors
// =============================================================================

/// Validates a 1-based vehicle type menu choice.
pub fn validate_vehicle_selector(selector: i64) -> ValidationResult<VehicleType> {
    u32::try_from(selector)
        .ok()
        .and_then(VehicleType::from_selector)
        .ok_or(ValidationError::OutOfRange {
            field: "vehicle type".to_string(),
            min: 1,
            max: VehicleType::ALL.len() as i64,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
