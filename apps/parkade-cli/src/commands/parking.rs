//! # Parking Commands
//!
//! Park and unpark, with registration validation in front of the engine.

use parkade_core::validation::normalize_registration;
use parkade_core::{ParkingReceipt, Ticket, VehicleType};
use tracing::debug;

use crate::error::ApiError;
use crate::state::FacilityState;

/// Parks a vehicle and returns its ticket.
///
/// ## Arguments
/// * `vehicle_type` - Type chosen in the menu
/// * `registration` - Plate as typed; trimmed and upper-cased before use
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty or malformed registration
/// - `ALREADY_PARKED` if the vehicle is already inside
/// - `NO_CAPACITY` if no compatible slot is free
pub fn park_vehicle(
    state: &FacilityState,
    vehicle_type: VehicleType,
    registration: &str,
) -> Result<Ticket, ApiError> {
    let registration = normalize_registration(registration)?;
    debug!(%registration, %vehicle_type, "park_vehicle command");

    let ticket = state.with_facility_mut(|f| f.park(vehicle_type, &registration))?;
    Ok(ticket)
}

/// Unparks a vehicle and returns the receipt with the charge.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty or malformed registration
/// - `NOT_FOUND` if the vehicle has no active ticket
pub fn unpark_vehicle(state: &FacilityState, registration: &str) -> Result<ParkingReceipt, ApiError> {
    let registration = normalize_registration(registration)?;
    debug!(%registration, "unpark_vehicle command");

    let receipt = state.with_facility_mut(|f| f.unpark(&registration))?;
    Ok(receipt)
}
