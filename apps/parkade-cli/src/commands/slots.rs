//! # Slot Commands
//!
//! Takes slots out of service and puts them back.

use parkade_core::SlotStatus;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::FacilityState;

/// Result of a status change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatusResponse {
    pub floor: u32,
    pub slot_id: u32,
    pub previous: SlotStatus,
    pub status: SlotStatus,
}

/// Sets a non-occupied slot to Free, Reserved or Maintenance.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown floor or slot
/// - `BUSINESS_LOGIC` if a vehicle is parked in the slot
pub fn set_slot_status(
    state: &FacilityState,
    floor: u32,
    slot_id: u32,
    status: SlotStatus,
) -> Result<SlotStatusResponse, ApiError> {
    debug!(floor, slot_id, %status, "set_slot_status command");

    let previous = state.with_facility_mut(|f| f.set_slot_status(floor, slot_id, status))?;
    Ok(SlotStatusResponse {
        floor,
        slot_id,
        previous,
        status,
    })
}
