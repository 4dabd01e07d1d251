//! # Floors
//!
//! A floor owns an ordered list of slots and answers "which slot can take
//! this vehicle?" with a first-fit scan in slot-id order.

use std::iter;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::FacilityConfig;
use crate::slot::{Slot, SlotStatus};
use crate::vehicle::{Vehicle, VehicleType};

/// One floor of the facility.
///
/// ## Invariants
/// - every slot has `slot.floor() == number`
/// - slot ids are 1..=n in creation order
/// - `occupied` equals the number of Occupied slots
#[derive(Debug, Clone)]
pub struct Floor {
    number: u32,
    slots: Vec<Slot>,
    occupied: usize,
}

impl Floor {
    /// Builds a floor using the per-floor layout of `config`.
    pub fn new(number: u32, config: &FacilityConfig) -> Self {
        let types = config
            .slot_layout()
            .into_iter()
            .flat_map(|(vehicle_type, count)| iter::repeat(vehicle_type).take(count as usize));
        let slots = (1..=u32::MAX)
            .zip(types)
            .map(|(id, vehicle_type)| Slot::new(id, number, vehicle_type))
            .collect();
        Floor {
            number,
            slots,
            occupied: 0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, slot_id: u32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id() == slot_id)
    }

    fn slot_mut(&mut self, slot_id: u32) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.id() == slot_id)
    }

    /// First free slot typed for `vehicle_type`, in slot-id order.
    pub fn find_available_slot(&self, vehicle_type: VehicleType) -> Option<&Slot> {
        let slot = self.slots.iter().find(|s| s.is_compatible(vehicle_type));
        debug!(
            floor = self.number,
            %vehicle_type,
            slot_id = slot.map(Slot::id),
            "first-fit scan"
        );
        slot
    }

    /// Parks `vehicle` in slot `slot_id`.
    ///
    /// ## Returns
    /// - `Ok(())` on success (the occupied counter goes up)
    /// - `Err(vehicle)` if the slot does not exist or rejects the vehicle
    pub fn occupy(
        &mut self,
        slot_id: u32,
        vehicle: Vehicle,
        now: DateTime<Utc>,
    ) -> Result<(), Vehicle> {
        let Some(slot) = self.slot_mut(slot_id) else {
            return Err(vehicle);
        };
        slot.occupy(vehicle, now)?;
        self.occupied += 1;
        Ok(())
    }

    /// Frees slot `slot_id` and hands back its vehicle.
    ///
    /// `None` if the slot does not exist or is not occupied; nothing changes.
    pub fn vacate_slot(&mut self, slot_id: u32) -> Option<Vehicle> {
        let vehicle = self.slot_mut(slot_id)?.vacate()?;
        self.occupied -= 1;
        Some(vehicle)
    }

    /// Changes a non-occupied slot's status.
    ///
    /// `None` if the slot does not exist, otherwise the slot's answer
    /// (see [`Slot::set_status`]).
    pub fn set_slot_status(
        &mut self,
        slot_id: u32,
        status: SlotStatus,
    ) -> Option<Result<SlotStatus, SlotStatus>> {
        self.slot_mut(slot_id).map(|slot| slot.set_status(status))
    }

    /// `(occupied, total)` slot counts.
    pub fn occupancy_counts(&self) -> (usize, usize) {
        (self.occupied, self.slots.len())
    }

    /// Number of slots that would accept `vehicle_type` right now.
    pub fn available_for(&self, vehicle_type: VehicleType) -> usize {
        self.slots
            .iter()
            .filter(|s| s.is_compatible(vehicle_type))
            .count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
