//! # Facility Configuration
//!
//! The physical layout of a facility: how many floors, and how many slots
//! of each vehicle type every floor has.
//!
//! ## Slot Numbering
//! Each floor numbers its slots from 1 in this order:
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┬──────────────┐
//! │ car slots    │ bike slots   │ electric     │ handicapped  │ handicapped  │
//! │ 1..=c        │ c+1..        │ slots        │ car slots    │ bike slots   │
//! └──────────────┴──────────────┴──────────────┴──────────────┴──────────────┘
//! ```
//! The minimal `{floorCount, carSlotsPerFloor, bikeSlotsPerFloor}` form is
//! accepted as-is; the other counts default to zero.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::vehicle::VehicleType;

/// Layout of a parking facility. Every floor shares the same layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityConfig {
    pub floor_count: u32,
    pub car_slots_per_floor: u32,
    pub bike_slots_per_floor: u32,
    #[serde(default)]
    pub electric_slots_per_floor: u32,
    #[serde(default)]
    pub handicapped_car_slots_per_floor: u32,
    #[serde(default)]
    pub handicapped_bike_slots_per_floor: u32,
}

impl Default for FacilityConfig {
    /// 3 floors of 10 car and 5 bike slots.
    fn default() -> Self {
        FacilityConfig::new(3, 10, 5)
    }
}

impl FacilityConfig {
    /// Cars-and-bikes layout.
    pub fn new(floor_count: u32, car_slots_per_floor: u32, bike_slots_per_floor: u32) -> Self {
        FacilityConfig {
            floor_count,
            car_slots_per_floor,
            bike_slots_per_floor,
            electric_slots_per_floor: 0,
            handicapped_car_slots_per_floor: 0,
            handicapped_bike_slots_per_floor: 0,
        }
    }

    pub fn with_electric_slots(mut self, count: u32) -> Self {
        self.electric_slots_per_floor = count;
        self
    }

    pub fn with_handicapped_car_slots(mut self, count: u32) -> Self {
        self.handicapped_car_slots_per_floor = count;
        self
    }

    pub fn with_handicapped_bike_slots(mut self, count: u32) -> Self {
        self.handicapped_bike_slots_per_floor = count;
        self
    }

    /// Slot counts per floor in numbering order.
    pub fn slot_layout(&self) -> [(VehicleType, u32); 5] {
        [
            (VehicleType::Car, self.car_slots_per_floor),
            (VehicleType::Bike, self.bike_slots_per_floor),
            (VehicleType::ElectricCar, self.electric_slots_per_floor),
            (VehicleType::HandicappedCar, self.handicapped_car_slots_per_floor),
            (VehicleType::HandicappedBike, self.handicapped_bike_slots_per_floor),
        ]
    }

    /// Total slots on one floor.
    pub fn slots_per_floor(&self) -> u64 {
        self.slot_layout().iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Checks the layout can be built.
    ///
    /// ## Rules
    /// - At least one floor
    /// - At least one slot per floor
    /// - Slot ids per floor must fit in `u32`
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count == 0 {
            return Err(CoreError::InvalidConfig(
                "facility must have at least one floor".to_string(),
            ));
        }

        let per_floor = self.slots_per_floor();
        if per_floor == 0 {
            return Err(CoreError::InvalidConfig(
                "each floor must have at least one slot".to_string(),
            ));
        }
        if per_floor > u64::from(u32::MAX) {
            return Err(CoreError::InvalidConfig(format!(
                "{} slots per floor exceeds the maximum of {}",
                per_floor,
                u32::MAX
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
