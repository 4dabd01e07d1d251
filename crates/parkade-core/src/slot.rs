//! # Parking Slot
//!
//! A single parking space on one floor, typed to exactly one vehicle
//! category.
//!
//! ## Slot State Machine
//! ```text
//!              occupy(vehicle)
//!   ┌──────┐ ─────────────────► ┌──────────┐
//!   │ Free │                    │ Occupied │
//!   └──────┘ ◄───────────────── └──────────┘
//!    │  ▲        vacate()
//!    │  │
//!    │  │ set_status(Free)          Reserved / Maintenance are only
//!    ▼  │                           entered through set_status and
//!   ┌─────────────────────────┐     never by park/unpark.
//!   │ Reserved | Maintenance  │
//!   └─────────────────────────┘
//! ```
//!
//! ## Invariant
//! `occupant` is `Some` iff `status == Occupied`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::vehicle::{Vehicle, VehicleType};

/// Status of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Occupied,
    Reserved,
    Maintenance,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotStatus::Free => "free",
            SlotStatus::Occupied => "occupied",
            SlotStatus::Reserved => "reserved",
            SlotStatus::Maintenance => "under maintenance",
        })
    }
}

/// Parses the statuses an operator may set: `free`, `reserved`,
/// `maintenance`. `Occupied` only comes from parking a vehicle.
impl FromStr for SlotStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(SlotStatus::Free),
            "reserved" => Ok(SlotStatus::Reserved),
            "maintenance" => Ok(SlotStatus::Maintenance),
            _ => Err(ValidationError::NotAllowed {
                field: "slot status".to_string(),
                allowed: vec![
                    "free".to_string(),
                    "reserved".to_string(),
                    "maintenance".to_string(),
                ],
            }),
        }
    }
}

/// A single parking space.
#[derive(Debug, Clone)]
pub struct Slot {
    id: u32,
    floor: u32,
    allowed_type: VehicleType,
    status: SlotStatus,
    occupant: Option<Vehicle>,
    occupied_since: Option<DateTime<Utc>>,
}

impl Slot {
    /// Creates a free slot.
    pub fn new(id: u32, floor: u32, allowed_type: VehicleType) -> Self {
        Slot {
            id,
            floor,
            allowed_type,
            status: SlotStatus::Free,
            occupant: None,
            occupied_since: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn allowed_type(&self) -> VehicleType {
        self.allowed_type
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn occupied_since(&self) -> Option<DateTime<Utc>> {
        self.occupied_since
    }

    pub fn is_occupied(&self) -> bool {
        self.status == SlotStatus::Occupied
    }

    /// True iff the slot is free and typed exactly for `vehicle_type`.
    pub fn is_compatible(&self, vehicle_type: VehicleType) -> bool {
        self.status == SlotStatus::Free && self.allowed_type == vehicle_type
    }

    /// Takes ownership of `vehicle` and marks the slot occupied.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(vehicle)` if the slot is not compatible; the vehicle is
    ///   handed back and the slot is unchanged
    pub fn occupy(&mut self, vehicle: Vehicle, now: DateTime<Utc>) -> Result<(), Vehicle> {
        if !self.is_compatible(vehicle.vehicle_type()) {
            return Err(vehicle);
        }
        self.occupant = Some(vehicle);
        self.status = SlotStatus::Occupied;
        self.occupied_since = Some(now);
        Ok(())
    }

    /// Frees the slot and hands back the vehicle that was in it.
    ///
    /// A no-op returning `None` when the slot is not occupied: a Reserved
    /// or Maintenance slot keeps its status.
    pub fn vacate(&mut self) -> Option<Vehicle> {
        if self.status != SlotStatus::Occupied {
            return None;
        }
        self.status = SlotStatus::Free;
        self.occupied_since = None;
        self.occupant.take()
    }

    /// Moves a non-occupied slot between Free, Reserved and Maintenance.
    ///
    /// ## Returns
    /// - `Ok(previous)` with the previous status
    /// - `Err(current)` if the slot is occupied or `status` is `Occupied`
    ///   (occupation only happens through [`Slot::occupy`])
    pub fn set_status(&mut self, status: SlotStatus) -> Result<SlotStatus, SlotStatus> {
        if self.status == SlotStatus::Occupied || status == SlotStatus::Occupied {
            return Err(self.status);
        }
        Ok(std::mem::replace(&mut self.status, status))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn car(reg: &str) -> Vehicle {
        Vehicle::new(reg, VehicleType::Car)
    }

    #[test]
    fn test_new_slot_is_free() {
        let slot = Slot::new(1, 2, VehicleType::Car);
        assert_eq!(slot.id(), 1);
        assert_eq!(slot.floor(), 2);
        assert_eq!(slot.status(), SlotStatus::Free);
        assert!(slot.occupant().is_none());
        assert!(slot.occupied_since().is_none());
    }

    #[test]
    fn test_compatibility_is_exact() {
        let slot = Slot::new(1, 1, VehicleType::Car);
        assert!(slot.is_compatible(VehicleType::Car));
        assert!(!slot.is_compatible(VehicleType::HandicappedCar));
        assert!(!slot.is_compatible(VehicleType::ElectricCar));
        assert!(!slot.is_compatible(VehicleType::Bike));

        let slot = Slot::new(2, 1, VehicleType::HandicappedCar);
        assert!(!slot.is_compatible(VehicleType::Car));
    }

    #[test]
    fn test_occupy_and_vacate() {
        let now = Utc::now();
        let mut slot = Slot::new(1, 1, VehicleType::Car);

        slot.occupy(car("A1"), now).unwrap();
        assert_eq!(slot.status(), SlotStatus::Occupied);
        assert_eq!(slot.occupant().unwrap().registration(), "A1");
        assert_eq!(slot.occupied_since(), Some(now));
        assert!(!slot.is_compatible(VehicleType::Car));

        let vehicle = slot.vacate().unwrap();
        assert_eq!(vehicle.registration(), "A1");
        assert_eq!(slot.status(), SlotStatus::Free);
        assert!(slot.occupant().is_none());
        assert!(slot.occupied_since().is_none());
    }

    #[test]
    fn test_occupy_rejection_returns_vehicle() {
        let now = Utc::now();
        let mut slot = Slot::new(1, 1, VehicleType::Bike);

        let rejected = slot.occupy(car("A1"), now).unwrap_err();
        assert_eq!(rejected.registration(), "A1");
        assert_eq!(slot.status(), SlotStatus::Free);

        let mut slot = Slot::new(1, 1, VehicleType::Car);
        slot.occupy(car("A1"), now).unwrap();
        let rejected = slot.occupy(car("B2"), now).unwrap_err();
        assert_eq!(rejected.registration(), "B2");
        assert_eq!(slot.occupant().unwrap().registration(), "A1");
    }

    #[test]
    fn test_vacate_free_slot_is_noop() {
        let mut slot = Slot::new(1, 1, VehicleType::Car);
        assert!(slot.vacate().is_none());
        assert_eq!(slot.status(), SlotStatus::Free);

        slot.set_status(SlotStatus::Maintenance).unwrap();
        assert!(slot.vacate().is_none());
        assert_eq!(slot.status(), SlotStatus::Maintenance);
    }

    #[test]
    fn test_set_status() {
        let mut slot = Slot::new(1, 1, VehicleType::Car);

        assert_eq!(slot.set_status(SlotStatus::Reserved), Ok(SlotStatus::Free));
        assert!(!slot.is_compatible(VehicleType::Car));
        assert_eq!(slot.set_status(SlotStatus::Free), Ok(SlotStatus::Reserved));
        assert_eq!(slot.set_status(SlotStatus::Occupied), Err(SlotStatus::Free));

        slot.occupy(car("A1"), Utc::now()).unwrap();
        assert_eq!(
            slot.set_status(SlotStatus::Maintenance),
            Err(SlotStatus::Occupied)
        );
    }

    #[test]
    fn test_parse_operator_status() {
        assert_eq!("free".parse::<SlotStatus>().unwrap(), SlotStatus::Free);
        assert_eq!(" Reserved ".parse::<SlotStatus>().unwrap(), SlotStatus::Reserved);
        assert_eq!(
            "MAINTENANCE".parse::<SlotStatus>().unwrap(),
            SlotStatus::Maintenance
        );
        assert!("occupied".parse::<SlotStatus>().is_err());
        assert!("".parse::<SlotStatus>().is_err());
    }
}
