//! # Parking Facility
//!
//! The top-level engine. Owns every floor, the active-ticket index, the
//! ticket counter and the revenue total.
//!
//! ## Park / Unpark Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  park(type, reg)                                                        │
//! │    │                                                                    │
//! │    ├── reg already active? ──────────────► Err(AlreadyParked)          │
//! │    │                                                                    │
//! │    ├── for floor in floors (1, 2, …):                                   │
//! │    │     slot = floor.find_available_slot(type)   (first-fit)           │
//! │    │     floor.occupy(slot, vehicle) ok? ──► mint ticket, index it     │
//! │    │                                                                    │
//! │    └── nothing fits ─────────────────────► Err(NoCapacity)             │
//! │                                                                         │
//! │  unpark(reg)                                                            │
//! │    │                                                                    │
//! │    ├── no active ticket? ────────────────► Err(VehicleNotFound)        │
//! │    │                                                                    │
//! │    └── close ticket ─► bill by ticket's vehicle type ─► revenue +=     │
//! │        ─► vacate (floor, slot) ─► drop from index ─► Ok(receipt)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - a registration is in the active index iff its vehicle occupies a slot
//! - occupied slots (all floors) == active tickets <= total slots
//! - ticket ids strictly increase and are never reused
//!
//! ## Concurrency
//! Every method takes `&mut self` and runs to completion. A caller sharing
//! a facility between threads wraps the whole facility in one lock.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::billing::RateTable;
use crate::config::FacilityConfig;
use crate::error::{CoreError, CoreResult};
use crate::floor::Floor;
use crate::money::Money;
use crate::slot::SlotStatus;
use crate::ticket::Ticket;
use crate::vehicle::{Vehicle, VehicleType};
use crate::TICKET_ID_BASE;

// =============================================================================
// Query / Result Types
// =============================================================================

/// Facility-wide occupancy snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStatus {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
}

/// Occupancy of one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorStatus {
    pub floor: u32,
    pub occupied: usize,
    pub total: usize,
}

/// What a successful unpark hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingReceipt {
    /// The closed ticket.
    pub ticket: Ticket,
    pub billed_hours: i64,
    pub hourly_rate: Money,
    /// Amount charged for the session, cap applied.
    pub charge: Money,
}

// =============================================================================
// Parking Facility
// =============================================================================

/// In-memory parking facility.
#[derive(Debug, Clone)]
pub struct ParkingFacility {
    floors: Vec<Floor>,
    active_tickets: HashMap<String, Ticket>,
    ticket_counter: u64,
    total_revenue: Money,
    rates: RateTable,
}

impl ParkingFacility {
    /// Builds a facility with standard rates.
    pub fn new(config: FacilityConfig) -> CoreResult<Self> {
        Self::with_rates(config, RateTable::default())
    }

    /// Builds a facility billing through `rates`.
    pub fn with_rates(config: FacilityConfig, rates: RateTable) -> CoreResult<Self> {
        config.validate()?;

        let floors: Vec<Floor> = (1..=config.floor_count)
            .map(|number| Floor::new(number, &config))
            .collect();

        info!(
            floors = config.floor_count,
            slots_per_floor = config.slots_per_floor(),
            "parking facility created"
        );

        Ok(ParkingFacility {
            floors,
            active_tickets: HashMap::new(),
            ticket_counter: TICKET_ID_BASE,
            total_revenue: Money::zero(),
            rates,
        })
    }

    // -------------------------------------------------------------------------
    // Park
    // -------------------------------------------------------------------------

    /// Parks a vehicle now. See [`ParkingFacility::park_at`].
    pub fn park(&mut self, vehicle_type: VehicleType, registration: &str) -> CoreResult<Ticket> {
        self.park_at(vehicle_type, registration, Utc::now())
    }

    /// Parks a vehicle of `vehicle_type` at time `now`.
    ///
    /// Scans floors in order and takes the first compatible free slot.
    /// The registration is used as given; callers validate it.
    ///
    /// ## Errors
    /// - [`CoreError::AlreadyParked`] if `registration` has an active ticket
    /// - [`CoreError::NoCapacity`] if no floor has a free slot of this type
    ///
    /// On error nothing changes.
    pub fn park_at(
        &mut self,
        vehicle_type: VehicleType,
        registration: &str,
        now: DateTime<Utc>,
    ) -> CoreResult<Ticket> {
        if let Some(existing) = self.active_tickets.get(registration) {
            warn!(
                registration,
                ticket_id = existing.id,
                "park rejected: vehicle already parked"
            );
            return Err(CoreError::AlreadyParked {
                registration: registration.to_string(),
                ticket_id: existing.id,
            });
        }

        let mut vehicle = Vehicle::new(registration, vehicle_type);

        for floor in &mut self.floors {
            let Some(slot_id) = floor.find_available_slot(vehicle_type).map(|s| s.id()) else {
                continue;
            };
            match floor.occupy(slot_id, vehicle, now) {
                Ok(()) => {
                    self.ticket_counter += 1;
                    let ticket = Ticket::new(
                        self.ticket_counter,
                        registration,
                        vehicle_type,
                        floor.number(),
                        slot_id,
                        now,
                    );
                    info!(
                        registration,
                        ticket_id = ticket.id,
                        floor = ticket.floor,
                        slot_id = ticket.slot_id,
                        %vehicle_type,
                        "vehicle parked"
                    );
                    self.active_tickets
                        .insert(registration.to_string(), ticket.clone());
                    return Ok(ticket);
                }
                Err(returned) => vehicle = returned,
            }
        }

        warn!(registration, %vehicle_type, "park rejected: no capacity");
        Err(CoreError::NoCapacity { vehicle_type })
    }

    // -------------------------------------------------------------------------
    // Unpark
    // -------------------------------------------------------------------------

    /// Unparks a vehicle now. See [`ParkingFacility::unpark_at`].
    pub fn unpark(&mut self, registration: &str) -> CoreResult<ParkingReceipt> {
        self.unpark_at(registration, Utc::now())
    }

    /// Ends the session of `registration` at time `now`, bills it and frees
    /// its slot.
    ///
    /// Billing uses the vehicle type stored on the ticket.
    ///
    /// ## Errors
    /// - [`CoreError::VehicleNotFound`] if there is no active ticket;
    ///   nothing changes
    pub fn unpark_at(&mut self, registration: &str, now: DateTime<Utc>) -> CoreResult<ParkingReceipt> {
        let Some(mut ticket) = self.active_tickets.remove(registration) else {
            warn!(registration, "unpark rejected: vehicle not found");
            return Err(CoreError::VehicleNotFound(registration.to_string()));
        };

        ticket.close(now);
        let charge = self
            .rates
            .charge(ticket.vehicle_type, ticket.duration_at(now));
        self.total_revenue += charge.amount;

        let vacated = self
            .floors
            .iter_mut()
            .find(|f| f.number() == ticket.floor)
            .and_then(|f| f.vacate_slot(ticket.slot_id));
        if vacated.is_none() {
            // The index and the slots disagree; the ticket is still billed.
            warn!(
                registration,
                floor = ticket.floor,
                slot_id = ticket.slot_id,
                "ticket slot was not occupied"
            );
        }

        info!(
            registration,
            ticket_id = ticket.id,
            billed_hours = charge.billed_hours,
            charge = %charge.amount,
            "vehicle unparked"
        );

        Ok(ParkingReceipt {
            ticket,
            billed_hours: charge.billed_hours,
            hourly_rate: charge.hourly_rate,
            charge: charge.amount,
        })
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Total, occupied and available slots across all floors.
    pub fn status(&self) -> OccupancyStatus {
        let (occupied, total) = self
            .floors
            .iter()
            .map(Floor::occupancy_counts)
            .fold((0, 0), |(o, t), (fo, ft)| (o + fo, t + ft));
        OccupancyStatus {
            total,
            occupied,
            available: total - occupied,
        }
    }

    /// Per-floor occupancy, in floor order.
    pub fn floor_status(&self) -> Vec<FloorStatus> {
        self.floors
            .iter()
            .map(|f| {
                let (occupied, total) = f.occupancy_counts();
                FloorStatus {
                    floor: f.number(),
                    occupied,
                    total,
                }
            })
            .collect()
    }

    /// Free slots that would accept `vehicle_type`, across all floors.
    pub fn available_for(&self, vehicle_type: VehicleType) -> usize {
        self.floors.iter().map(|f| f.available_for(vehicle_type)).sum()
    }

    /// Sum of every charge billed so far.
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// Number of tickets issued over the facility's lifetime.
    pub fn tickets_issued(&self) -> u64 {
        self.ticket_counter - TICKET_ID_BASE
    }

    pub fn active_ticket(&self, registration: &str) -> Option<&Ticket> {
        self.active_tickets.get(registration)
    }

    /// Active tickets ordered by ticket id.
    pub fn active_tickets(&self) -> Vec<&Ticket> {
        let mut tickets: Vec<&Ticket> = self.active_tickets.values().collect();
        tickets.sort_by_key(|t| t.id);
        tickets
    }

    /// `(floor, slot_id)` of a parked vehicle.
    pub fn locate(&self, registration: &str) -> Option<(u32, u32)> {
        self.active_tickets
            .get(registration)
            .map(|t| (t.floor, t.slot_id))
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    // -------------------------------------------------------------------------
    // Administration
    // -------------------------------------------------------------------------

    /// Moves a non-occupied slot between Free, Reserved and Maintenance.
    ///
    /// Park skips Reserved and Maintenance slots. Returns the previous status.
    ///
    /// ## Errors
    /// - [`CoreError::SlotNotFound`] for an unknown floor or slot
    /// - [`CoreError::SlotBusy`] if the slot is occupied or `status` is
    ///   `Occupied`
    pub fn set_slot_status(
        &mut self,
        floor: u32,
        slot_id: u32,
        status: SlotStatus,
    ) -> CoreResult<SlotStatus> {
        let result = self
            .floors
            .iter_mut()
            .find(|f| f.number() == floor)
            .and_then(|f| f.set_slot_status(slot_id, status))
            .ok_or(CoreError::SlotNotFound { floor, slot_id })?;

        match result {
            Ok(previous) => {
                debug!(floor, slot_id, %previous, %status, "slot status changed");
                Ok(previous)
            }
            Err(current) => Err(CoreError::SlotBusy {
                floor,
                slot_id,
                status: current,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn facility(floors: u32, cars: u32, bikes: u32) -> ParkingFacility {
        ParkingFacility::new(FacilityConfig::new(floors, cars, bikes)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = ParkingFacility::new(FacilityConfig::new(0, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_park_issues_increasing_ticket_ids() {
        let mut facility = facility(1, 3, 0);
        let now = Utc::now();

        let a = facility.park_at(VehicleType::Car, "A", now).unwrap();
        let b = facility.park_at(VehicleType::Car, "B", now).unwrap();
        assert_eq!(a.id, TICKET_ID_BASE + 1);
        assert_eq!(b.id, TICKET_ID_BASE + 2);

        facility.unpark_at("A", now).unwrap();
        let c = facility.park_at(VehicleType::Car, "C", now).unwrap();
        assert_eq!(c.id, TICKET_ID_BASE + 3);
        assert_eq!(c.slot_id, 1);
        assert_eq!(facility.tickets_issued(), 3);
    }

    #[test]
    fn test_park_spills_to_next_floor() {
        let mut facility = facility(2, 1, 0);
        let now = Utc::now();

        let a = facility.park_at(VehicleType::Car, "A", now).unwrap();
        let b = facility.park_at(VehicleType::Car, "B", now).unwrap();
        assert_eq!((a.floor, a.slot_id), (1, 1));
        assert_eq!((b.floor, b.slot_id), (2, 1));
        assert_eq!(facility.locate("B"), Some((2, 1)));
    }

    #[test]
    fn test_duplicate_park_is_rejected() {
        let mut facility = facility(1, 2, 0);
        let now = Utc::now();

        let first = facility.park_at(VehicleType::Car, "A", now).unwrap();
        let err = facility.park_at(VehicleType::Car, "A", now).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AlreadyParked { ref registration, ticket_id }
                if registration == "A" && ticket_id == first.id
        ));

        // No second slot claimed, original ticket intact
        assert_eq!(facility.status().occupied, 1);
        assert_eq!(facility.active_ticket("A"), Some(&first));
        assert_eq!(facility.tickets_issued(), 1);
    }

    #[test]
    fn test_no_capacity_changes_nothing() {
        let mut facility = facility(1, 1, 0);
        let now = Utc::now();

        facility.park_at(VehicleType::Car, "A", now).unwrap();
        let err = facility.park_at(VehicleType::Car, "B", now).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NoCapacity {
                vehicle_type: VehicleType::Car
            }
        ));
        assert_eq!(facility.status().occupied, 1);
        assert!(facility.active_ticket("B").is_none());
        assert_eq!(facility.tickets_issued(), 1);
    }

    #[test]
    fn test_unpark_bills_and_frees_slot() {
        let mut facility = facility(1, 1, 1);
        let entry = Utc::now();

        facility.park_at(VehicleType::Bike, "B1", entry).unwrap();
        let receipt = facility
            .unpark_at("B1", entry + Duration::minutes(125))
            .unwrap();

        assert_eq!(receipt.billed_hours, 3);
        assert_eq!(receipt.hourly_rate, Money::from_cents(1000));
        assert_eq!(receipt.charge, Money::from_cents(3000));
        assert!(!receipt.ticket.is_active());
        assert_eq!(receipt.ticket.exit_time, Some(entry + Duration::minutes(125)));

        assert_eq!(facility.total_revenue(), Money::from_cents(3000));
        assert_eq!(facility.status().occupied, 0);
        assert!(facility.active_ticket("B1").is_none());
        assert!(facility.floors()[0].slot(2).unwrap().occupant().is_none());
    }

    #[test]
    fn test_unpark_unknown_registration() {
        let mut facility = facility(1, 1, 0);
        let err = facility.unpark("NOPE").unwrap_err();
        assert!(matches!(err, CoreError::VehicleNotFound(ref r) if r == "NOPE"));
        assert!(facility.total_revenue().is_zero());
    }

    #[test]
    fn test_revenue_accumulates() {
        let mut facility = facility(1, 2, 1);
        let entry = Utc::now();

        facility.park_at(VehicleType::Car, "A", entry).unwrap();
        facility.park_at(VehicleType::Bike, "B", entry).unwrap();
        facility.unpark_at("A", entry + Duration::hours(2)).unwrap(); // $40
        facility.unpark_at("B", entry + Duration::hours(30)).unwrap(); // cap $200

        assert_eq!(facility.total_revenue(), Money::from_cents(24_000));
    }

    #[test]
    fn test_custom_rates_are_used() {
        let rates = RateTable {
            car: Money::from_cents(250),
            ..RateTable::default()
        };
        let mut facility =
            ParkingFacility::with_rates(FacilityConfig::new(1, 1, 0), rates).unwrap();
        let entry = Utc::now();

        facility.park_at(VehicleType::Car, "A", entry).unwrap();
        let receipt = facility.unpark_at("A", entry + Duration::hours(4)).unwrap();
        assert_eq!(receipt.charge, Money::from_cents(1000));
    }

    #[test]
    fn test_status_and_floor_status() {
        let mut facility = facility(2, 2, 1);
        let now = Utc::now();
        facility.park_at(VehicleType::Car, "A", now).unwrap();
        facility.park_at(VehicleType::Car, "B", now).unwrap();
        facility.park_at(VehicleType::Car, "C", now).unwrap();

        assert_eq!(
            facility.status(),
            OccupancyStatus {
                total: 6,
                occupied: 3,
                available: 3
            }
        );
        assert_eq!(
            facility.floor_status(),
            vec![
                FloorStatus { floor: 1, occupied: 2, total: 3 },
                FloorStatus { floor: 2, occupied: 1, total: 3 },
            ]
        );
        assert_eq!(facility.available_for(VehicleType::Car), 1);
        assert_eq!(facility.available_for(VehicleType::Bike), 2);
    }

    #[test]
    fn test_active_tickets_sorted_by_id() {
        let mut facility = facility(1, 5, 0);
        let now = Utc::now();
        for reg in ["Z", "M", "A"] {
            facility.park_at(VehicleType::Car, reg, now).unwrap();
        }
        let regs: Vec<&str> = facility
            .active_tickets()
            .iter()
            .map(|t| t.registration.as_str())
            .collect();
        assert_eq!(regs, vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_set_slot_status() {
        let mut facility = facility(1, 2, 0);
        let now = Utc::now();

        assert_eq!(
            facility.set_slot_status(1, 1, SlotStatus::Maintenance).unwrap(),
            SlotStatus::Free
        );
        let ticket = facility.park_at(VehicleType::Car, "A", now).unwrap();
        assert_eq!(ticket.slot_id, 2);

        assert!(matches!(
            facility.set_slot_status(1, 2, SlotStatus::Reserved),
            Err(CoreError::SlotBusy {
                status: SlotStatus::Occupied,
                ..
            })
        ));
        assert!(matches!(
            facility.set_slot_status(1, 1, SlotStatus::Occupied),
            Err(CoreError::SlotBusy { .. })
        ));
        assert!(matches!(
            facility.set_slot_status(3, 1, SlotStatus::Free),
            Err(CoreError::SlotNotFound { floor: 3, slot_id: 1 })
        ));

        // Maintenance slot is not available, so the lot is full for cars
        assert!(facility.park_at(VehicleType::Car, "B", now).is_err());
        facility.set_slot_status(1, 1, SlotStatus::Free).unwrap();
        assert_eq!(facility.park_at(VehicleType::Car, "B", now).unwrap().slot_id, 1);
    }
}
