//! # Billing
//!
//! Turns a parking duration into a charge.
//!
//! ## Charge Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  billed_hours = ceil(duration in hours)                                 │
//! │  charge       = min(billed_hours × hourly_rate(vehicle type), cap)      │
//! │                                                                         │
//! │  duration = 0           → 0 hours  → $0.00                             │
//! │  duration = 1 second    → 1 hour   → 1 × rate                          │
//! │  duration = 2h 30m      → 3 hours  → 3 × rate                          │
//! │  duration = 3 days      → 72 hours → cap ($200.00)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rates are not process-wide globals: every facility carries its own
//! immutable [`RateTable`], fixed at construction.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::vehicle::VehicleType;
use crate::DAILY_MAX_CENTS;

/// Microseconds in one billed hour.
const MICROS_PER_HOUR: i64 = 3_600_000_000;

// =============================================================================
// Rate Table
// =============================================================================

/// Hourly rate per vehicle type, plus the per-session cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub car: Money,
    pub bike: Money,
    pub electric_car: Money,
    pub handicapped_car: Money,
    pub handicapped_bike: Money,
    /// Maximum charge for one session regardless of duration.
    pub daily_cap: Money,
}

impl Default for RateTable {
    /// Standard rates with a $200.00 cap.
    fn default() -> Self {
        RateTable {
            car: VehicleType::Car.standard_hourly_rate(),
            bike: VehicleType::Bike.standard_hourly_rate(),
            electric_car: VehicleType::ElectricCar.standard_hourly_rate(),
            handicapped_car: VehicleType::HandicappedCar.standard_hourly_rate(),
            handicapped_bike: VehicleType::HandicappedBike.standard_hourly_rate(),
            daily_cap: Money::from_cents(DAILY_MAX_CENTS),
        }
    }
}

impl RateTable {
    /// Hourly rate for `vehicle_type`.
    pub fn rate_for(&self, vehicle_type: VehicleType) -> Money {
        match vehicle_type {
            VehicleType::Car => self.car,
            VehicleType::Bike => self.bike,
            VehicleType::ElectricCar => self.electric_car,
            VehicleType::HandicappedCar => self.handicapped_car,
            VehicleType::HandicappedBike => self.handicapped_bike,
        }
    }

    /// Bills a stay of `duration` for a vehicle of `vehicle_type`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Duration;
    /// use parkade_core::{Money, RateTable, VehicleType};
    ///
    /// let rates = RateTable::default();
    /// let charge = rates.charge(VehicleType::ElectricCar, Duration::hours(3));
    /// assert_eq!(charge.billed_hours, 3);
    /// assert_eq!(charge.amount, Money::from_cents(4800)); // $48.00
    /// ```
    pub fn charge(&self, vehicle_type: VehicleType, duration: Duration) -> Charge {
        let billed_hours = billable_hours(duration);
        let hourly_rate = self.rate_for(vehicle_type);
        let amount = hourly_rate.multiply_hours(billed_hours).min(self.daily_cap);
        Charge {
            billed_hours,
            hourly_rate,
            amount,
        }
    }
}

// =============================================================================
// Charge
// =============================================================================

/// Result of billing one stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub billed_hours: i64,
    pub hourly_rate: Money,
    /// What the customer pays, cap applied.
    pub amount: Money,
}

/// Rounds a duration up to whole hours. Zero or negative bills zero.
pub fn billable_hours(duration: Duration) -> i64 {
    let micros = match duration.num_microseconds() {
        Some(micros) => micros,
        // Only ~292k years overflow microseconds; whole seconds are plenty.
        None => {
            let secs = duration.num_seconds();
            return if secs <= 0 { 0 } else { (secs - 1) / 3600 + 1 };
        }
    };
    if micros <= 0 {
        return 0;
    }
    (micros - 1) / MICROS_PER_HOUR + 1
}

// =============================================================================
// Unit Tests
// =============================================================================
