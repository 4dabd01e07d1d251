//! # Vehicles
//!
//! The closed set of vehicle categories the facility serves, and the
//! `Vehicle` value that occupies a slot.
//!
//! ## Standard Rates
//! ```text
//! ┌──────────────────┬────────────┬──────────────────────────────┐
//! │ VehicleType      │ Rate / h   │ Derivation                   │
//! ├──────────────────┼────────────┼──────────────────────────────┤
//! │ Car              │ $20.00     │ base car rate                │
//! │ Bike             │ $10.00     │ base bike rate               │
//! │ ElectricCar      │ $16.00     │ car rate - 20%               │
//! │ HandicappedCar   │ $10.00     │ car rate - 50%               │
//! │ HandicappedBike  │  $5.00     │ bike rate - 50%              │
//! └──────────────────┴────────────┴──────────────────────────────┘
//! ```
//!
//! A facility bills through its own [`RateTable`](crate::billing::RateTable),
//! which defaults to these values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

/// Base hourly rate for cars.
pub const CAR_HOURLY_RATE: Money = Money::from_cents(2000);

/// Base hourly rate for bikes.
pub const BIKE_HOURLY_RATE: Money = Money::from_cents(1000);

/// Electric car discount in basis points (20%).
pub const ELECTRIC_DISCOUNT_BPS: u32 = 2000;

/// Handicapped discount in basis points (50%).
pub const HANDICAPPED_DISCOUNT_BPS: u32 = 5000;

// =============================================================================
// Vehicle Type
// =============================================================================

/// Vehicle category. Decides both the billing rate and which slots fit.
///
/// Slot matching is exact: a `HandicappedCar` only fits a slot typed
/// `HandicappedCar`, never a plain `Car` slot, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Bike,
    ElectricCar,
    HandicappedCar,
    HandicappedBike,
}

impl VehicleType {
    /// Every vehicle type, in slot-layout order.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Car,
        VehicleType::Bike,
        VehicleType::ElectricCar,
        VehicleType::HandicappedCar,
        VehicleType::HandicappedBike,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Bike => "Bike",
            VehicleType::ElectricCar => "Electric Car",
            VehicleType::HandicappedCar => "Handicapped Car",
            VehicleType::HandicappedBike => "Handicapped Bike",
        }
    }

    /// Standard hourly rate for this type.
    pub fn standard_hourly_rate(&self) -> Money {
        match self {
            VehicleType::Car => CAR_HOURLY_RATE,
            VehicleType::Bike => BIKE_HOURLY_RATE,
            VehicleType::ElectricCar => {
                CAR_HOURLY_RATE.apply_percentage_discount(ELECTRIC_DISCOUNT_BPS)
            }
            VehicleType::HandicappedCar => {
                CAR_HOURLY_RATE.apply_percentage_discount(HANDICAPPED_DISCOUNT_BPS)
            }
            VehicleType::HandicappedBike => {
                BIKE_HOURLY_RATE.apply_percentage_discount(HANDICAPPED_DISCOUNT_BPS)
            }
        }
    }

    /// Maps a 1-based menu selector to a type.
    ///
    /// ## Example
    /// ```rust
    /// use parkade_core::VehicleType;
    ///
    /// assert_eq!(VehicleType::from_selector(3), Some(VehicleType::ElectricCar));
    /// assert_eq!(VehicleType::from_selector(0), None);
    /// ```
    pub fn from_selector(selector: u32) -> Option<Self> {
        let index = usize::try_from(selector).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "car" => Ok(VehicleType::Car),
            "bike" => Ok(VehicleType::Bike),
            "ev" | "electric" | "electric-car" => Ok(VehicleType::ElectricCar),
            "handicapped-car" => Ok(VehicleType::HandicappedCar),
            "handicapped-bike" => Ok(VehicleType::HandicappedBike),
            _ => Err(ValidationError::NotAllowed {
                field: "vehicle type".to_string(),
                allowed: vec![
                    "car".to_string(),
                    "bike".to_string(),
                    "ev".to_string(),
                    "handicapped-car".to_string(),
                    "handicapped-bike".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle, identified by its registration. Immutable once created.
///
/// A `Vehicle` is owned by the caller until it is parked, then by the
/// slot it occupies, and is handed back when the slot is vacated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    registration: String,
    vehicle_type: VehicleType,
}

impl Vehicle {
    pub fn new(registration: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Vehicle {
            registration: registration.into(),
            vehicle_type,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Standard hourly rate for this vehicle's type.
    pub fn hourly_rate(&self) -> Money {
        self.vehicle_type.standard_hourly_rate()
    }

    pub fn type_label(&self) -> &'static str {
        self.vehicle_type.label()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        let cents: Vec<i64> = VehicleType::ALL
            .iter()
            .map(|t| t.standard_hourly_rate().cents())
            .collect();
        assert_eq!(cents, vec![2000, 1000, 1600, 1000, 500]);
    }

    #[test]
    fn test_vehicle_accessors() {
        let vehicle = Vehicle::new("EV-42", VehicleType::ElectricCar);
        assert_eq!(vehicle.registration(), "EV-42");
        assert_eq!(vehicle.vehicle_type(), VehicleType::ElectricCar);
        assert_eq!(vehicle.hourly_rate(), Money::from_cents(1600));
        assert_eq!(vehicle.type_label(), "Electric Car");
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(VehicleType::from_selector(1), Some(VehicleType::Car));
        assert_eq!(VehicleType::from_selector(2), Some(VehicleType::Bike));
        assert_eq!(
            VehicleType::from_selector(5),
            Some(VehicleType::HandicappedBike)
        );
        assert_eq!(VehicleType::from_selector(0), None);
        assert_eq!(VehicleType::from_selector(6), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("BIKE".parse::<VehicleType>().unwrap(), VehicleType::Bike);
        assert_eq!("ev".parse::<VehicleType>().unwrap(), VehicleType::ElectricCar);
        assert_eq!(
            "handicapped_car".parse::<VehicleType>().unwrap(),
            VehicleType::HandicappedCar
        );
        assert_eq!(
            "Handicapped Bike".parse::<VehicleType>().unwrap(),
            VehicleType::HandicappedBike
        );
        assert!("truck".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&VehicleType::HandicappedCar).unwrap();
        assert_eq!(json, "\"handicapped_car\"");
    }
}
