//! # Facility State
//!
//! Owns the one `ParkingFacility` of the process.
//!
//! ## Thread Safety
//! The facility is wrapped in `Arc<Mutex<T>>` so that every park, unpark
//! and status call runs against the whole facility exclusively. The menu
//! is single-threaded today; the lock is what keeps the engine's
//! invariants intact if commands are ever served concurrently.

use std::sync::{Arc, Mutex};

use parkade_core::{FacilityConfig, ParkingFacility};

use crate::error::ApiError;

/// Shared handle to the facility.
#[derive(Debug, Clone)]
pub struct FacilityState {
    facility: Arc<Mutex<ParkingFacility>>,
}

impl FacilityState {
    /// Builds the facility for `config`.
    ///
    /// ## Errors
    /// - `CONFIG_ERROR` if the layout has no floors or no slots
    pub fn new(config: FacilityConfig) -> Result<Self, ApiError> {
        Ok(Self::from_facility(ParkingFacility::new(config)?))
    }

    pub fn from_facility(facility: ParkingFacility) -> Self {
        FacilityState {
            facility: Arc::new(Mutex::new(facility)),
        }
    }

    /// Executes a function with read access to the facility.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let status = state.with_facility(|f| f.status());
    /// ```
    pub fn with_facility<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ParkingFacility) -> R,
    {
        let facility = self.facility.lock().expect("Facility mutex poisoned");
        f(&facility)
    }

    /// Executes a function with write access to the facility.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_facility_mut(|f| f.park(VehicleType::Car, "KA01"))?;
    /// ```
    pub fn with_facility_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ParkingFacility) -> R,
    {
        let mut facility = self.facility.lock().expect("Facility mutex poisoned");
        f(&mut facility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use parkade_core::VehicleType;
    use std::thread;

    #[test]
    fn test_state_rejects_invalid_config() {
        let err = FacilityState::new(FacilityConfig::new(0, 1, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(
            err.message,
            "Invalid facility configuration: facility must have at least one floor"
        );
    }

    #[test]
    fn test_concurrent_parks_keep_invariants() {
        let state = FacilityState::new(FacilityConfig::new(2, 5, 0)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let state = state.clone();
                thread::spawn(move || {
                    for i in 0..5 {
                        let reg = format!("T{t}V{i}");
                        let _ = state.with_facility_mut(|f| f.park(VehicleType::Car, &reg));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        state.with_facility(|f| {
            let status = f.status();
            assert_eq!(status.occupied, 10);
            assert_eq!(status.available, 0);
            assert_eq!(f.active_tickets().len(), 10);
            assert_eq!(f.tickets_issued(), 10);
        });
    }
}
