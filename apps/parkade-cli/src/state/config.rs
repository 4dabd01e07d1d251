//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--floors`, `--car-slots`, …)
//! 2. Environment variables (`PARKADE_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use parkade_core::{FacilityConfig, Money};
use std::str::FromStr;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Facility layout handed to the engine
    pub facility: FacilityConfig,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for AppConfig {
    /// Default layout (3 floors × 10 car + 5 bike slots), USD display.
    fn default() -> Self {
        AppConfig {
            facility: FacilityConfig::default(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARKADE_FLOORS`: number of floors
    /// - `PARKADE_CAR_SLOTS`: car slots per floor
    /// - `PARKADE_BIKE_SLOTS`: bike slots per floor
    /// - `PARKADE_EV_SLOTS`: electric car slots per floor
    /// - `PARKADE_HANDICAPPED_CAR_SLOTS`: handicapped car slots per floor
    /// - `PARKADE_HANDICAPPED_BIKE_SLOTS`: handicapped bike slots per floor
    /// - `PARKADE_CURRENCY_SYMBOL`: display symbol
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        let facility = &mut config.facility;

        read_var(&lookup, "PARKADE_FLOORS", &mut facility.floor_count)?;
        read_var(&lookup, "PARKADE_CAR_SLOTS", &mut facility.car_slots_per_floor)?;
        read_var(&lookup, "PARKADE_BIKE_SLOTS", &mut facility.bike_slots_per_floor)?;
        read_var(&lookup, "PARKADE_EV_SLOTS", &mut facility.electric_slots_per_floor)?;
        read_var(
            &lookup,
            "PARKADE_HANDICAPPED_CAR_SLOTS",
            &mut facility.handicapped_car_slots_per_floor,
        )?;
        read_var(
            &lookup,
            "PARKADE_HANDICAPPED_BIKE_SLOTS",
            &mut facility.handicapped_bike_slots_per_floor,
        )?;

        if let Some(symbol) = lookup("PARKADE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use parkade_cli::state::AppConfig;
    /// use parkade_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(4800)), "$48.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

/// Overwrites `target` with the parsed value of `key`, if set.
fn read_var<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        *target = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
        })?;
    }
    Ok(())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
