//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Parkade                                │
//! │                                                                         │
//! │  Menu                          Commands / Engine                        │
//! │  ────                          ─────────────────                        │
//! │                                                                         │
//! │  "2. Unpark" + "KA01"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError ───────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Engine Error? ─── CoreError::VehicleNotFound ── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu prints: "Error: Vehicle not found: KA01"                          │
//! │  --json prints: {"code":"NOT_FOUND","message":"Vehicle not found: KA01"}│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parkade_core::{CoreError, ValidationError};
use serde::Serialize;

/// Error returned from CLI commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Vehicle or slot not found
    NotFound,

    /// No free slot of the requested type
    NoCapacity,

    /// Registration already holds an active ticket
    AlreadyParked,

    /// Input validation failed
    ValidationError,

    /// Business rule prevented the operation (e.g. slot is occupied)
    BusinessLogic,

    /// Facility layout rejected at startup
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts engine errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VehicleNotFound(registration) => {
                ApiError::not_found("Vehicle", &registration)
            }
            CoreError::NoCapacity { vehicle_type } => ApiError::new(
                ErrorCode::NoCapacity,
                format!("No slots available for {}", vehicle_type),
            ),
            CoreError::AlreadyParked {
                registration,
                ticket_id,
            } => ApiError::new(
                ErrorCode::AlreadyParked,
                format!(
                    "Vehicle {} is already parked (ticket {})",
                    registration, ticket_id
                ),
            ),
            CoreError::SlotNotFound { floor, slot_id } => {
                ApiError::not_found("Slot", &format!("{}/{}", floor, slot_id))
            }
            err @ CoreError::SlotBusy { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::InvalidConfig(reason) => {
                tracing::error!("Invalid facility configuration: {}", reason);
                ApiError::new(
                    ErrorCode::ConfigError,
                    format!("Invalid facility configuration: {}", reason),
                )
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
