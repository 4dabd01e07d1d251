//! # Tickets
//!
//! A ticket records one parking session. It copies everything it needs
//! (registration, vehicle type, floor, slot) at creation, so billing works
//! after the vehicle has left the slot.
//!
//! ## Lifecycle
//! ```text
//!   park ──► ┌────────┐  close(now)  ┌────────┐
//!            │ Active │ ───────────► │ Closed │  (terminal)
//!            └────────┘              └────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleType;

/// Microseconds in one hour.
const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Record of one parking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Facility-wide id, strictly increasing, never reused.
    pub id: u64,
    pub registration: String,
    /// Vehicle type at entry; billing uses this, not the slot.
    pub vehicle_type: VehicleType,
    pub floor: u32,
    /// Unique within `floor` only.
    pub slot_id: u32,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Ticket {
    /// Opens a new active ticket.
    pub fn new(
        id: u64,
        registration: impl Into<String>,
        vehicle_type: VehicleType,
        floor: u32,
        slot_id: u32,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id,
            registration: registration.into(),
            vehicle_type,
            floor,
            slot_id,
            entry_time,
            exit_time: None,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Closes the ticket at `now`. Irreversible; closing a closed ticket
    /// keeps the original exit time.
    pub fn close(&mut self, now: DateTime<Utc>) {
        if !self.active {
            return;
        }
        // Exit is never earlier than entry.
        self.exit_time = Some(now.max(self.entry_time));
        self.active = false;
    }

    /// Length of the stay: up to the exit time if closed, else up to `now`.
    /// Never negative.
    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        let end = self.exit_time.unwrap_or(now);
        (end - self.entry_time).max(Duration::zero())
    }

    /// Same as [`Ticket::duration_at`], in fractional hours.
    pub fn duration_hours_at(&self, now: DateTime<Utc>) -> f64 {
        let duration = self.duration_at(now);
        match duration.num_microseconds() {
            Some(micros) => micros as f64 / MICROS_PER_HOUR,
            None => duration.num_seconds() as f64 / 3600.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_at(entry: DateTime<Utc>) -> Ticket {
        Ticket::new(1001, "KA01", VehicleType::Car, 1, 3, entry)
    }

    #[test]
    fn test_new_ticket_is_active() {
        let entry = Utc::now();
        let ticket = ticket_at(entry);
        assert!(ticket.is_active());
        assert_eq!(ticket.exit_time, None);
        assert_eq!(ticket.entry_time, entry);
    }

    #[test]
    fn test_close_is_terminal() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);

        let exit = entry + Duration::hours(2);
        ticket.close(exit);
        assert!(!ticket.is_active());
        assert_eq!(ticket.exit_time, Some(exit));

        ticket.close(exit + Duration::hours(5));
        assert_eq!(ticket.exit_time, Some(exit));
    }

    #[test]
    fn test_duration_open_ticket_uses_now() {
        let entry = Utc::now();
        let ticket = ticket_at(entry);
        let hours = ticket.duration_hours_at(entry + Duration::minutes(90));
        assert!((hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_closed_ticket_is_frozen() {
        let entry = Utc::now();
        let mut ticket = ticket_at(entry);
        ticket.close(entry + Duration::hours(3));

        let later = entry + Duration::hours(10);
        assert_eq!(ticket.duration_at(later), Duration::hours(3));
    }

    #[test]
    fn test_duration_never_negative() {
        let entry = Utc::now();
        let ticket = ticket_at(entry);
        assert_eq!(ticket.duration_at(entry - Duration::hours(1)), Duration::zero());

        let mut ticket = ticket_at(entry);
        ticket.close(entry - Duration::minutes(5));
        assert_eq!(ticket.exit_time, Some(entry));
        assert_eq!(ticket.duration_hours_at(entry), 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let ticket = ticket_at(Utc::now());
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["slotId"], 3);
        assert_eq!(json["vehicleType"], "car");
        assert_eq!(json["active"], true);
        assert!(json["exitTime"].is_null());
    }
}
