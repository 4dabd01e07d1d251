//! # Interactive Menu
//!
//! The text front end: reads choices line by line, calls the commands,
//! renders their results.
//!
//! ```text
//! ===== SMART PARKING SYSTEM =====
//! 1. Park Vehicle
//! 2. Unpark Vehicle
//! 3. View Status
//! 4. Active Tickets
//! 5. Revenue
//! 6. Slot Status
//! 7. Exit
//! Select option:
//! ```
//!
//! The menu is generic over its reader and writer so tests can script a
//! whole session in memory. End of input behaves like "Exit"; a line
//! that is not valid UTF-8 is read lossily and rejected like any other
//! bad input, so the session and the parked vehicles survive it.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local, Utc};
use parkade_core::validation::validate_vehicle_selector;
use parkade_core::{Money, SlotStatus, VehicleType};
use serde::Serialize;
use tracing::debug;

use crate::commands::{parking, slots, status};
use crate::error::ApiError;
use crate::state::{AppConfig, FacilityState};

/// Timestamp format for tickets and receipts.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One interactive session.
pub struct Menu<'a, R, W> {
    state: &'a FacilityState,
    config: &'a AppConfig,
    input: R,
    output: W,
    json: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(state: &'a FacilityState, config: &'a AppConfig, input: R, output: W) -> Self {
        Menu {
            state,
            config,
            input,
            output,
            json: false,
        }
    }

    /// Renders results as JSON instead of text.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Runs until the user exits or input ends.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Smart Parking System")?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            debug!(%choice, "menu choice");

            match choice.as_str() {
                "1" => self.park()?,
                "2" => self.unpark()?,
                "3" => self.show_status()?,
                "4" => self.show_active_tickets()?,
                "5" => self.show_revenue()?,
                "6" => self.change_slot_status()?,
                "7" => break,
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "\n===== SMART PARKING SYSTEM =====\n\
             1. Park Vehicle\n\
             2. Unpark Vehicle\n\
             3. View Status\n\
             4. Active Tickets\n\
             5. Revenue\n\
             6. Slot Status\n\
             7. Exit\n\
             Select option: "
        )?;
        self.output.flush()
    }

    /// Next trimmed input line; `None` at end of input.
    ///
    /// Invalid UTF-8 becomes U+FFFD, which no menu choice or registration
    /// accepts.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    fn park(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- PARK VEHICLE ---")?;
        let rates = self.state.with_facility(|f| f.rates().clone());
        for (index, vehicle_type) in VehicleType::ALL.iter().enumerate() {
            let rate = self.config.format_currency(rates.rate_for(*vehicle_type));
            writeln!(self.output, "{}. {} ({}/hr)", index + 1, vehicle_type, rate)?;
        }

        let Some(selector) = self.prompt("Select type: ")? else {
            return Ok(());
        };
        let vehicle_type = match selector
            .parse::<i64>()
            .map_err(|_| ApiError::validation("vehicle type must be a number"))
            .and_then(|n| validate_vehicle_selector(n).map_err(ApiError::from))
        {
            Ok(vehicle_type) => vehicle_type,
            Err(err) => return self.render_error(&err),
        };

        let Some(registration) = self.prompt("Enter Registration Number: ")? else {
            return Ok(());
        };

        match parking::park_vehicle(self.state, vehicle_type, &registration) {
            Ok(ticket) if self.json => self.render_json(&ticket),
            Ok(ticket) => {
                writeln!(
                    self.output,
                    "Vehicle parked. Ticket ID: {}\nFloor {}, Slot {}\nEntry time: {}",
                    ticket.id,
                    ticket.floor,
                    ticket.slot_id,
                    format_time(ticket.entry_time)
                )
            }
            Err(err) => self.render_error(&err),
        }
    }

    fn unpark(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- UNPARK VEHICLE ---")?;
        let Some(registration) = self.prompt("Enter Registration Number: ")? else {
            return Ok(());
        };

        match parking::unpark_vehicle(self.state, &registration) {
            Ok(receipt) if self.json => self.render_json(&receipt),
            Ok(receipt) => {
                let exit = receipt.ticket.exit_time.unwrap_or_else(Utc::now);
                writeln!(
                    self.output,
                    "Ticket ID: {}\nEntry time: {}\nExit time: {}\n\
                     Billed hours: {} at {}/hr\nParking charge: {}",
                    receipt.ticket.id,
                    format_time(receipt.ticket.entry_time),
                    format_time(exit),
                    receipt.billed_hours,
                    self.config.format_currency(receipt.hourly_rate),
                    self.config.format_currency(receipt.charge)
                )
            }
            Err(err) => self.render_error(&err),
        }
    }

    fn change_slot_status(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- SLOT STATUS ---")?;
        let Some(floor) = self.prompt("Floor: ")? else {
            return Ok(());
        };
        let Some(slot_id) = self.prompt("Slot: ")? else {
            return Ok(());
        };
        let Some(new_status) = self.prompt("New status (free/reserved/maintenance): ")? else {
            return Ok(());
        };

        let request = parse_number(&floor, "floor").and_then(|floor| {
            let slot_id = parse_number(&slot_id, "slot")?;
            let status = new_status.parse::<SlotStatus>()?;
            Ok((floor, slot_id, status))
        });
        let result = request.and_then(|(floor, slot_id, status)| {
            slots::set_slot_status(self.state, floor, slot_id, status)
        });

        match result {
            Ok(change) if self.json => self.render_json(&change),
            Ok(change) => writeln!(
                self.output,
                "Slot {} on floor {} is now {} (was {})",
                change.slot_id, change.floor, change.status, change.previous
            ),
            Err(err) => self.render_error(&err),
        }
    }

    fn show_status(&mut self) -> io::Result<()> {
        let status = status::get_status(self.state);
        if self.json {
            return self.render_json(&status);
        }

        writeln!(
            self.output,
            "\nTotal Slots: {}\nOccupied: {}\nAvailable: {}",
            status.total, status.occupied, status.available
        )?;
        for floor in &status.floors {
            writeln!(
                self.output,
                "  Floor {}: {}/{} occupied",
                floor.floor, floor.occupied, floor.total
            )?;
        }
        Ok(())
    }

    fn show_active_tickets(&mut self) -> io::Result<()> {
        let tickets = status::list_active_tickets(self.state);
        if self.json {
            return self.render_json(&tickets);
        }

        if tickets.is_empty() {
            return writeln!(self.output, "\nNo vehicles parked.");
        }
        writeln!(self.output, "\n--- ACTIVE TICKETS ---")?;
        for ticket in &tickets {
            writeln!(
                self.output,
                "#{} {} ({}) floor {} slot {} since {}",
                ticket.id,
                ticket.registration,
                ticket.vehicle_type,
                ticket.floor,
                ticket.slot_id,
                format_time(ticket.entry_time)
            )?;
        }
        Ok(())
    }

    fn show_revenue(&mut self) -> io::Result<()> {
        let revenue = status::get_revenue(self.state);
        if self.json {
            return self.render_json(&revenue);
        }

        writeln!(
            self.output,
            "\nTotal revenue: {}\nTickets issued: {}\nCurrently parked: {}",
            self.config
                .format_currency(Money::from_cents(revenue.total_revenue_cents)),
            revenue.tickets_issued,
            revenue.active_tickets
        )
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn render_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.output, value)?;
        writeln!(self.output)
    }

    fn render_error(&mut self, err: &ApiError) -> io::Result<()> {
        if self.json {
            return self.render_json(err);
        }
        writeln!(self.output, "Error: {}", err.message)
    }
}

fn parse_number(input: &str, field: &str) -> Result<u32, ApiError> {
    input
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be a number", field)))
}

fn format_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkade_core::FacilityConfig;

    fn run_session(config: FacilityConfig, script: &str, json: bool) -> (String, FacilityState) {
        run_bytes(config, script.as_bytes(), json)
    }

    fn run_bytes(config: FacilityConfig, script: &[u8], json: bool) -> (String, FacilityState) {
        let state = FacilityState::new(config).unwrap();
        let app_config = AppConfig::default();
        let mut output = Vec::new();
        Menu::new(&state, &app_config, script, &mut output)
            .json(json)
            .run()
            .unwrap();
        (String::from_utf8(output).unwrap(), state)
    }

    #[test]
    fn test_park_then_status() {
        let (out, state) = run_session(FacilityConfig::new(1, 2, 0), "1\n1\nka01\n3\n7\n", false);
        assert!(out.contains("1. Car ($20.00/hr)"));
        assert!(out.contains("3. Electric Car ($16.00/hr)"));
        assert!(out.contains("Vehicle parked. Ticket ID: 1001"));
        assert!(out.contains("Floor 1, Slot 1"));
        assert!(out.contains("Total Slots: 2\nOccupied: 1\nAvailable: 1"));
        assert!(out.ends_with("Goodbye.\n"));
        assert!(state.with_facility(|f| f.active_ticket("KA01").is_some()));
    }

    #[test]
    fn test_unpark_prints_charge() {
        let (out, state) =
            run_session(FacilityConfig::new(1, 1, 0), "1\n1\nX1\n2\nX1\n2\nX1\n", false);
        assert!(out.contains("Parking charge: $"));
        assert!(out.contains("Error: Vehicle not found: X1"));
        assert_eq!(state.with_facility(|f| f.status().occupied), 0);
    }

    #[test]
    fn test_invalid_input() {
        let (out, _) = run_session(FacilityConfig::default(), "9\n1\n7\n1\nabc\n1\n1\n \n", false);
        assert!(out.contains("Invalid option."));
        assert!(out.contains("Error: vehicle type must be between 1 and 5"));
        assert!(out.contains("Error: vehicle type must be a number"));
        assert!(out.contains("Error: registration is required"));
    }

    #[test]
    fn test_no_capacity_message() {
        let (out, _) =
            run_session(FacilityConfig::new(1, 2, 0), "1\n4\nH1\n", false);
        assert!(out.contains("Error: No slots available for Handicapped Car"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, _) = run_session(FacilityConfig::default(), "", false);
        assert!(out.starts_with("Welcome to Smart Parking System"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_json_output() {
        let (out, _) = run_session(FacilityConfig::new(1, 1, 0), "1\n1\nJ1\n1\n1\nJ2\n5\n", true);
        assert!(out.contains(r#""registration":"J1""#));
        assert!(out.contains(r#""code":"NO_CAPACITY""#));
        assert!(out.contains(r#""totalRevenueCents":0"#));
        assert!(out.contains(r#""ticketsIssued":1"#));
    }

    #[test]
    fn test_active_tickets_listing() {
        let (out, _) =
            run_session(FacilityConfig::new(1, 2, 1), "4\n1\n2\nB7\n4\n", false);
        assert!(out.contains("No vehicles parked."));
        assert!(out.contains("#1001 B7 (Bike) floor 1 slot 3 since"));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session() {
        let (out, state) =
            run_bytes(FacilityConfig::new(1, 2, 0), b"1\n1\nA1\n\xff\n3\n7\n", false);
        assert!(out.contains("Invalid option."));
        assert!(out.contains("Total Slots: 2\nOccupied: 1\nAvailable: 1"));
        assert!(out.ends_with("Goodbye.\n"));
        assert!(state.with_facility(|f| f.active_ticket("A1").is_some()));
    }

    #[test]
    fn test_invalid_utf8_registration_is_rejected() {
        let (out, state) = run_bytes(FacilityConfig::new(1, 2, 0), b"1\n1\nK\xffA\n", false);
        assert!(out.contains("Error: registration has invalid format"));
        assert_eq!(state.with_facility(|f| f.status().occupied), 0);
    }

    #[test]
    fn test_slot_status_action() {
        let (out, state) = run_session(
            FacilityConfig::new(1, 2, 0),
            "6\n1\n1\nmaintenance\n1\n1\nM1\n6\n1\n2\nfree\n6\nx\n1\nfree\n6\n1\n1\nbroken\n7\n",
            false,
        );
        assert!(out.contains("Slot 1 on floor 1 is now under maintenance (was free)"));
        assert!(out.contains("Floor 1, Slot 2"));
        assert!(out.contains("Error: Slot 2 on floor 1 is occupied, cannot change status"));
        assert!(out.contains("Error: floor must be a number"));
        assert!(out.contains("Error: slot status must be one of"));
        assert_eq!(state.with_facility(|f| f.locate("M1")), Some((1, 2)));
    }
}
