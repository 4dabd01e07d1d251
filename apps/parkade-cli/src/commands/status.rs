//! # Status Commands
//!
//! Read-only views of the facility.

use parkade_core::{FloorStatus, Ticket};
use serde::Serialize;
use tracing::debug;

use crate::state::FacilityState;

/// Occupancy overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    pub floors: Vec<FloorStatus>,
}

/// Revenue summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub total_revenue_cents: i64,
    pub tickets_issued: u64,
    pub active_tickets: usize,
}

/// Total/occupied/available slots plus the per-floor breakdown.
pub fn get_status(state: &FacilityState) -> StatusResponse {
    debug!("get_status command");
    state.with_facility(|f| {
        let status = f.status();
        StatusResponse {
            total: status.total,
            occupied: status.occupied,
            available: status.available,
            floors: f.floor_status(),
        }
    })
}

/// Active tickets, oldest first.
pub fn list_active_tickets(state: &FacilityState) -> Vec<Ticket> {
    debug!("list_active_tickets command");
    state.with_facility(|f| f.active_tickets().into_iter().cloned().collect())
}

pub fn get_revenue(state: &FacilityState) -> RevenueResponse {
    debug!("get_revenue command");
    state.with_facility(|f| RevenueResponse {
        total_revenue_cents: f.total_revenue().cents(),
        tickets_issued: f.tickets_issued(),
        active_tickets: f.status().occupied,
    })
}
