//! Running totals for a dispatch simulation

use log::info;

use super::types::ServiceEvent;

/// Counters collected by the dispatcher over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub ticks: u64,
    /// Hall calls that went through the assignment policy
    pub hall_calls_routed: u64,
    pub car_calls_routed: u64,
    pub guests_picked_up: u64,
    pub guests_dropped_off: u64,
    pub guests_deferred: u64,
    /// Car ticks that reported nothing to do
    pub idle_car_ticks: u64,
}

impl DispatchStats {
    pub fn record(&mut self, event: &ServiceEvent) {
        match *event {
            ServiceEvent::PickedUp { guests, .. } => self.guests_picked_up += u64::from(guests),
            ServiceEvent::DroppedOff { guests, .. } => {
                self.guests_dropped_off += u64::from(guests)
            }
            ServiceEvent::Deferred { guests, .. } => self.guests_deferred += u64::from(guests),
        }
    }

    /// Log the end-of-run summary
    pub fn log_summary(&self, pending_guests: u64) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks: {}", self.ticks);
        info!("Hall calls routed: {}", self.hall_calls_routed);
        info!("Car calls routed: {}", self.car_calls_routed);
        info!("Guests picked up: {}", self.guests_picked_up);
        info!("Guests dropped off: {}", self.guests_dropped_off);
        info!("Guests deferred: {}", self.guests_deferred);
        info!("Guests still waiting in queue: {}", pending_guests);
        info!("Idle car ticks: {}", self.idle_car_ticks);
    }
}
