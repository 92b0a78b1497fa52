use crate::config::RateTable;
use crate::model::{Ticket, Timestamp, VehicleType};
use crate::time::TimeScale;

/// Computes the charge for a ticket
pub trait FeeStrategy {
    /// Strategy name, used in logs
    fn name(&self) -> &str;

    /// Fee owed for `ticket`
    ///
    /// Closed tickets are priced at their exit time; active tickets are
    /// priced as if they left at `now`.
    fn calculate(&self, ticket: &Ticket, now: Timestamp) -> f64;

    /// Nominal hourly rate for a vehicle type, if the strategy has one
    fn hourly_rate(&self, _vehicle_type: VehicleType) -> Option<f64> {
        None
    }
}

/// Whole hours billed for a stay of `minutes`, rounded up, at least 1
pub fn billable_hours(minutes: u64) -> u64 {
    minutes.div_ceil(60).max(1)
}

/// Rate per started hour, with a one hour minimum
#[derive(Debug, Clone, Default)]
pub struct HourlyFeeStrategy {
    rates: RateTable,
    scale: TimeScale,
}

impl HourlyFeeStrategy {
    pub fn new(rates: RateTable, scale: TimeScale) -> Self {
        HourlyFeeStrategy { rates, scale }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl FeeStrategy for HourlyFeeStrategy {
    fn name(&self) -> &str {
        "hourly"
    }

    fn calculate(&self, ticket: &Ticket, now: Timestamp) -> f64 {
        let exit = ticket.exit_time().unwrap_or(now);
        let minutes = self.scale.minutes_between(ticket.entry_time(), exit);
        let hours = billable_hours(minutes);
        hours as f64 * self.rates.rate(ticket.vehicle().vehicle_type())
    }

    fn hourly_rate(&self, vehicle_type: VehicleType) -> Option<f64> {
        Some(self.rates.rate(vehicle_type))
    }
}

/// Fixed amount per visit regardless of duration
#[derive(Debug, Clone, Default)]
pub struct FlatFeeStrategy {
    amounts: RateTable,
}

impl FlatFeeStrategy {
    pub fn new(amounts: RateTable) -> Self {
        FlatFeeStrategy { amounts }
    }
}

impl FeeStrategy for FlatFeeStrategy {
    fn name(&self) -> &str {
        "flat"
    }

    fn calculate(&self, ticket: &Ticket, _now: Timestamp) -> f64 {
        self.amounts.rate(ticket.vehicle().vehicle_type())
    }
}
