//! Storage seams for the lot, tickets and vehicles
//!
//! The service only talks to these traits; the in-memory implementations
//! are what a single simulation run uses.

mod memory;

pub use memory::{InMemoryLotRepository, InMemoryTicketRepository, InMemoryVehicleRepository};

use crate::model::{ParkingLot, Ticket, Vehicle};

/// Holds the single lot being simulated
pub trait LotRepository {
    /// Registers `lot`, replacing any previous one
    fn save(&mut self, lot: ParkingLot);

    fn get(&self) -> Option<&ParkingLot>;

    fn get_mut(&mut self) -> Option<&mut ParkingLot>;
}

/// Tickets keyed by id
pub trait TicketRepository {
    /// Inserts or replaces the ticket with the same id
    fn save(&mut self, ticket: Ticket);

    fn get(&self, id: &str) -> Option<&Ticket>;

    /// The ACTIVE ticket held by the vehicle with plate `number`, if any
    fn find_active_by_vehicle_number(&self, number: &str) -> Option<&Ticket>;

    /// Number of tickets still ACTIVE
    fn active_count(&self) -> usize;

    /// Number of tickets ever issued
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vehicles keyed by plate number
pub trait VehicleRepository {
    /// Inserts or replaces the vehicle with the same plate
    fn save(&mut self, vehicle: Vehicle);

    fn get(&self, number: &str) -> Option<&Vehicle>;
}
