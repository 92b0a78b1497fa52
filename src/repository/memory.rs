use std::collections::HashMap;

use super::{LotRepository, TicketRepository, VehicleRepository};
use crate::model::{ParkingLot, Ticket, Vehicle};

#[derive(Debug, Clone, Default)]
pub struct InMemoryLotRepository {
    lot: Option<ParkingLot>,
}

impl InMemoryLotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LotRepository for InMemoryLotRepository {
    fn save(&mut self, lot: ParkingLot) {
        self.lot = Some(lot);
    }

    fn get(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    fn get_mut(&mut self) -> Option<&mut ParkingLot> {
        self.lot.as_mut()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketRepository {
    tickets: HashMap<String, Ticket>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn save(&mut self, ticket: Ticket) {
        self.tickets.insert(ticket.id().to_string(), ticket);
    }

    fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.get(id)
    }

    fn find_active_by_vehicle_number(&self, number: &str) -> Option<&Ticket> {
        self.tickets
            .values()
            .find(|t| t.is_active() && t.vehicle().number() == number)
    }

    fn active_count(&self) -> usize {
        self.tickets.values().filter(|t| t.is_active()).count()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: HashMap<String, Vehicle>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn save(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.number().to_string(), vehicle);
    }

    fn get(&self, number: &str) -> Option<&Vehicle> {
        self.vehicles.get(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Floor, Spot, SpotSize, VehicleType};
    use chrono::Utc;

    fn ticket(id: &str, plate: &str) -> Ticket {
        let spot = Spot::new("S1", SpotSize::Medium, 1);
        Ticket::new(id, Vehicle::new(plate, VehicleType::Car), &spot, Utc::now())
    }

    #[test]
    fn test_lot_repository_replaces() {
        let mut repo = InMemoryLotRepository::new();
        assert!(repo.get().is_none());

        repo.save(ParkingLot::new(vec![Floor::new(1, vec![])]));
        assert_eq!(repo.get().unwrap().floors().len(), 1);

        repo.save(ParkingLot::new(vec![]));
        assert!(repo.get_mut().unwrap().floors().is_empty());
    }

    #[test]
    fn test_ticket_upsert_and_active_lookup() {
        let mut repo = InMemoryTicketRepository::new();
        assert!(repo.is_empty());

        let mut t = ticket("T-1", "ABC");
        repo.save(t.clone());
        assert_eq!(repo.active_count(), 1);
        assert_eq!(repo.find_active_by_vehicle_number("ABC").unwrap().id(), "T-1");
        assert!(repo.find_active_by_vehicle_number("XYZ").is_none());

        t.close(Utc::now(), 1.5).unwrap();
        repo.save(t);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.active_count(), 0);
        assert!(repo.find_active_by_vehicle_number("ABC").is_none());
        assert!(!repo.get("T-1").unwrap().is_active());
    }

    #[test]
    fn test_vehicle_upsert_by_plate() {
        let mut repo = InMemoryVehicleRepository::new();
        repo.save(Vehicle::new("ABC", VehicleType::Car));
        repo.save(Vehicle::new("ABC", VehicleType::Motorcycle));

        assert_eq!(
            repo.get("ABC").unwrap().vehicle_type(),
            VehicleType::Motorcycle
        );
        assert!(repo.get("NOPE").is_none());
    }
}
