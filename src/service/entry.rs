use super::{ParkingService, TICKET_PREFIX};
use crate::error::{Error, Result};
use crate::model::{Ticket, Vehicle};

impl ParkingService {
    /// Parks `vehicle` and issues an ACTIVE ticket
    ///
    /// Fails with [`Error::LotNotInitialized`] when no lot is registered and
    /// with [`Error::NoSpotAvailable`] when the allocator finds nothing. A
    /// spot that is missing, already occupied or of a size the configured
    /// compatibility table forbids is a [`Error::RuntimeError`]. Nothing is
    /// mutated on any failure.
    pub fn check_in(&mut self, vehicle: Vehicle) -> Result<Ticket> {
        tracing::info!(
            "[ENTRY] Vehicle {} ({}) attempting check-in",
            vehicle.number(),
            vehicle.vehicle_type()
        );

        let lot = self.lots.get_mut().ok_or(Error::LotNotInitialized)?;

        let spot_id = match self.allocator.allocate(lot, &vehicle) {
            Some(spot) => spot.id().to_string(),
            None => {
                tracing::warn!("[ENTRY] No available spot for vehicle {}", vehicle.number());
                return Err(Error::NoSpotAvailable {
                    plate: vehicle.number().to_string(),
                    vehicle_type: vehicle.vehicle_type(),
                });
            }
        };

        let spot = lot.find_spot_mut(&spot_id).ok_or_else(|| {
            Error::runtime(format!(
                "allocator '{}' returned spot {} which is not in the lot",
                self.allocator.name(),
                spot_id
            ))
        })?;
        if spot.is_occupied() {
            return Err(Error::runtime(format!(
                "allocator '{}' returned spot {} which is already occupied",
                self.allocator.name(),
                spot_id
            )));
        }
        if !self.allowed.allows(vehicle.vehicle_type(), spot.size()) {
            return Err(Error::runtime(format!(
                "allocator '{}' returned {} spot {} for a {}",
                self.allocator.name(),
                spot.size(),
                spot_id,
                vehicle.vehicle_type()
            )));
        }
        spot.occupy();

        self.vehicles.save(vehicle.clone());

        let ticket = Ticket::new(
            self.ids.next(TICKET_PREFIX),
            vehicle,
            spot,
            self.clock.now(),
        );
        self.tickets.save(ticket.clone());

        tracing::info!(
            "[ENTRY] Vehicle {} parked at spot {} (Floor {}). Ticket: {}",
            ticket.vehicle().number(),
            ticket.spot_id(),
            ticket.floor_number(),
            ticket.id()
        );

        Ok(ticket)
    }
}
