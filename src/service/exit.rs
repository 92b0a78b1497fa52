use super::ParkingService;
use crate::error::{Error, Result};
use crate::model::{Receipt, Ticket};

impl ParkingService {
    /// Closes an ACTIVE ticket, frees its spot and returns the receipt
    ///
    /// Unknown and already closed tickets both fail with
    /// [`Error::InvalidTicket`]. Every check runs before any state changes.
    pub fn check_out(&mut self, ticket_id: &str) -> Result<Receipt> {
        tracing::info!("[EXIT] Vehicle attempting check-out with ticket {}", ticket_id);

        let mut ticket = self.active_ticket(ticket_id)?.clone();

        let lot = self.lots.get_mut().ok_or(Error::LotNotInitialized)?;
        let spot = lot.find_spot_mut(ticket.spot_id()).ok_or_else(|| {
            Error::runtime(format!(
                "ticket {} references spot {} which is not in the lot",
                ticket.id(),
                ticket.spot_id()
            ))
        })?;

        let exit_time = self.clock.now();
        let fee = self.fees.calculate(&ticket, exit_time);
        ticket.close(exit_time, fee)?;
        spot.release();

        let duration = self
            .time_scale
            .minutes_between(ticket.entry_time(), exit_time);

        match self.fees.hourly_rate(ticket.vehicle().vehicle_type()) {
            Some(rate) => tracing::info!(
                "[EXIT] Vehicle {} ({}) checked out from spot {}. Duration: {}min, Rate: ${:.2}/hr, Fee: ${:.2}",
                ticket.vehicle().number(),
                ticket.vehicle().vehicle_type(),
                ticket.spot_id(),
                duration,
                rate,
                fee
            ),
            None => tracing::info!(
                "[EXIT] Vehicle {} ({}) checked out from spot {}. Duration: {}min, Fee: ${:.2}",
                ticket.vehicle().number(),
                ticket.vehicle().vehicle_type(),
                ticket.spot_id(),
                duration,
                fee
            ),
        }

        let receipt = Receipt::new(ticket.id(), fee, duration);
        self.tickets.save(ticket);
        tracing::debug!("[EXIT] Receipt {}", receipt);

        Ok(receipt)
    }

    /// Amount owed so far on an ACTIVE ticket, priced as if it left now
    pub fn quote(&self, ticket_id: &str) -> Result<f64> {
        let ticket = self.active_ticket(ticket_id)?;
        Ok(self.fees.calculate(ticket, self.clock.now()))
    }

    fn active_ticket(&self, ticket_id: &str) -> Result<&Ticket> {
        match self.tickets.get(ticket_id) {
            Some(ticket) if ticket.is_active() => Ok(ticket),
            _ => {
                tracing::warn!("[EXIT] Invalid or closed ticket: {}", ticket_id);
                Err(Error::InvalidTicket {
                    ticket_id: ticket_id.to_string(),
                })
            }
        }
    }
}
