//! Parking service: the entry/exit lifecycle over injected collaborators
//!
//! [`ParkingService`] owns the repositories, the allocation and fee
//! strategies, the id generator and the clock. Every mutating operation
//! takes `&mut self`, so finding a spot and committing it happen under one
//! exclusive borrow.

mod availability;
mod entry;
mod exit;

pub use availability::FloorAvailability;

use crate::config::{AllowedSpotTable, ParkingConfig};
use crate::error::{Error, Result};
use crate::ids::{IdGenerator, TimestampIdGenerator};
use crate::model::{ParkingLot, Ticket, Vehicle};
use crate::repository::{
    InMemoryLotRepository, InMemoryTicketRepository, InMemoryVehicleRepository, LotRepository,
    TicketRepository, VehicleRepository,
};
use crate::strategy::{AllocationStrategy, FeeStrategy, HourlyFeeStrategy, SizeBasedAllocation};
use crate::time::{Clock, SystemClock, TimeScale};

/// Prefix of every ticket id
pub const TICKET_PREFIX: &str = "T-";

/// Parking lot simulation service
pub struct ParkingService {
    lots: Box<dyn LotRepository>,
    tickets: Box<dyn TicketRepository>,
    vehicles: Box<dyn VehicleRepository>,
    allocator: Box<dyn AllocationStrategy>,
    fees: Box<dyn FeeStrategy>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    allowed: AllowedSpotTable,
    time_scale: TimeScale,
}

impl ParkingService {
    /// Create a builder with default collaborators
    pub fn builder() -> ParkingServiceBuilder {
        ParkingServiceBuilder::default()
    }

    /// Registers `lot`, replacing any lot already installed
    ///
    /// Fails with [`Error::InvalidConfig`] when two spots share an id, and
    /// with [`Error::LotInUse`] while any ticket is still ACTIVE, since those
    /// tickets point at spots of the current lot.
    pub fn install_lot(&mut self, lot: ParkingLot) -> Result<()> {
        lot.validate()?;

        let active_tickets = self.tickets.active_count();
        if active_tickets > 0 {
            tracing::warn!(
                "[SETUP] Refusing to replace lot with {} active tickets",
                active_tickets
            );
            return Err(Error::LotInUse { active_tickets });
        }

        tracing::info!(
            "[SETUP] Parking lot installed with {} floors, {} spots",
            lot.floors().len(),
            lot.total_spots()
        );
        self.lots.save(lot);
        Ok(())
    }

    /// The registered lot, if any
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lots.get()
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.get(id)
    }

    pub fn vehicle(&self, number: &str) -> Option<&Vehicle> {
        self.vehicles.get(number)
    }

    /// The ACTIVE ticket for the vehicle with plate `number`, if parked
    pub fn active_ticket_for(&self, number: &str) -> Option<&Ticket> {
        self.tickets.find_active_by_vehicle_number(number)
    }

    /// Number of tickets issued so far
    pub fn tickets_issued(&self) -> usize {
        self.tickets.len()
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Compatibility table every committed spot is checked against
    pub fn allowed_spots(&self) -> &AllowedSpotTable {
        &self.allowed
    }
}

/// Builder for [`ParkingService`]
///
/// Anything not supplied falls back to the in-memory repositories,
/// size-based allocation and hourly pricing from the configuration,
/// timestamp ids and the system clock. The configuration's
/// compatibility table also guards every spot a custom allocator returns.
#[derive(Default)]
pub struct ParkingServiceBuilder {
    config: ParkingConfig,
    generate_lot: bool,
    lot: Option<ParkingLot>,
    lots: Option<Box<dyn LotRepository>>,
    tickets: Option<Box<dyn TicketRepository>>,
    vehicles: Option<Box<dyn VehicleRepository>>,
    allocator: Option<Box<dyn AllocationStrategy>>,
    fees: Option<Box<dyn FeeStrategy>>,
    ids: Option<Box<dyn IdGenerator>>,
    clock: Option<Box<dyn Clock>>,
}

impl ParkingServiceBuilder {
    /// Use `config` for defaults and for a generated lot
    pub fn config(mut self, config: ParkingConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a lot from the configured layout at construction time
    pub fn with_generated_lot(mut self) -> Self {
        self.generate_lot = true;
        self
    }

    /// Install a prebuilt lot at construction time
    pub fn lot(mut self, lot: ParkingLot) -> Self {
        self.lot = Some(lot);
        self
    }

    pub fn lot_repository<R: LotRepository + 'static>(mut self, repo: R) -> Self {
        self.lots = Some(Box::new(repo));
        self
    }

    pub fn ticket_repository<R: TicketRepository + 'static>(mut self, repo: R) -> Self {
        self.tickets = Some(Box::new(repo));
        self
    }

    pub fn vehicle_repository<R: VehicleRepository + 'static>(mut self, repo: R) -> Self {
        self.vehicles = Some(Box::new(repo));
        self
    }

    pub fn allocation_strategy<S: AllocationStrategy + 'static>(mut self, strategy: S) -> Self {
        self.allocator = Some(Box::new(strategy));
        self
    }

    pub fn fee_strategy<S: FeeStrategy + 'static>(mut self, strategy: S) -> Self {
        self.fees = Some(Box::new(strategy));
        self
    }

    pub fn id_generator<G: IdGenerator + 'static>(mut self, ids: G) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate the configuration and assemble the service
    pub fn build(self) -> Result<ParkingService> {
        self.config.validate()?;

        let time_scale = TimeScale::new(self.config.simulation_factor);
        let config = self.config;

        let mut service = ParkingService {
            lots: self
                .lots
                .unwrap_or_else(|| Box::new(InMemoryLotRepository::new())),
            tickets: self
                .tickets
                .unwrap_or_else(|| Box::new(InMemoryTicketRepository::new())),
            vehicles: self
                .vehicles
                .unwrap_or_else(|| Box::new(InMemoryVehicleRepository::new())),
            allocator: self
                .allocator
                .unwrap_or_else(|| Box::new(SizeBasedAllocation::new(config.allowed.clone()))),
            fees: self.fees.unwrap_or_else(|| {
                Box::new(HourlyFeeStrategy::new(config.rates.clone(), time_scale))
            }),
            ids: self
                .ids
                .unwrap_or_else(|| Box::new(TimestampIdGenerator::new())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            allowed: config.allowed.clone(),
            time_scale,
        };

        if let Some(lot) = self.lot {
            service.install_lot(lot)?;
        } else if self.generate_lot {
            let lot = ParkingLot::from_layout(&config.layout, service.ids.as_mut());
            service.install_lot(lot)?;
        } else if let Some(lot) = service.lots.get() {
            // an injected repository may already hold a lot
            lot.validate()?;
        }

        tracing::info!(
            "[PARKING-SERVICE] Parking service initialized (allocation: {}, fees: {})",
            service.allocator.name(),
            service.fees.name()
        );
        Ok(service)
    }
}
