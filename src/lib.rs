//! # parksim - Parking Lot Simulation
//!
//! Vehicles check in, get a spot chosen by size-compatibility rules, accrue
//! time-based fees and check out with a receipt. Wall-clock time is scaled so
//! that one real second bills like a simulated hour, which lets a short run
//! exercise multi-hour pricing.
//!
//! ## Quick Start
//!
//! ```rust
//! use parksim::{ParkingService, Vehicle, VehicleType};
//!
//! # fn main() -> parksim::Result<()> {
//! // Two floors of four spots: SMALL, MEDIUM, MEDIUM, LARGE
//! let mut service = ParkingService::builder().with_generated_lot().build()?;
//!
//! let ticket = service.check_in(Vehicle::new("TN-01-1111", VehicleType::Car))?;
//! let receipt = service.check_out(ticket.id())?;
//!
//! // Immediate checkout still bills the one hour minimum
//! assert_eq!(receipt.fee(), 1.5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Swapping Policies
//!
//! Allocation and pricing are trait objects handed to the builder:
//!
//! ```rust
//! use parksim::config::RateTable;
//! use parksim::ids::SequentialIdGenerator;
//! use parksim::strategy::{BestFitAllocation, FlatFeeStrategy};
//! use parksim::{ParkingService, Vehicle, VehicleType};
//!
//! # fn main() -> parksim::Result<()> {
//! let mut service = ParkingService::builder()
//!     .allocation_strategy(BestFitAllocation::default())
//!     .fee_strategy(FlatFeeStrategy::new(RateTable { motorcycle: 1.0, car: 2.0, bus: 5.0 }))
//!     .id_generator(SequentialIdGenerator::new())
//!     .with_generated_lot()
//!     .build()?;
//!
//! let ticket = service.check_in(Vehicle::new("MC-7", VehicleType::Motorcycle))?;
//! assert_eq!(ticket.spot_id(), "F1S1-#1");
//! assert_eq!(service.check_out(ticket.id())?.fee(), 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Capacity exhaustion and bad tickets are ordinary, recoverable outcomes:
//!
//! ```rust
//! use parksim::{Error, ParkingService, Vehicle, VehicleType};
//!
//! let mut service = ParkingService::builder().with_generated_lot().build().unwrap();
//! service.check_in(Vehicle::new("BUS-1", VehicleType::Bus)).unwrap();
//! service.check_in(Vehicle::new("BUS-2", VehicleType::Bus)).unwrap();
//!
//! match service.check_in(Vehicle::new("BUS-3", VehicleType::Bus)) {
//!     Err(Error::NoSpotAvailable { plate, .. }) => assert_eq!(plate, "BUS-3"),
//!     other => panic!("expected NoSpotAvailable, got {:?}", other),
//! }
//! ```
//!
//! ## Main Components
//!
//! - [`ParkingService`] - Entry, exit and availability over injected collaborators
//! - [`strategy`] - [`AllocationStrategy`] and [`FeeStrategy`] implementations
//! - [`model`] - Vehicles, spots, floors, lots, tickets and receipts
//! - [`repository`] - Storage traits with in-memory implementations
//! - [`time`] - Simulated-minute conversion and injectable clocks
//! - [`ids`] - Ticket and spot id generators
//! - [`config`] - Layout, rate and compatibility tables, loadable from JSON

/// Version of the parksim crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod repository;
pub mod service;
pub mod strategy;
pub mod time;

// Re-export main types
pub use config::ParkingConfig;
pub use error::{Error, ErrorSeverity, Result};
pub use ids::IdGenerator;
pub use model::{
    Floor, ParkingLot, PaymentStatus, Receipt, Spot, SpotSize, Ticket, TicketStatus, Vehicle,
    VehicleType,
};
pub use service::{FloorAvailability, ParkingService, ParkingServiceBuilder};
pub use strategy::{AllocationStrategy, FeeStrategy};
pub use time::{simulated_minutes_between, Clock};
