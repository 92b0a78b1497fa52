//! Domain model for the parking simulation
//!
//! Vehicles, spots, floors, the lot that contains them, and the tickets and
//! receipts produced by the entry/exit lifecycle.

mod lot;
mod spot;
mod ticket;
mod vehicle;

pub use lot::{Floor, ParkingLot};
pub use spot::{Spot, SpotSize};
pub use ticket::{PaymentStatus, Receipt, Ticket, TicketStatus};
pub use vehicle::{Vehicle, VehicleType};

/// Point in time used for entry and exit stamps
pub type Timestamp = chrono::DateTime<chrono::Utc>;
