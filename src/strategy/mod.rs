//! Pluggable policies for spot allocation and pricing
//!
//! Both seams are single-method traits held as trait objects by the
//! service, so a lot can switch from first-fit to best-fit allocation, or
//! from hourly to flat pricing, without touching the entry/exit flow.

mod allocation;
mod fee;

pub use allocation::{AllocationStrategy, BestFitAllocation, SizeBasedAllocation};
pub use fee::{billable_hours, FeeStrategy, FlatFeeStrategy, HourlyFeeStrategy};
