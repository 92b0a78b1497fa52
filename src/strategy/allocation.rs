use crate::config::AllowedSpotTable;
use crate::model::{ParkingLot, Spot, SpotSize, Vehicle};

/// Picks a free spot for a vehicle without mutating the lot
///
/// Returning `None` means the lot is full for this vehicle; the caller
/// decides whether that is an error. Marking the spot occupied is the
/// caller's job.
pub trait AllocationStrategy {
    /// Strategy name, used in logs
    fn name(&self) -> &str;

    /// Choose a spot for `vehicle`
    fn allocate<'a>(&self, lot: &'a ParkingLot, vehicle: &Vehicle) -> Option<&'a Spot>;
}

/// First free spot, in floor then spot order, whose size the vehicle accepts
#[derive(Debug, Clone, Default)]
pub struct SizeBasedAllocation {
    allowed: AllowedSpotTable,
}

impl SizeBasedAllocation {
    pub fn new(allowed: AllowedSpotTable) -> Self {
        SizeBasedAllocation { allowed }
    }

    pub fn allowed(&self) -> &AllowedSpotTable {
        &self.allowed
    }
}

impl AllocationStrategy for SizeBasedAllocation {
    fn name(&self) -> &str {
        "size-based"
    }

    fn allocate<'a>(&self, lot: &'a ParkingLot, vehicle: &Vehicle) -> Option<&'a Spot> {
        let allowed = self.allowed.allowed(vehicle.vehicle_type());
        lot.all_spots()
            .find(|spot| spot.is_free() && allowed.contains(&spot.size()))
    }
}

/// Smallest allowed size class that still has room
///
/// Keeps large spots free for buses by parking motorcycles in small spots
/// even when a large spot comes first in scan order. Within a size class the
/// scan order is the same as [`SizeBasedAllocation`].
#[derive(Debug, Clone, Default)]
pub struct BestFitAllocation {
    allowed: AllowedSpotTable,
}

impl BestFitAllocation {
    pub fn new(allowed: AllowedSpotTable) -> Self {
        BestFitAllocation { allowed }
    }
}

impl AllocationStrategy for BestFitAllocation {
    fn name(&self) -> &str {
        "best-fit"
    }

    fn allocate<'a>(&self, lot: &'a ParkingLot, vehicle: &Vehicle) -> Option<&'a Spot> {
        let allowed = self.allowed.allowed(vehicle.vehicle_type());
        SpotSize::ALL
            .iter()
            .filter(|size| allowed.contains(size))
            .find_map(|size| {
                lot.all_spots()
                    .find(|spot| spot.is_free() && spot.size() == *size)
            })
    }
}
