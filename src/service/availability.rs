use serde::{Deserialize, Serialize};

use super::ParkingService;

/// Free spot count for one floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorAvailability {
    pub floor_number: u32,
    pub available: usize,
}

impl ParkingService {
    /// Free spots per floor, in floor order
    ///
    /// Empty when no lot is registered.
    pub fn availability(&self) -> Vec<FloorAvailability> {
        let Some(lot) = self.lots.get() else {
            tracing::warn!("[AVAILABILITY] Parking lot not initialized");
            return Vec::new();
        };

        let availability: Vec<FloorAvailability> = lot
            .floors()
            .iter()
            .map(|floor| FloorAvailability {
                floor_number: floor.floor_number(),
                available: floor.available_spots_count(),
            })
            .collect();

        tracing::info!(
            "[AVAILABILITY] {}",
            availability
                .iter()
                .map(|a| format!("Floor {}: {} spots", a.floor_number, a.available))
                .collect::<Vec<_>>()
                .join(" | ")
        );

        availability
    }
}
