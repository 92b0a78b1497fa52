use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Spot, SpotSize};
use crate::config::LotLayout;
use crate::error::{Error, Result};
use crate::ids::IdGenerator;

/// One level of the lot with its spots in fixed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    floor_number: u32,
    spots: Vec<Spot>,
}

impl Floor {
    pub fn new(floor_number: u32, spots: Vec<Spot>) -> Self {
        Floor {
            floor_number,
            spots,
        }
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Number of spots on this floor that are not occupied
    pub fn available_spots_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_free()).count()
    }
}

/// The whole lot: floors in order, fixed after construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingLot {
    floors: Vec<Floor>,
}

impl ParkingLot {
    pub fn new(floors: Vec<Floor>) -> Self {
        ParkingLot { floors }
    }

    /// Builds a lot from a layout, minting spot ids with `ids`
    ///
    /// Spot index `i` counts from 1 on every floor. Indices below
    /// `small_below` are SMALL, below `medium_below` MEDIUM, the rest LARGE.
    pub fn from_layout(layout: &LotLayout, ids: &mut dyn IdGenerator) -> Self {
        let floors = (1..=layout.floors)
            .map(|floor_number| {
                let spots = (1..=layout.spots_per_floor)
                    .map(|i| {
                        let id = ids.next(&format!("F{}S{}-#", floor_number, i));
                        Spot::new(id, layout.size_for_index(i), floor_number)
                    })
                    .collect();
                Floor::new(floor_number, spots)
            })
            .collect();
        ParkingLot { floors }
    }

    /// Checks that every spot id is unique across the lot
    ///
    /// Spots are committed by id, so a repeated id would let one spot be
    /// allocated while another is marked occupied.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.total_spots());
        for spot in self.all_spots() {
            if !seen.insert(spot.id()) {
                return Err(Error::invalid_config(
                    "lot.spots",
                    format!("duplicate spot id {}", spot.id()),
                ));
            }
        }
        Ok(())
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Every spot in floor order, then spot order within the floor
    pub fn all_spots(&self) -> impl Iterator<Item = &Spot> + '_ {
        self.floors.iter().flat_map(|f| f.spots.iter())
    }

    pub fn find_spot(&self, id: &str) -> Option<&Spot> {
        self.all_spots().find(|s| s.id() == id)
    }

    pub fn find_spot_mut(&mut self, id: &str) -> Option<&mut Spot> {
        self.floors
            .iter_mut()
            .flat_map(|f| f.spots.iter_mut())
            .find(|s| s.id() == id)
    }

    pub fn total_spots(&self) -> usize {
        self.floors.iter().map(|f| f.spots.len()).sum()
    }

    /// Free spots of a given size across the whole lot
    pub fn free_spots_of_size(&self, size: SpotSize) -> usize {
        self.all_spots()
            .filter(|s| s.is_free() && s.size() == size)
            .count()
    }
}
