use serde::{Deserialize, Serialize};
use std::fmt;

/// Size class of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotSize {
    /// Motorcycles only
    Small,
    /// Motorcycles and cars
    Medium,
    /// Any vehicle
    Large,
}

impl SpotSize {
    /// All size classes, smallest first
    pub const ALL: [SpotSize; 3] = [SpotSize::Small, SpotSize::Medium, SpotSize::Large];

    /// Upper-case name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotSize::Small => "SMALL",
            SpotSize::Medium => "MEDIUM",
            SpotSize::Large => "LARGE",
        }
    }
}

impl fmt::Display for SpotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parking space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    id: String,
    size: SpotSize,
    floor_number: u32,
    occupied: bool,
}

impl Spot {
    /// Creates a free spot
    pub fn new(id: impl Into<String>, size: SpotSize, floor_number: u32) -> Self {
        Spot {
            id: id.into(),
            size,
            floor_number,
            occupied: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> SpotSize {
        self.size
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_free(&self) -> bool {
        !self.occupied
    }

    /// Marks the spot as taken by a vehicle
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Marks the spot as free again
    pub fn release(&mut self) {
        self.occupied = false;
    }
}
