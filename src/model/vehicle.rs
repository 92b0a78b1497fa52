use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of vehicle kinds the lot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    /// Fits any spot
    Motorcycle,
    /// Needs a medium or large spot
    Car,
    /// Needs a large spot
    Bus,
}

impl VehicleType {
    /// All vehicle types, in declaration order
    pub const ALL: [VehicleType; 3] = [VehicleType::Motorcycle, VehicleType::Car, VehicleType::Bus];

    /// Upper-case name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Car => "CAR",
            VehicleType::Bus => "BUS",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle identified by its plate number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    number: String,
    #[serde(rename = "type")]
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Creates a vehicle with the given plate number and type
    pub fn new(number: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Vehicle {
            number: number.into(),
            vehicle_type,
        }
    }

    /// Plate number (unique key)
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Vehicle type
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}
