//! Configuration for a parking simulation
//!
//! Every table the strategies consume is plain data here, so an alternate
//! lot, pricing or compatibility table can be supplied as JSON without
//! touching the allocation or fee code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{SpotSize, VehicleType};
use crate::time::SIMULATION_FACTOR;

/// Shape of a generated lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LotLayout {
    /// Number of floors, numbered from 1
    pub floors: u32,
    /// Spots on every floor, indexed from 1
    pub spots_per_floor: u32,
    /// Spot indices below this are SMALL
    pub small_below: u32,
    /// Spot indices below this (and not SMALL) are MEDIUM; the rest LARGE
    pub medium_below: u32,
}

impl LotLayout {
    /// Size class for the 1-based spot index `i`
    pub fn size_for_index(&self, i: u32) -> SpotSize {
        if i < self.small_below {
            SpotSize::Small
        } else if i < self.medium_below {
            SpotSize::Medium
        } else {
            SpotSize::Large
        }
    }
}

impl Default for LotLayout {
    fn default() -> Self {
        Self {
            floors: 2,
            spots_per_floor: 4,
            small_below: 2,
            medium_below: 4,
        }
    }
}

/// Hourly price per vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateTable {
    pub motorcycle: f64,
    pub car: f64,
    pub bus: f64,
}

impl RateTable {
    pub fn rate(&self, vehicle_type: VehicleType) -> f64 {
        match vehicle_type {
            VehicleType::Motorcycle => self.motorcycle,
            VehicleType::Car => self.car,
            VehicleType::Bus => self.bus,
        }
    }

    fn validate(&self, field: &str) -> Result<()> {
        for vehicle_type in VehicleType::ALL {
            let rate = self.rate(vehicle_type);
            if !rate.is_finite() || rate < 0.0 {
                return Err(Error::invalid_config(
                    format!("{}.{}", field, vehicle_type.as_str().to_lowercase()),
                    format!("rate must be a finite non-negative number, got {}", rate),
                ));
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            motorcycle: 0.5,
            car: 1.5,
            bus: 3.0,
        }
    }
}

/// Which spot sizes each vehicle type may occupy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllowedSpotTable {
    pub motorcycle: Vec<SpotSize>,
    pub car: Vec<SpotSize>,
    pub bus: Vec<SpotSize>,
}

impl AllowedSpotTable {
    pub fn allowed(&self, vehicle_type: VehicleType) -> &[SpotSize] {
        match vehicle_type {
            VehicleType::Motorcycle => &self.motorcycle,
            VehicleType::Car => &self.car,
            VehicleType::Bus => &self.bus,
        }
    }

    pub fn allows(&self, vehicle_type: VehicleType, size: SpotSize) -> bool {
        self.allowed(vehicle_type).contains(&size)
    }

    fn validate(&self) -> Result<()> {
        for vehicle_type in VehicleType::ALL {
            if self.allowed(vehicle_type).is_empty() {
                return Err(Error::invalid_config(
                    format!("allowed.{}", vehicle_type.as_str().to_lowercase()),
                    "every vehicle type needs at least one spot size",
                ));
            }
        }
        Ok(())
    }
}

impl Default for AllowedSpotTable {
    fn default() -> Self {
        Self {
            motorcycle: vec![SpotSize::Small, SpotSize::Medium, SpotSize::Large],
            car: vec![SpotSize::Medium, SpotSize::Large],
            bus: vec![SpotSize::Large],
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParkingConfig {
    pub layout: LotLayout,
    pub rates: RateTable,
    pub allowed: AllowedSpotTable,
    /// Multiplier from real minutes to simulated minutes
    pub simulation_factor: f64,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            layout: LotLayout::default(),
            rates: RateTable::default(),
            allowed: AllowedSpotTable::default(),
            simulation_factor: SIMULATION_FACTOR,
        }
    }
}

impl ParkingConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks semantic constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.floors == 0 {
            return Err(Error::invalid_config("layout.floors", "must be at least 1"));
        }
        if layout.spots_per_floor == 0 {
            return Err(Error::invalid_config(
                "layout.spots_per_floor",
                "must be at least 1",
            ));
        }
        if layout.small_below > layout.medium_below {
            return Err(Error::invalid_config(
                "layout.small_below",
                format!(
                    "must not exceed medium_below ({} > {})",
                    layout.small_below, layout.medium_below
                ),
            ));
        }

        self.rates.validate("rates")?;
        self.allowed.validate()?;

        if !self.simulation_factor.is_finite() || self.simulation_factor <= 0.0 {
            return Err(Error::invalid_config(
                "simulation_factor",
                format!("must be positive, got {}", self.simulation_factor),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sample_lot() {
        let config = ParkingConfig::default();
        assert_eq!(config.layout.floors, 2);
        assert_eq!(config.layout.spots_per_floor, 4);
        assert_eq!(config.rates.rate(VehicleType::Motorcycle), 0.5);
        assert_eq!(config.rates.rate(VehicleType::Car), 1.5);
        assert_eq!(config.rates.rate(VehicleType::Bus), 3.0);
        assert_eq!(config.simulation_factor, 3600.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_allowed_table() {
        let allowed = AllowedSpotTable::default();
        assert!(allowed.allows(VehicleType::Motorcycle, SpotSize::Small));
        assert!(!allowed.allows(VehicleType::Car, SpotSize::Small));
        assert!(allowed.allows(VehicleType::Car, SpotSize::Large));
        assert_eq!(allowed.allowed(VehicleType::Bus), &[SpotSize::Large]);
    }

    #[test]
    fn test_size_for_index() {
        let layout = LotLayout::default();
        assert_eq!(layout.size_for_index(1), SpotSize::Small);
        assert_eq!(layout.size_for_index(2), SpotSize::Medium);
        assert_eq!(layout.size_for_index(3), SpotSize::Medium);
        assert_eq!(layout.size_for_index(4), SpotSize::Large);
        assert_eq!(layout.size_for_index(40), SpotSize::Large);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = ParkingConfig::from_json(
            r#"{ "layout": { "floors": 3 }, "rates": { "car": 2.25 } }"#,
        )
        .unwrap();
        assert_eq!(config.layout.floors, 3);
        assert_eq!(config.layout.spots_per_floor, 4);
        assert_eq!(config.rates.car, 2.25);
        assert_eq!(config.rates.bus, 3.0);
    }

    #[test]
    fn test_from_json_allowed_sizes() {
        let config =
            ParkingConfig::from_json(r#"{ "allowed": { "car": ["LARGE"] } }"#).unwrap();
        assert_eq!(config.allowed.car, vec![SpotSize::Large]);
        assert_eq!(config.allowed.motorcycle.len(), 3);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = ParkingConfig::from_json(r#"{ "currency": "EUR" }"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));

        for json in [
            r#"{ "rates": { "cars": 2.0 } }"#,
            r#"{ "layout": { "floor": 3 } }"#,
            r#"{ "allowed": { "truck": ["LARGE"] } }"#,
        ] {
            let err = ParkingConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::ConfigParse(ref msg) if msg.contains("unknown field")));
        }
    }

    #[test]
    fn test_validation_failures() {
        let err = ParkingConfig::from_json(r#"{ "layout": { "floors": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "layout.floors"));

        let err = ParkingConfig::from_json(r#"{ "rates": { "bus": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "rates.bus"));

        let err = ParkingConfig::from_json(r#"{ "allowed": { "bus": [] } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "allowed.bus"));

        let err = ParkingConfig::from_json(r#"{ "simulation_factor": 0 }"#).unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfig { ref field, .. } if field == "simulation_factor")
        );

        let err = ParkingConfig::from_json(
            r#"{ "layout": { "small_below": 5, "medium_below": 3 } }"#,
        )
        .unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfig { ref field, .. } if field == "layout.small_below")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = ParkingConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
