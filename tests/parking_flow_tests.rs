//! End-to-end tests for the check-in / check-out lifecycle
//!
//! These tests drive the public API only and cover:
//! 1. Size-compatible placement in the sample two-floor lot
//! 2. Capacity exhaustion without side effects
//! 3. Billing with a controlled clock
//! 4. Per-floor availability bookkeeping

use chrono::{Duration, TimeZone, Utc};
use parksim::config::ParkingConfig;
use parksim::ids::SequentialIdGenerator;
use parksim::time::ManualClock;
use parksim::{
    Error, FloorAvailability, ParkingService, SpotSize, TicketStatus, Vehicle, VehicleType,
};

fn sample_service() -> (ParkingService, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap());
    let service = ParkingService::builder()
        .id_generator(SequentialIdGenerator::new())
        .clock(clock.clone())
        .with_generated_lot()
        .build()
        .unwrap();
    (service, clock)
}

fn spot_size(service: &ParkingService, spot_id: &str) -> SpotSize {
    service.lot().unwrap().find_spot(spot_id).unwrap().size()
}

// =============================================================================
// PLACEMENT
// =============================================================================

#[test]
fn test_car_lands_on_first_medium_spot() {
    let (mut service, _) = sample_service();

    let ticket = service
        .check_in(Vehicle::new("TN-01-1111", VehicleType::Car))
        .unwrap();

    assert_eq!(ticket.floor_number(), 1);
    assert_eq!(ticket.spot_id(), "F1S2-#2");
    assert_eq!(spot_size(&service, ticket.spot_id()), SpotSize::Medium);
}

#[test]
fn test_sample_run_placements() {
    let (mut service, _) = sample_service();

    let car = service
        .check_in(Vehicle::new("TN-01-1111", VehicleType::Car))
        .unwrap();
    let bike = service
        .check_in(Vehicle::new("TN-02-2222", VehicleType::Motorcycle))
        .unwrap();

    assert_eq!(car.spot_id(), "F1S2-#2");
    assert_eq!(bike.spot_id(), "F1S1-#1");
    assert_eq!(
        service.availability(),
        vec![
            FloorAvailability {
                floor_number: 1,
                available: 2
            },
            FloorAvailability {
                floor_number: 2,
                available: 4
            },
        ]
    );
}

#[test]
fn test_cars_spill_to_second_floor() {
    let (mut service, _) = sample_service();

    let spots: Vec<String> = (0..6)
        .map(|i| {
            service
                .check_in(Vehicle::new(format!("CAR-{}", i), VehicleType::Car))
                .unwrap()
                .spot_id()
                .to_string()
        })
        .collect();

    assert_eq!(
        spots,
        vec!["F1S2-#2", "F1S3-#3", "F1S4-#4", "F2S2-#6", "F2S3-#7", "F2S4-#8"]
    );

    let err = service
        .check_in(Vehicle::new("CAR-6", VehicleType::Car))
        .unwrap_err();
    assert!(matches!(err, Error::NoSpotAvailable { .. }));

    // the small spots are still free for motorcycles
    let bike = service
        .check_in(Vehicle::new("MC-1", VehicleType::Motorcycle))
        .unwrap();
    assert_eq!(spot_size(&service, bike.spot_id()), SpotSize::Small);
}

// =============================================================================
// CAPACITY EXHAUSTION
// =============================================================================

#[test]
fn test_bus_rejected_when_large_spots_taken() {
    let (mut service, _) = sample_service();

    service
        .check_in(Vehicle::new("BUS-1", VehicleType::Bus))
        .unwrap();
    service
        .check_in(Vehicle::new("BUS-2", VehicleType::Bus))
        .unwrap();

    let lot_before = service.lot().unwrap().clone();
    let issued_before = service.tickets_issued();

    let err = service
        .check_in(Vehicle::new("BUS-3", VehicleType::Bus))
        .unwrap_err();

    assert_eq!(
        err,
        Error::NoSpotAvailable {
            plate: "BUS-3".to_string(),
            vehicle_type: VehicleType::Bus
        }
    );
    assert_eq!(service.lot().unwrap(), &lot_before);
    assert_eq!(service.tickets_issued(), issued_before);
}

#[test]
fn test_freed_spot_is_reused() {
    let (mut service, _) = sample_service();

    let first = service
        .check_in(Vehicle::new("BUS-1", VehicleType::Bus))
        .unwrap();
    service
        .check_in(Vehicle::new("BUS-2", VehicleType::Bus))
        .unwrap();
    service.check_out(first.id()).unwrap();

    let third = service
        .check_in(Vehicle::new("BUS-3", VehicleType::Bus))
        .unwrap();
    assert_eq!(third.spot_id(), first.spot_id());
}

#[test]
fn test_no_lot_registered() {
    let mut service = ParkingService::builder().build().unwrap();

    assert_eq!(
        service
            .check_in(Vehicle::new("CAR-1", VehicleType::Car))
            .unwrap_err(),
        Error::LotNotInitialized
    );
    assert!(service.availability().is_empty());
}

// =============================================================================
// BILLING
// =============================================================================

#[test]
fn test_motorcycle_immediate_checkout() {
    let (mut service, _) = sample_service();

    let ticket = service
        .check_in(Vehicle::new("MC-1", VehicleType::Motorcycle))
        .unwrap();
    let receipt = service.check_out(ticket.id()).unwrap();

    assert_eq!(receipt.fee(), 0.5);
    let closed = service.ticket(ticket.id()).unwrap();
    assert_eq!(closed.status(), TicketStatus::Closed);
    assert!(!service
        .lot()
        .unwrap()
        .find_spot(ticket.spot_id())
        .unwrap()
        .is_occupied());
}

#[test]
fn test_bus_parked_five_simulated_hours() {
    let (mut service, clock) = sample_service();

    let ticket = service
        .check_in(Vehicle::new("BUS-1", VehicleType::Bus))
        .unwrap();
    // 4.5 s -> 270 simulated minutes -> 5 billed hours
    clock.advance(Duration::milliseconds(4500));

    let receipt = service.check_out(ticket.id()).unwrap();
    assert_eq!(receipt.duration_minutes(), 270);
    assert_eq!(receipt.fee(), 15.0);
}

#[test]
fn test_configured_rates_and_factor() {
    let config = ParkingConfig::from_json(
        r#"{
            "rates": { "motorcycle": 1.0, "car": 2.0, "bus": 4.0 },
            "simulation_factor": 60.0
        }"#,
    )
    .unwrap();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap());
    let mut service = ParkingService::builder()
        .config(config)
        .clock(clock.clone())
        .with_generated_lot()
        .build()
        .unwrap();

    let ticket = service
        .check_in(Vehicle::new("CAR-1", VehicleType::Car))
        .unwrap();
    // 61 s * 60 -> 61 simulated minutes -> 2 hours
    clock.advance(Duration::seconds(61));

    let receipt = service.check_out(ticket.id()).unwrap();
    assert_eq!(receipt.duration_minutes(), 61);
    assert_eq!(receipt.fee(), 4.0);
}

#[test]
fn test_checkout_twice_fails() {
    let (mut service, _) = sample_service();
    let ticket = service
        .check_in(Vehicle::new("CAR-1", VehicleType::Car))
        .unwrap();

    service.check_out(ticket.id()).unwrap();
    let err = service.check_out(ticket.id()).unwrap_err();

    assert_eq!(err.classify(), parksim::ErrorSeverity::Recoverable);
    assert!(matches!(err, Error::InvalidTicket { .. }));
}

// =============================================================================
// AVAILABILITY
// =============================================================================

#[test]
fn test_availability_tracks_check_ins_and_outs() {
    let (mut service, _) = sample_service();

    // fill floor 1 completely, then spill one car onto floor 2
    let bike = service
        .check_in(Vehicle::new("MC-1", VehicleType::Motorcycle))
        .unwrap();
    let cars: Vec<_> = (0..4)
        .map(|i| {
            service
                .check_in(Vehicle::new(format!("CAR-{}", i), VehicleType::Car))
                .unwrap()
        })
        .collect();

    let report = service.availability();
    assert_eq!(report[0].available, 0);
    assert_eq!(report[1].available, 3);

    service.check_out(bike.id()).unwrap();
    service.check_out(cars[3].id()).unwrap();

    let report = service.availability();
    assert_eq!(report[0].available, 1);
    assert_eq!(report[1].available, 4);
}
