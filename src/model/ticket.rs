use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Spot, Timestamp, Vehicle};
use crate::error::{Error, Result};

/// Lifecycle state of a ticket; only ever moves from ACTIVE to CLOSED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Active,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TicketStatus::Active => "ACTIVE",
            TicketStatus::Closed => "CLOSED",
        })
    }
}

/// Record of one vehicle occupying one spot from entry to exit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    vehicle: Vehicle,
    spot_id: String,
    floor_number: u32,
    entry_time: Timestamp,
    exit_time: Option<Timestamp>,
    status: TicketStatus,
    fee: f64,
}

impl Ticket {
    /// Issues an ACTIVE ticket for `vehicle` parked at `spot`
    pub fn new(id: impl Into<String>, vehicle: Vehicle, spot: &Spot, entry_time: Timestamp) -> Self {
        Ticket {
            id: id.into(),
            vehicle,
            spot_id: spot.id().to_string(),
            floor_number: spot.floor_number(),
            entry_time,
            exit_time: None,
            status: TicketStatus::Active,
            fee: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn spot_id(&self) -> &str {
        &self.spot_id
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn entry_time(&self) -> Timestamp {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<Timestamp> {
        self.exit_time
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Fee charged at checkout; zero while the ticket is active
    pub fn fee(&self) -> f64 {
        self.fee
    }

    pub fn is_active(&self) -> bool {
        self.status == TicketStatus::Active
    }

    /// Closes the ticket, stamping exit time and fee
    ///
    /// A closed ticket cannot be closed again.
    pub fn close(&mut self, exit_time: Timestamp, fee: f64) -> Result<()> {
        if !self.is_active() {
            return Err(Error::InvalidTicket {
                ticket_id: self.id.clone(),
            });
        }
        self.exit_time = Some(exit_time);
        self.fee = fee;
        self.status = TicketStatus::Closed;
        Ok(())
    }
}

/// Payment state of a receipt; no payment flow exists, so always pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentStatus::Pending => "PENDING",
        })
    }
}

/// Immutable checkout snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    ticket_id: String,
    fee: f64,
    duration_minutes: u64,
    payment_status: PaymentStatus,
}

impl Receipt {
    pub fn new(ticket_id: impl Into<String>, fee: f64, duration_minutes: u64) -> Self {
        Receipt {
            ticket_id: ticket_id.into(),
            fee,
            duration_minutes,
            payment_status: PaymentStatus::Pending,
        }
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }

    /// Parked duration in simulated minutes
    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2} for {} min ({})",
            self.ticket_id, self.fee, self.duration_minutes, self.payment_status
        )
    }
}
