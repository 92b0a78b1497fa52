//! Error types for the parking simulation

use crate::model::VehicleType;
use thiserror::Error;

/// Parking simulation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Domain errors
    /// No parking lot has been registered yet
    ///
    /// **Triggered by:** `check_in` or `check_out` before a lot was saved
    /// **Prevention:** Build the service with a lot, or call `install_lot` first
    #[error("Parking lot not initialized")]
    LotNotInitialized,

    /// Every spot the vehicle may use is occupied
    ///
    /// **Triggered by:** Capacity exhaustion for the vehicle's allowed size classes
    /// **Recovery:** Classified as Recoverable - retry later or route elsewhere
    #[error("No spot available for vehicle {plate} ({vehicle_type})")]
    NoSpotAvailable {
        /// Plate number of the rejected vehicle
        plate: String,
        /// Type of the rejected vehicle
        vehicle_type: VehicleType,
    },

    /// Ticket is unknown or already closed
    ///
    /// **Triggered by:** `check_out` with an id never issued, or a second `check_out`
    #[error("Invalid ticket: {ticket_id}")]
    InvalidTicket {
        /// The ticket id that was presented
        ticket_id: String,
    },

    /// The lot cannot be replaced while vehicles are parked in it
    ///
    /// **Triggered by:** `install_lot` with ACTIVE tickets outstanding
    /// **Recovery:** Check every vehicle out, then install the new lot
    #[error("Parking lot in use by {active_tickets} active tickets")]
    LotInUse {
        /// Tickets still ACTIVE on the current lot
        active_tickets: usize,
    },

    // Configuration errors
    /// A configuration value failed validation
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfig {
        /// Offending field path
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Configuration text could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// General runtime fault
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fault that indicates a broken setup or a bug
    Fatal,
    /// Expected outcome during normal operation
    Recoverable,
}

impl Error {
    /// Create a runtime error with a message
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::RuntimeError(msg.into())
    }

    /// Create a configuration validation error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::LotNotInitialized => ErrorSeverity::Recoverable,
            Error::NoSpotAvailable { .. } => ErrorSeverity::Recoverable,
            Error::InvalidTicket { .. } => ErrorSeverity::Recoverable,
            Error::LotInUse { .. } => ErrorSeverity::Recoverable,

            Error::InvalidConfig { .. } => ErrorSeverity::Fatal,
            Error::ConfigParse(_) => ErrorSeverity::Fatal,
            Error::Io(_) => ErrorSeverity::Fatal,
            Error::RuntimeError(_) => ErrorSeverity::Fatal,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for parking operations
pub type Result<T> = std::result::Result<T, Error>;
