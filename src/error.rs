//! Error types for the MySQL field packet codec.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for field packet encoding and decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer ended before a declared field could be read.
    #[error("Truncated packet: need {needed} bytes, have {available} at {location}")]
    TruncatedPacket {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// A length-encoded integer started with a byte outside the grammar.
    #[error("Invalid length prefix: {prefix:#04x}")]
    InvalidLengthPrefix { prefix: u8 },

    /// A string field is too long to be length-prefixed.
    #[error("Field {field} too large to encode: {length} bytes")]
    FieldTooLarge { field: &'static str, length: usize },

    /// Payload does not fit the 3-byte packet length.
    #[error("Packet payload too large: {length} bytes (max {max})")]
    PacketTooLarge { length: usize, max: usize },

    /// The header's declared payload length disagrees with the decoded body.
    #[error("Packet length mismatch: header declares {declared} bytes, body used {actual}")]
    PacketLengthMismatch { declared: usize, actual: usize },

    /// Protocol error.
    #[error("Protocol error: {message}")]
    Protocol { message: String },
}

impl Error {
    /// Create a truncated packet error recording the caller's location.
    #[track_caller]
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedPacket {
            needed,
            available,
            location: Location::caller(),
        }
    }

    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Whether the connection's framing can no longer be trusted after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TruncatedPacket { .. }
                | Error::InvalidLengthPrefix { .. }
                | Error::PacketLengthMismatch { .. }
        )
    }
}
