//! # Error Types
//!
//! Three layers of errors:
//!
//! - [`ValidationError`]: an operation rejected its input. The caller fixes the
//!   input and calls again; nothing is retried automatically.
//! - [`TransportError`]: raised by a [`Transport`](crate::transport::Transport)
//!   implementation. Opaque to the encoder, optionally retryable.
//! - [`RollcodeError`]: the crate-level error wrapping both, plus registry and
//!   configuration failures.

use thiserror::Error;

use crate::capability::{CapabilityKind, QrErrorCorrection};
use crate::protocol::ProtocolId;
use crate::symbology::Symbology;

/// Result alias for crate-level operations.
pub type Result<T> = std::result::Result<T, RollcodeError>;

/// Main error type for rollcode operations
#[derive(Debug, Error)]
pub enum RollcodeError {
    /// An encode operation rejected its parameters
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Registry lookup for an identifier that is not registered
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    /// A protocol does not carry the requested capability
    #[error("Protocol {protocol} has no {capability} capability")]
    UnknownCapability {
        protocol: ProtocolId,
        capability: CapabilityKind,
    },

    /// Two aggregators registered under the same identifier
    #[error("Protocol {0} is registered more than once")]
    DuplicateProtocol(ProtocolId),

    /// The process-wide registry was installed twice
    #[error("Protocol registry is already initialized")]
    RegistryAlreadyInitialized,

    /// Printer profile lookup or parsing failed
    #[error("Profile error: {0}")]
    Profile(String),

    /// JSON (de)serialization of programs or profiles
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delivery failed at the transport boundary
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Input rejected by an encode operation.
///
/// Only operations documented as *reject* return these. Operations documented
/// as *clamp* normalize their input instead and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty data")]
    EmptyData,

    #[error("non-digit character {ch:?} at position {position}")]
    NonDigit { position: usize, ch: char },

    #[error("character {ch:?} at position {position} is not valid for {symbology}")]
    InvalidCharacter {
        position: usize,
        ch: char,
        symbology: Symbology,
    },

    #[error("{symbology} requires a length of {allowed:?}, got {actual}")]
    WrongLength {
        symbology: Symbology,
        actual: usize,
        allowed: &'static [usize],
    },

    #[error("{symbology} requires an even number of digits, got {actual}")]
    OddLength { symbology: Symbology, actual: usize },

    #[error("payload too long: {actual} bytes exceeds maximum of {max}")]
    TooLong { max: usize, actual: usize },

    #[error("{name} {value} is outside {lo}..={hi}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        lo: u32,
        hi: u32,
    },

    #[error("character {ch:?} at position {position} has no code page 437 encoding")]
    Unencodable { position: usize, ch: char },

    #[error("control character 0x{byte:02X} at position {position} is not allowed in text")]
    ControlCharacter { position: usize, byte: u8 },

    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 { position: usize },

    #[error("reserved character {ch:?} at position {position}")]
    ReservedCharacter { position: usize, ch: char },

    #[error("expected {expected} bytes of image data, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{symbology} is not supported by {protocol}")]
    UnsupportedSymbology {
        symbology: Symbology,
        protocol: ProtocolId,
    },

    #[error("{len} bytes do not fit in a QR code at error correction level {level}")]
    QrCapacity { len: usize, level: QrErrorCorrection },
}

/// Failure reported by a transport.
///
/// The encoder never inspects these beyond [`TransportError::is_retryable`],
/// which drives [`deliver_with_retry`](crate::transport::deliver_with_retry).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    retryable: bool,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// A failure that may succeed on a later attempt (busy device, timeout).
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
            source: None,
        }
    }

    /// A failure that will not go away by retrying (device gone, permission denied).
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
            source: None,
        }
    }

    /// Wrap an I/O error. Interrupted, timed-out and would-block errors are retryable.
    pub fn from_io(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let retryable = matches!(
            err.kind(),
            ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock
        );
        Self {
            message: format!("I/O error: {}", err),
            retryable,
            source: Some(Box::new(err)),
        }
    }

    /// Wrap an I/O error raised after `written` bytes already reached the
    /// device. Never retryable: a second attempt would repeat those bytes.
    pub fn partial_write(written: usize, err: std::io::Error) -> Self {
        Self {
            message: format!("I/O error after {} bytes were written: {}", written, err),
            retryable: false,
            source: Some(Box::new(err)),
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io(err)
    }
}
