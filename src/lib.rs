//! # Rollcode - Receipt and Label Printer Command Encoder
//!
//! Rollcode turns typed calls into the byte streams that receipt and label
//! printers execute. It provides:
//!
//! - **Capability modules**: one trait per instruction family (control, text,
//!   barcodes, QR, cash drawer, raster, labels), one implementation per protocol
//! - **Protocols**: ESC/POS for receipt printers, ZPL for label printers
//! - **Validation**: every parameter is either clamped or rejected, per operation
//! - **Job programs**: protocol-neutral ops loadable from JSON, optimized and
//!   compiled for any protocol
//! - **Transport**: a delivery trait with retry and backoff
//!
//! ## Quick Start
//!
//! ```
//! use rollcode::prelude::*;
//! use rollcode::registry;
//! use rollcode::transport::{deliver_with_retry, MemoryTransport, RetryPolicy};
//!
//! // Pick a protocol by name, e.g. from configuration
//! let printer = registry::global().resolve("escpos")?;
//!
//! // Build a job; commands run in push order
//! let mut job = JobBuffer::new();
//! job.push(printer.control()?.init());
//! job.push(printer.text_style()?.align(Alignment::Center));
//! job.push(printer.print()?.line("THANK YOU")?);
//! job.push(printer.barcode()?.set_height(80));
//! job.push(printer.barcode()?.set_width(3));
//! job.push(printer.barcode()?.print_barcode(b"4006381333931", Symbology::Ean13)?);
//! job.push(printer.control()?.cut(CutMode::Partial));
//!
//! // Send it
//! let mut transport = MemoryTransport::new();
//! deliver_with_retry(&mut transport, &job, &RetryPolicy::default())?;
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | Control bytes, clamping, length prefixes, CP437 |
//! | [`capability`] | Capability traits and parameter types |
//! | [`symbology`] | Barcode data rules |
//! | [`validate`] | Clamp/reject policies |
//! | [`escpos`] | ESC/POS capability modules |
//! | [`zpl`] | ZPL capability modules |
//! | [`protocol`] | Protocol ids and the [`Aggregator`] sum type |
//! | [`registry`] | Protocol lookup, process-wide registry |
//! | [`job`] | Protocol-neutral programs, optimizer, compiler |
//! | [`session`] | Tracked printer settings |
//! | [`config`] | Printer profiles |
//! | [`transport`] | Delivery and retry |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! Encoding is silent. [`tracing`] events are emitted at the edges only:
//! registry installation, optimizer drops and delivery attempts. Install any
//! `tracing` subscriber to see them.

pub mod capability;
pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod escpos;
pub mod job;
pub mod protocol;
pub mod registry;
pub mod session;
pub mod symbology;
pub mod transport;
pub mod validate;
pub mod zpl;

// Re-exports for convenience
pub use command::{Command, JobBuffer};
pub use config::PrinterProfile;
pub use error::{Result, RollcodeError, TransportError, ValidationError};
pub use protocol::{Aggregator, ProtocolId};
pub use registry::Registry;
pub use symbology::Symbology;

/// Capability traits and parameter types, for glob import.
pub mod prelude {
    pub use crate::capability::{
        Alignment, BarcodeCommands, Capability, CapabilityKind, CashDrawerCommands,
        CodePageCommands, ControlCommands, CutMode, DrawerPin, Font, LabelCommands,
        LineSpacingCommands, PrintCommands, QrCommands, QrErrorCorrection, QrOptions,
        RasterCommands, TextStyleCommands, Underline,
    };
    pub use crate::command::{Command, JobBuffer};
    pub use crate::symbology::Symbology;
}
