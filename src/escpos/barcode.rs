//! # ESC/POS Barcode Commands
//!
//! 1D barcodes are printed with `GS k` in its length-prefixed form
//! ("function B"). Height, module width and the human-readable text (HRI) are
//! modal settings sent beforehand:
//!
//! ```
//! use rollcode::escpos::EscPos;
//! use rollcode::prelude::*;
//!
//! let printer = EscPos::new();
//! let mut data = Vec::new();
//! data.extend(printer.barcode.set_height(80).into_bytes());
//! data.extend(printer.barcode.set_width(3).into_bytes());
//! data.extend(printer.barcode.print_barcode(b"HELLO-39", Symbology::Code39)?.into_bytes());
//! # Ok::<(), rollcode::error::ValidationError>(())
//! ```
//!
//! ## Symbology Codes
//!
//! | Symbology | m |
//! |-----------|---|
//! | UPC-A | 65 |
//! | UPC-E | 66 |
//! | EAN-13 | 67 |
//! | EAN-8 | 68 |
//! | Code39 | 69 |
//! | ITF | 70 |
//! | Codabar | 71 |
//! | Code93 | 72 |
//! | Code128 | 73 |
//!
//! Code128 data is passed through as-is. Printers expect it to begin with a
//! code set selector (`{A`, `{B` or `{C`); callers that want code set B for
//! plain text prepend `{B` themselves.

use serde::{Deserialize, Serialize};

use crate::capability::{BarcodeCommands, Capability, CapabilityKind};
use crate::codec::{self, GS};
use crate::command::Command;
use crate::error::ValidationError;
use crate::symbology::Symbology;
use crate::validate::Bounds;

/// `GS h n`: bar height in dots.
pub const HEIGHT: Bounds = Bounds::clamp("barcode height", 1, 255);

/// `GS w n`: narrow module width in dots.
pub const MODULE_WIDTH: Bounds = Bounds::clamp("barcode module width", 1, 6);

/// Position of the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HriPosition {
    #[default]
    None,
    Above,
    Below,
    Both,
}

/// Font of the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HriFont {
    #[default]
    A,
    B,
}

/// Function-B symbology byte for `GS k`.
pub fn symbology_code(symbology: Symbology) -> u8 {
    match symbology {
        Symbology::UpcA => 65,
        Symbology::UpcE => 66,
        Symbology::Ean13 => 67,
        Symbology::Ean8 => 68,
        Symbology::Code39 => 69,
        Symbology::Itf => 70,
        Symbology::Codabar => 71,
        Symbology::Code93 => 72,
        Symbology::Code128 => 73,
        Symbology::Other(m) => m,
    }
}

/// ESC/POS barcode capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Barcode;

impl Barcode {
    /// # Select HRI Position (GS H n)
    ///
    /// | n | Position |
    /// |---|----------|
    /// | 0 | not printed |
    /// | 1 | above |
    /// | 2 | below |
    /// | 3 | both |
    pub fn set_hri_position(&self, position: HriPosition) -> Command {
        let n = match position {
            HriPosition::None => 0,
            HriPosition::Above => 1,
            HriPosition::Below => 2,
            HriPosition::Both => 3,
        };
        Command::new(vec![GS, b'H', n])
    }

    /// Select HRI font (GS f n).
    pub fn set_hri_font(&self, font: HriFont) -> Command {
        let n = match font {
            HriFont::A => 0,
            HriFont::B => 1,
        };
        Command::new(vec![GS, b'f', n])
    }
}

impl Capability for Barcode {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Barcode
    }
}

impl BarcodeCommands for Barcode {
    /// # Set Barcode Height (GS h n)
    ///
    /// | Format  | Bytes   |
    /// |---------|---------|
    /// | ASCII   | GS h n  |
    /// | Hex     | 1D 68 n |
    ///
    /// Clamped to 1..=255 dots.
    fn set_height(&self, dots: u16) -> Command {
        Command::new(vec![GS, b'h', HEIGHT.normalize_u8(dots.into())])
    }

    /// # Set Module Width (GS w n)
    ///
    /// | Format  | Bytes   |
    /// |---------|---------|
    /// | ASCII   | GS w n  |
    /// | Hex     | 1D 77 n |
    ///
    /// Clamped to 1..=6 dots. Many printers ignore values below 2.
    fn set_width(&self, module: u8) -> Command {
        Command::new(vec![GS, b'w', MODULE_WIDTH.normalize_u8(module.into())])
    }

    /// # Print Barcode (GS k m n d1...dn)
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | GS k m n data |
    /// | Hex     | 1D 6B m n data |
    ///
    /// - `m`: symbology code (65..=73, see module table)
    /// - `n`: data length
    ///
    /// The data is validated against the symbology's rules first; nothing is
    /// emitted on error.
    fn print_barcode(&self, data: &[u8], symbology: Symbology) -> Result<Command, ValidationError> {
        symbology.validate(data)?;
        let body = codec::length_prefixed_u8(data)?;

        let mut cmd = Vec::with_capacity(3 + body.len());
        cmd.extend([GS, b'k', symbology_code(symbology)]);
        cmd.extend(body);
        Ok(Command::new(cmd))
    }
}
