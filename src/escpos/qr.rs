//! # ESC/POS QR Code (GS ( k)
//!
//! A QR code takes five `GS ( k` function calls, always emitted together:
//!
//! | Fn | cn fn | Bytes | Purpose |
//! |----|-------|-------|---------|
//! | 165 | 49 65 | `1D 28 6B 04 00 31 41 32 00` | select model 2 |
//! | 167 | 49 67 | `1D 28 6B 03 00 31 43 n` | module size |
//! | 169 | 49 69 | `1D 28 6B 03 00 31 45 n` | error correction |
//! | 180 | 49 80 | `1D 28 6B pL pH 31 50 30 data` | store data |
//! | 181 | 49 81 | `1D 28 6B 03 00 31 51 30` | print stored symbol |
//!
//! `pL pH` is the little-endian length of the data plus three.

use crate::capability::{Capability, CapabilityKind, QrCommands, QrErrorCorrection, QrOptions};
use crate::codec::{GS, u16_le};
use crate::command::Command;
use crate::error::ValidationError;
use crate::validate::{self, Bounds};

/// Module size in dots.
pub const MODULE_SIZE: Bounds = Bounds::clamp("QR module size", 1, 16);

const CN: u8 = 49;

fn function(params: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(5 + params.len());
    out.extend([GS, b'(', b'k']);
    out.extend(u16_le(params.len() as u16));
    out.extend_from_slice(params);
    out
}

fn ec_byte(level: QrErrorCorrection) -> u8 {
    match level {
        QrErrorCorrection::L => 48,
        QrErrorCorrection::M => 49,
        QrErrorCorrection::Q => 50,
        QrErrorCorrection::H => 51,
    }
}

/// ESC/POS QR capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Qr;

impl Capability for Qr {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::QrCode
    }
}

impl QrCommands for Qr {
    /// Emit the full configure, store, print sequence.
    ///
    /// Rejects empty data and data that does not fit a version 40 symbol at
    /// the requested error correction level. Module size clamps to 1..=16.
    fn print_qr(&self, data: &[u8], options: QrOptions) -> Result<Command, ValidationError> {
        // At most 7089 bytes pass, so the u16 length field cannot overflow.
        validate::qr_payload(data, options.error_correction)?;

        let module = MODULE_SIZE.normalize_u8(options.module_size.into());

        let mut out = Vec::with_capacity(data.len() + 40);
        out.extend(function(&[CN, 65, 50, 0]));
        out.extend(function(&[CN, 67, module]));
        out.extend(function(&[CN, 69, ec_byte(options.error_correction)]));

        let mut store = Vec::with_capacity(3 + data.len());
        store.extend([CN, 80, 48]);
        store.extend_from_slice(data);
        out.extend(function(&store));

        out.extend(function(&[CN, 81, 48]));
        Ok(Command::new(out))
    }
}
