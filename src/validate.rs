//! # Validation Rules
//!
//! Every numeric parameter has one documented policy, chosen per operation:
//!
//! | Policy | Out-of-range input | Used for |
//! |--------|-------------------|----------|
//! | [`Policy::Clamp`] | replaced by the nearest bound | harmless over/undershoot (barcode width, line spacing) |
//! | [`Policy::Reject`] | [`ValidationError::OutOfRange`] | values that would corrupt the command framing (raster size) |
//!
//! Rules are pure: the same input always produces the same output and no
//! rule touches any state.

use qrcode::{EcLevel, QrCode};

use crate::capability::QrErrorCorrection;
use crate::codec;
use crate::error::ValidationError;

/// A pure check of one parameter, producing its normalized value.
pub trait ValidationRule<T: ?Sized> {
    type Normalized;

    fn check(&self, value: &T) -> Result<Self::Normalized, ValidationError>;
}

/// What to do with an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Clamp,
    Reject,
}

/// Closed numeric range with a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub name: &'static str,
    pub lo: u32,
    pub hi: u32,
    pub policy: Policy,
}

impl Bounds {
    pub const fn clamp(name: &'static str, lo: u32, hi: u32) -> Self {
        Self {
            name,
            lo,
            hi,
            policy: Policy::Clamp,
        }
    }

    pub const fn reject(name: &'static str, lo: u32, hi: u32) -> Self {
        Self {
            name,
            lo,
            hi,
            policy: Policy::Reject,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    /// Clamp regardless of policy. Total.
    #[inline]
    pub fn normalize(&self, value: u32) -> u32 {
        codec::clamp(value, self.lo, self.hi)
    }

    /// Clamp to a `u8`. Only meaningful for bounds with `hi <= 255`.
    #[inline]
    pub fn normalize_u8(&self, value: u32) -> u8 {
        self.normalize(value).min(u8::MAX as u32) as u8
    }

    /// Clamp to a `u16`. Only meaningful for bounds with `hi <= 65535`.
    #[inline]
    pub fn normalize_u16(&self, value: u32) -> u16 {
        self.normalize(value).min(u16::MAX as u32) as u16
    }
}

impl ValidationRule<u32> for Bounds {
    type Normalized = u32;

    fn check(&self, value: &u32) -> Result<u32, ValidationError> {
        match self.policy {
            Policy::Clamp => Ok(self.normalize(*value)),
            Policy::Reject if self.contains(*value) => Ok(*value),
            Policy::Reject => Err(ValidationError::OutOfRange {
                name: self.name,
                value: *value,
                lo: self.lo,
                hi: self.hi,
            }),
        }
    }
}

/// Every byte must be an ASCII digit.
pub fn digits(data: &[u8]) -> Result<(), ValidationError> {
    match data.iter().position(|b| !b.is_ascii_digit()) {
        Some(position) => Err(ValidationError::NonDigit {
            position,
            ch: char::from(data[position]),
        }),
        None => Ok(()),
    }
}

/// Reject control characters other than line feed, carriage return and tab.
///
/// `position` in the error is the character index.
pub fn printable_text(text: &str) -> Result<(), ValidationError> {
    for (position, ch) in text.chars().enumerate() {
        if ch.is_control() && !matches!(ch, '\n' | '\r' | '\t') {
            return Err(ValidationError::ControlCharacter {
                position,
                byte: ch as u32 as u8,
            });
        }
    }
    Ok(())
}

/// The payload must fit in a version 40 QR symbol at `level`.
///
/// Empty payloads are rejected too; printers silently skip them.
pub fn qr_payload(data: &[u8], level: QrErrorCorrection) -> Result<(), ValidationError> {
    codec::non_empty(data)?;
    let ec_level = match level {
        QrErrorCorrection::L => EcLevel::L,
        QrErrorCorrection::M => EcLevel::M,
        QrErrorCorrection::Q => EcLevel::Q,
        QrErrorCorrection::H => EcLevel::H,
    };
    QrCode::with_error_correction_level(data, ec_level)
        .map(|_| ())
        .map_err(|_| ValidationError::QrCapacity {
            len: data.len(),
            level,
        })
}
