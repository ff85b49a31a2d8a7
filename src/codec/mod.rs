//! # Byte Codec Primitives
//!
//! Control-byte constants and the small encoding helpers every capability
//! module builds on.
//!
//! ## Escape Sequence Structure
//!
//! ESC/POS instructions follow three shapes:
//! - Single byte: `LF`, `HT`
//! - Prefix + selector: `ESC @`, `ESC 2`
//! - Prefix + selector + parameters: `ESC d n`, `GS k m n data...`
//!
//! ## Byte Order
//!
//! Multi-byte integers are **little-endian**: `u16` 0x1234 is sent as
//! `[0x34, 0x12]`.

pub mod cp437;

use crate::error::ValidationError;

/// NUL - parameter terminator in a few legacy commands
pub const NUL: u8 = 0x00;

/// HT (Horizontal Tab) - advance to next tab stop
pub const HT: u8 = 0x09;

/// LF (Line Feed) - print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - print and eject in page mode
pub const FF: u8 = 0x0C;

/// CR (Carriage Return) - ignored by most receipt printers
pub const CR: u8 = 0x0D;

/// DLE (Data Link Escape) - real-time command prefix
pub const DLE: u8 = 0x10;

/// ESC (Escape) - primary command prefix
///
/// Most ESC/POS commands begin with ESC (0x1B): initialization, text
/// emphasis, line spacing, paper feed.
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - prefix for kanji and NV image commands
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - extended command prefix
///
/// Barcodes, character size, cutter and raster graphics use GS (0x1D).
pub const GS: u8 = 0x1D;

/// Clamp `value` into `lo..=hi`.
///
/// Returns `lo` if `value < lo`, `hi` if `value > hi`, else `value`. Unlike
/// [`Ord::clamp`] this never panics: with `lo > hi` the lower bound wins for
/// small values and the upper bound for large ones.
///
/// ## Example
///
/// ```
/// use rollcode::codec::clamp;
///
/// assert_eq!(clamp(0u8, 1, 6), 1);
/// assert_eq!(clamp(10u8, 1, 6), 6);
/// assert_eq!(clamp(3u8, 1, 6), 3);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use rollcode::codec::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Reject an empty payload.
#[inline]
pub fn non_empty(data: &[u8]) -> Result<&[u8], ValidationError> {
    if data.is_empty() {
        Err(ValidationError::EmptyData)
    } else {
        Ok(data)
    }
}

/// One length byte followed by `data`.
///
/// Fails with [`ValidationError::TooLong`] above 255 bytes.
pub fn length_prefixed_u8(data: &[u8]) -> Result<Vec<u8>, ValidationError> {
    let len = u8::try_from(data.len()).map_err(|_| ValidationError::TooLong {
        max: u8::MAX as usize,
        actual: data.len(),
    })?;
    let mut out = Vec::with_capacity(1 + data.len());
    out.push(len);
    out.extend_from_slice(data);
    Ok(out)
}

/// Two little-endian length bytes followed by `data`.
///
/// Fails with [`ValidationError::TooLong`] above 65535 bytes.
pub fn length_prefixed_u16(data: &[u8]) -> Result<Vec<u8>, ValidationError> {
    let len = u16::try_from(data.len()).map_err(|_| ValidationError::TooLong {
        max: u16::MAX as usize,
        actual: data.len(),
    })?;
    let mut out = Vec::with_capacity(2 + data.len());
    out.extend_from_slice(&u16_le(len));
    out.extend_from_slice(data);
    Ok(out)
}
