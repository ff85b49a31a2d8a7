//! # Raster Bit Image (GS v 0)
//!
//! Prints a pre-packed monochrome bitmap. Image processing (scaling,
//! dithering) is the caller's job; this module only frames the bytes.
//!
//! ## Protocol Details
//!
//! | Format  | Bytes |
//! |---------|-------|
//! | ASCII   | GS v 0 m xL xH yL yH d1...dk |
//! | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
//!
//! - `m`: scale mode, always 0 (normal)
//! - `x`: width in **bytes** (8 dots each)
//! - `y`: height in dots
//! - `k = x × y`
//!
//! ## Data Format
//!
//! Row-major. Within each byte the MSB is the leftmost dot; 1 = black.
//!
//! ```text
//! Byte: 0b11110000
//!       ████░░░░
//! ```
//!
//! Dimensions out of range are rejected (not clamped): a wrong header would
//! make the printer consume the following commands as image data.

use crate::capability::{Capability, CapabilityKind, RasterCommands};
use crate::codec::{GS, u16_le};
use crate::command::Command;
use crate::error::ValidationError;
use crate::validate::{Bounds, ValidationRule};

pub const WIDTH_BYTES: Bounds = Bounds::reject("raster width in bytes", 1, 4095);
pub const HEIGHT: Bounds = Bounds::reject("raster height", 1, 4095);

#[derive(Debug, Clone, Copy, Default)]
pub struct Raster;

impl Capability for Raster {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Raster
    }
}

impl RasterCommands for Raster {
    fn image(&self, width_bytes: u16, height: u16, data: &[u8]) -> Result<Command, ValidationError> {
        WIDTH_BYTES.check(&u32::from(width_bytes))?;
        HEIGHT.check(&u32::from(height))?;

        let expected = usize::from(width_bytes) * usize::from(height);
        if data.len() != expected {
            return Err(ValidationError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut cmd = Vec::with_capacity(8 + data.len());
        cmd.extend([GS, b'v', b'0', 0]);
        cmd.extend(u16_le(width_bytes));
        cmd.extend(u16_le(height));
        cmd.extend_from_slice(data);
        Ok(Command::new(cmd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_header() {
        let data = vec![0xFF; 72 * 2];
        let cmd = Raster.image(72, 2, &data).unwrap();
        assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 72, 0, 2, 0]);
        assert_eq!(cmd.len(), 8 + 144);
    }

    #[test]
    fn test_image_checkerboard() {
        let cmd = Raster.image(1, 2, &[0b1010_1010, 0b0101_0101]).unwrap();
        assert_eq!(
            cmd.into_bytes(),
            vec![0x1D, 0x76, 0x30, 0x00, 1, 0, 2, 0, 0xAA, 0x55]
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Raster.image(0, 10, &[]),
            Err(ValidationError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            Raster.image(10, 0, &[]),
            Err(ValidationError::OutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            Raster.image(2, 2, &[0; 3]),
            Err(ValidationError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(Raster.image(4096, 1, &[]).is_err());
    }
}
