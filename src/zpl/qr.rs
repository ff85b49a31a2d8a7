//! # ZPL QR Code (^BQ)
//!
//! `^BQN,2,m` selects model 2 at magnification `m`; the field data starts
//! with the error correction letter and `A` (automatic input mode):
//!
//! ```text
//! ^BQN,2,4^FDMA,https://example.com^FS
//! ```

use crate::capability::{Capability, CapabilityKind, QrCommands, QrOptions};
use crate::command::Command;
use crate::error::ValidationError;
use crate::validate::{self, Bounds};

use super::field_data;

pub const MAGNIFICATION: Bounds = Bounds::clamp("QR magnification", 1, 10);

#[derive(Debug, Clone, Copy, Default)]
pub struct Qr;

impl Capability for Qr {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::QrCode
    }
}

impl QrCommands for Qr {
    fn print_qr(&self, data: &[u8], options: QrOptions) -> Result<Command, ValidationError> {
        validate::qr_payload(data, options.error_correction)?;

        let mut payload = format!("{}A,", options.error_correction).into_bytes();
        payload.extend_from_slice(data);
        let field = field_data(&payload).map_err(|err| shift_position(err, 3))?;

        let mag = MAGNIFICATION.normalize(options.module_size.into());
        let mut out = format!("^BQN,2,{}", mag).into_bytes();
        out.extend(field);
        Ok(Command::new(out))
    }
}

/// Report positions relative to the caller's data, not the `MA,` prefix.
fn shift_position(err: ValidationError, by: usize) -> ValidationError {
    match err {
        ValidationError::ReservedCharacter { position, ch } => ValidationError::ReservedCharacter {
            position: position - by,
            ch,
        },
        ValidationError::ControlCharacter { position, byte } => ValidationError::ControlCharacter {
            position: position - by,
            byte,
        },
        ValidationError::InvalidUtf8 { position } => ValidationError::InvalidUtf8 {
            position: position - by,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::QrErrorCorrection;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qr_field() {
        let cmd = Qr.print_qr(b"https://example.com", QrOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(cmd.into_bytes()).unwrap(),
            "^BQN,2,4^FDMA,https://example.com^FS"
        );
    }

    #[test]
    fn test_error_correction_letter_and_magnification() {
        let cmd = Qr
            .print_qr(
                b"x",
                QrOptions {
                    module_size: 30,
                    error_correction: QrErrorCorrection::H,
                },
            )
            .unwrap();
        assert_eq!(cmd.into_bytes(), b"^BQN,2,10^FDHA,x^FS".to_vec());
    }

    #[test]
    fn test_reserved_position_relative_to_data() {
        assert_eq!(
            Qr.print_qr(b"ab~c", QrOptions::default()),
            Err(ValidationError::ReservedCharacter {
                position: 2,
                ch: '~'
            })
        );
    }

    #[test]
    fn test_binary_payload_rejected() {
        assert_eq!(
            Qr.print_qr(&[b'x', 0xC3], QrOptions::default()),
            Err(ValidationError::InvalidUtf8 { position: 1 })
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            Qr.print_qr(b"", QrOptions::default()),
            Err(ValidationError::EmptyData)
        );
    }
}
