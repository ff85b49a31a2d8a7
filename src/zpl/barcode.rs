//! # ZPL Barcode Fields
//!
//! `^BY` sets the module width and bar height for every following barcode;
//! the symbology command then takes its data from the next `^FD` field.
//!
//! | Symbology | Command |
//! |-----------|---------|
//! | Code128 | `^BCN` |
//! | EAN-13 | `^BEN` |
//! | EAN-8 | `^B8N` |
//! | UPC-A | `^BUN` |
//! | UPC-E | `^B9N` |
//! | Code39 | `^B3N` |
//! | ITF | `^B2N` |
//! | Codabar | `^BKN` |
//! | Code93 | `^BAN` |
//!
//! [`Symbology::Other`] has no ZPL equivalent and is rejected.

use crate::capability::{BarcodeCommands, Capability, CapabilityKind};
use crate::command::Command;
use crate::error::ValidationError;
use crate::protocol::ProtocolId;
use crate::symbology::Symbology;
use crate::validate::Bounds;

use super::field_data;

pub const HEIGHT: Bounds = Bounds::clamp("barcode height", 1, 32000);
pub const MODULE_WIDTH: Bounds = Bounds::clamp("barcode module width", 1, 10);

/// ZPL barcode command for a symbology, normal orientation.
pub fn symbology_command(symbology: Symbology) -> Option<&'static str> {
    let cmd = match symbology {
        Symbology::Code128 => "^BCN",
        Symbology::Ean13 => "^BEN",
        Symbology::Ean8 => "^B8N",
        Symbology::UpcA => "^BUN",
        Symbology::UpcE => "^B9N",
        Symbology::Code39 => "^B3N",
        Symbology::Itf => "^B2N",
        Symbology::Codabar => "^BKN",
        Symbology::Code93 => "^BAN",
        Symbology::Other(_) => return None,
    };
    Some(cmd)
}

/// ZPL barcode capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Barcode;

impl Capability for Barcode {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Barcode
    }
}

impl BarcodeCommands for Barcode {
    /// `^BY,,h`: leaves width and ratio at the printer's values.
    fn set_height(&self, dots: u16) -> Command {
        Command::new(format!("^BY,,{}", HEIGHT.normalize(dots.into())))
    }

    fn set_width(&self, module: u8) -> Command {
        Command::new(format!("^BY{}", MODULE_WIDTH.normalize(module.into())))
    }

    fn print_barcode(&self, data: &[u8], symbology: Symbology) -> Result<Command, ValidationError> {
        let cmd = symbology_command(symbology).ok_or(ValidationError::UnsupportedSymbology {
            symbology,
            protocol: ProtocolId::Zpl,
        })?;
        symbology.validate(data)?;
        let field = field_data(data)?;

        let mut out = Vec::with_capacity(cmd.len() + field.len());
        out.extend_from_slice(cmd.as_bytes());
        out.extend(field);
        Ok(Command::new(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ean13_field() {
        let cmd = Barcode.print_barcode(b"123456789012", Symbology::Ean13).unwrap();
        assert_eq!(cmd.into_bytes(), b"^BEN^FD123456789012^FS".to_vec());
    }

    #[test]
    fn test_shared_validation() {
        assert_eq!(
            Barcode.print_barcode(b"", Symbology::Ean13),
            Err(ValidationError::EmptyData)
        );
        assert_eq!(
            Barcode.print_barcode(b"12345678901A", Symbology::Ean13),
            Err(ValidationError::NonDigit {
                position: 11,
                ch: 'A'
            })
        );
    }

    #[test]
    fn test_code128_rejects_caret() {
        assert!(matches!(
            Barcode.print_barcode(b"AB^XZ", Symbology::Code128),
            Err(ValidationError::ReservedCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_code128_rejects_bytes_that_are_not_utf8() {
        let result = Barcode.print_barcode(&[b'A', 0xFF], Symbology::Code128);
        assert_eq!(result, Err(ValidationError::InvalidUtf8 { position: 1 }));
    }

    #[test]
    fn test_other_unsupported() {
        assert_eq!(
            Barcode.print_barcode(b"123", Symbology::Other(75)),
            Err(ValidationError::UnsupportedSymbology {
                symbology: Symbology::Other(75),
                protocol: ProtocolId::Zpl,
            })
        );
    }

    #[test]
    fn test_every_named_symbology_has_a_command() {
        for symbology in Symbology::ALL {
            assert!(symbology_command(symbology).is_some(), "{}", symbology);
        }
    }

    #[test]
    fn test_module_settings_clamp() {
        assert_eq!(Barcode.set_width(0).into_bytes(), b"^BY1".to_vec());
        assert_eq!(Barcode.set_width(20).into_bytes(), b"^BY10".to_vec());
        assert_eq!(Barcode.set_height(100).into_bytes(), b"^BY,,100".to_vec());
        assert_eq!(Barcode.set_height(0).into_bytes(), b"^BY,,1".to_vec());
    }
}
