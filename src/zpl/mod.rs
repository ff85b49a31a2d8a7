//! # ZPL Protocol
//!
//! Command encoders for Zebra label printers. ZPL is a text protocol: every
//! command is a caret (`^`) or tilde (`~`) followed by two letters and
//! comma-separated parameters, so `Command` bytes here are always UTF-8.
//!
//! ```
//! use rollcode::zpl::Zpl;
//! use rollcode::prelude::*;
//!
//! let printer = Zpl::new();
//! let mut label = Vec::new();
//! label.extend(printer.label.start().into_bytes());
//! label.extend(printer.label.field_origin(50, 50).into_bytes());
//! label.extend(printer.print.text("SHIP TO")?.into_bytes());
//! label.extend(printer.label.end().into_bytes());
//!
//! assert_eq!(String::from_utf8(label).unwrap(), "^XA^FO50,50^FDSHIP TO^FS^XZ");
//! # Ok::<(), rollcode::error::ValidationError>(())
//! ```

pub mod barcode;
pub mod code_page;
pub mod label;
pub mod print;
pub mod qr;

pub use barcode::Barcode;
pub use code_page::CodePage;
pub use label::Label;
pub use print::Print;
pub use qr::Qr;

use crate::capability::{Capability, CapabilityKind};
use crate::error::ValidationError;

/// The complete ZPL capability set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zpl {
    pub label: Label,
    pub print: Print,
    pub barcode: Barcode,
    pub qr: Qr,
    pub code_page: CodePage,
}

impl Zpl {
    pub const CAPABILITIES: &'static [CapabilityKind] = &[
        CapabilityKind::Label,
        CapabilityKind::Print,
        CapabilityKind::Barcode,
        CapabilityKind::QrCode,
        CapabilityKind::CodePage,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn capability(&self, kind: CapabilityKind) -> Option<&dyn Capability> {
        match kind {
            CapabilityKind::Label => Some(&self.label),
            CapabilityKind::Print => Some(&self.print),
            CapabilityKind::Barcode => Some(&self.barcode),
            CapabilityKind::QrCode => Some(&self.qr),
            CapabilityKind::CodePage => Some(&self.code_page),
            _ => None,
        }
    }
}

// ============================================================================
// FIELD DATA
// ============================================================================

/// Check characters destined for a `^FD` field.
///
/// `^` and `~` would start a new command; control characters (C0 and C1)
/// are rejected outright.
fn check_field(chars: impl Iterator<Item = char>) -> Result<(), ValidationError> {
    for (position, ch) in chars.enumerate() {
        if ch == '^' || ch == '~' {
            return Err(ValidationError::ReservedCharacter { position, ch });
        }
        if ch.is_control() {
            // Unicode controls all sit below U+00A0.
            return Err(ValidationError::ControlCharacter {
                position,
                byte: ch as u32 as u8,
            });
        }
    }
    Ok(())
}

/// `^FD` + data + `^FS`. The data must be UTF-8; error positions past
/// decoding are character indices.
pub(crate) fn field_data(data: &[u8]) -> Result<Vec<u8>, ValidationError> {
    let text = std::str::from_utf8(data).map_err(|err| ValidationError::InvalidUtf8 {
        position: err.valid_up_to(),
    })?;
    field_text(text)
}

/// `^FD` + text + `^FS`; error positions are character indices.
pub(crate) fn field_text(text: &str) -> Result<Vec<u8>, ValidationError> {
    check_field(text.chars())?;
    Ok(wrap_field(text.as_bytes()))
}

fn wrap_field(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 6);
    out.extend_from_slice(b"^FD");
    out.extend_from_slice(data);
    out.extend_from_slice(b"^FS");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capability_lookup_matches_declared_set() {
        let printer = Zpl::new();
        for kind in CapabilityKind::ALL {
            let module = printer.capability(kind);
            assert_eq!(module.is_some(), Zpl::CAPABILITIES.contains(&kind), "{}", kind);
            if let Some(module) = module {
                assert_eq!(module.kind(), kind);
            }
        }
    }

    #[test]
    fn test_field_data_wraps() {
        assert_eq!(field_data(b"12345").unwrap(), b"^FD12345^FS".to_vec());
    }

    #[test]
    fn test_field_rejects_command_prefixes() {
        assert_eq!(
            field_text("A^XZ"),
            Err(ValidationError::ReservedCharacter {
                position: 1,
                ch: '^'
            })
        );
        assert_eq!(
            field_data(b"~JA"),
            Err(ValidationError::ReservedCharacter {
                position: 0,
                ch: '~'
            })
        );
    }

    #[test]
    fn test_field_rejects_control_characters() {
        assert_eq!(
            field_text("Line\nTwo"),
            Err(ValidationError::ControlCharacter {
                position: 4,
                byte: 0x0A
            })
        );
    }

    #[test]
    fn test_field_rejects_c1_controls() {
        assert_eq!(
            field_text("ab\u{85}"),
            Err(ValidationError::ControlCharacter {
                position: 2,
                byte: 0x85
            })
        );
    }

    #[test]
    fn test_field_data_requires_utf8() {
        assert_eq!(
            field_data(&[b'A', 0xFF]),
            Err(ValidationError::InvalidUtf8 { position: 1 })
        );
        assert_eq!(
            field_data("Zürich".as_bytes()).unwrap(),
            "^FDZürich^FS".as_bytes().to_vec()
        );
    }

    #[test]
    fn test_field_text_positions_are_char_indices() {
        assert!(matches!(
            field_text("Zürich^"),
            Err(ValidationError::ReservedCharacter { position: 6, .. })
        ));
        assert_eq!(field_text("Zürich").unwrap(), "^FDZürich^FS".as_bytes().to_vec());
    }
}
