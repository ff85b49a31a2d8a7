//! # Text Printing
//!
//! Text is checked for embedded control characters (an `ESC` inside a
//! customer name would otherwise be executed as a command) and encoded to
//! code page 437. Both checks reject; nothing is substituted.

use crate::capability::{Capability, CapabilityKind, PrintCommands};
use crate::codec::{ESC, LF, cp437};
use crate::command::Command;
use crate::error::ValidationError;
use crate::validate;

/// ESC/POS print capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Print;

impl Print {
    /// Bare line feed: print the buffer and advance one line.
    pub fn newline(&self) -> Command {
        Command::new(vec![LF])
    }

    /// Print the buffer and feed `lines` lines (ESC d n).
    pub fn print_and_feed(&self, lines: u8) -> Command {
        Command::new(vec![ESC, b'd', lines])
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, ValidationError> {
        validate::printable_text(text)?;
        cp437::encode(text)
    }
}

impl Capability for Print {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Print
    }
}

impl PrintCommands for Print {
    fn text(&self, text: &str) -> Result<Command, ValidationError> {
        self.encode(text).map(Command::new)
    }

    fn line(&self, text: &str) -> Result<Command, ValidationError> {
        let mut bytes = self.encode(text)?;
        bytes.push(LF);
        Ok(Command::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_passthrough() {
        assert_eq!(Print.text("RECEIPT").unwrap().into_bytes(), b"RECEIPT".to_vec());
    }

    #[test]
    fn test_empty_text_is_allowed() {
        assert!(Print.text("").unwrap().is_empty());
        assert_eq!(Print.line("").unwrap().into_bytes(), vec![0x0A]);
    }

    #[test]
    fn test_line_appends_lf() {
        assert_eq!(
            Print.line("Café").unwrap().into_bytes(),
            vec![b'C', b'a', b'f', 0x82, 0x0A]
        );
    }

    #[test]
    fn test_rejects_embedded_escape() {
        assert_eq!(
            Print.text("Bob\x1B@").unwrap_err(),
            ValidationError::ControlCharacter {
                position: 3,
                byte: 0x1B
            }
        );
    }

    #[test]
    fn test_rejects_unencodable() {
        assert!(matches!(
            Print.line("☕ 2.50").unwrap_err(),
            ValidationError::Unencodable { position: 0, .. }
        ));
    }

    #[test]
    fn test_tabs_and_newlines_pass() {
        assert_eq!(
            Print.text("A\tB\n").unwrap().into_bytes(),
            vec![b'A', 0x09, b'B', 0x0A]
        );
    }

    #[test]
    fn test_newline_and_feed() {
        assert_eq!(Print.newline().into_bytes(), vec![0x0A]);
        assert_eq!(Print.print_and_feed(2).into_bytes(), vec![0x1B, 0x64, 2]);
    }
}
