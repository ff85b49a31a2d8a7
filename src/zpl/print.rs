//! # ZPL Text Fields
//!
//! Text is placed with `^FO` and drawn with the current font. Field data is
//! sent as UTF-8.

use crate::capability::{Capability, CapabilityKind, PrintCommands};
use crate::codec::LF;
use crate::command::Command;
use crate::error::ValidationError;
use crate::validate::Bounds;

use super::field_text;

/// `^A0` character cell size in dots.
pub const FONT_DOTS: Bounds = Bounds::clamp("font size", 10, 32000);

/// ZPL print capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Print;

impl Print {
    /// # Scalable Font (^A0N,h,w)
    ///
    /// Selects the resident scalable font 0, normal orientation, for the next
    /// field. Height and width clamp to 10..=32000 dots.
    pub fn font(&self, height: u16, width: u16) -> Command {
        let h = FONT_DOTS.normalize(height.into());
        let w = FONT_DOTS.normalize(width.into());
        Command::new(format!("^A0N,{},{}", h, w))
    }
}

impl Capability for Print {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Print
    }
}

impl PrintCommands for Print {
    fn text(&self, text: &str) -> Result<Command, ValidationError> {
        field_text(text).map(Command::new)
    }

    /// As [`text`](PrintCommands::text), followed by a line feed. The printer
    /// ignores the feed; it keeps generated label source readable.
    fn line(&self, text: &str) -> Result<Command, ValidationError> {
        let mut bytes = field_text(text)?;
        bytes.push(LF);
        Ok(Command::new(bytes))
    }
}
