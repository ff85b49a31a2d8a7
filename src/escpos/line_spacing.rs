//! # Line Spacing (ESC 2, ESC 3 n)

use crate::capability::{Capability, CapabilityKind, LineSpacingCommands};
use crate::codec::ESC;
use crate::command::Command;
use crate::validate::Bounds;

/// `ESC 3 n` takes one byte; larger requests clamp to 255 dots.
pub const SPACING: Bounds = Bounds::clamp("line spacing", 0, 255);

/// ESC/POS line spacing capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSpacing;

impl Capability for LineSpacing {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::LineSpacing
    }
}

impl LineSpacingCommands for LineSpacing {
    /// Restore the default spacing (about 1/6 inch).
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | ESC 2 |
    /// | Hex     | 1B 32 |
    fn default_spacing(&self) -> Command {
        Command::new(vec![ESC, b'2'])
    }

    /// Set spacing to `dots` motion units.
    ///
    /// | Format  | Bytes   |
    /// |---------|---------|
    /// | ASCII   | ESC 3 n |
    /// | Hex     | 1B 33 n |
    fn set_spacing(&self, dots: u16) -> Command {
        Command::new(vec![ESC, b'3', SPACING.normalize_u8(dots.into())])
    }
}
