//! # Printer Control (ESC @, ESC d, ESC J, GS V)
//!
//! Reset, paper feed and cutter commands.

use crate::capability::{Capability, CapabilityKind, ControlCommands, CutMode};
use crate::codec::{ESC, GS};
use crate::command::Command;

/// ESC/POS control capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Control;

impl Control {
    /// # Feed by Dots (ESC J n)
    ///
    /// Prints the line buffer and feeds `n` motion units (usually dots at
    /// 203 dpi, so `n = 8` is about 1mm).
    ///
    /// | Format  | Bytes    |
    /// |---------|----------|
    /// | ASCII   | ESC J n  |
    /// | Hex     | 1B 4A n  |
    pub fn feed_dots(&self, dots: u8) -> Command {
        Command::new(vec![ESC, b'J', dots])
    }

    /// # Feed and Cut (GS V m n)
    ///
    /// Feeds to the cutter position plus `n` motion units, then cuts.
    /// `m = 65` full cut, `m = 66` partial cut.
    pub fn feed_and_cut(&self, mode: CutMode, dots: u8) -> Command {
        let m = match mode {
            CutMode::Full => 65,
            CutMode::Partial => 66,
        };
        Command::new(vec![GS, b'V', m, dots])
    }
}

impl Capability for Control {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Control
    }
}

impl ControlCommands for Control {
    /// # Initialize Printer (ESC @)
    ///
    /// Clears the print buffer and restores power-on defaults: emphasis off,
    /// size 1×1, left alignment, default line spacing. NV memory and
    /// configuration switches are untouched.
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | ESC @ |
    /// | Hex     | 1B 40 |
    fn init(&self) -> Command {
        Command::new(vec![ESC, b'@'])
    }

    /// # Print and Feed Lines (ESC d n)
    ///
    /// | Format  | Bytes    |
    /// |---------|----------|
    /// | ASCII   | ESC d n  |
    /// | Hex     | 1B 64 n  |
    fn feed_lines(&self, lines: u8) -> Command {
        Command::new(vec![ESC, b'd', lines])
    }

    /// # Cut Paper (GS V m)
    ///
    /// Cuts at the current position without feeding. `m = 0` full,
    /// `m = 1` partial. Use [`Control::feed_and_cut`] to move printed content
    /// past the blade first.
    fn cut(&self, mode: CutMode) -> Command {
        let m = match mode {
            CutMode::Full => 0,
            CutMode::Partial => 1,
        };
        Command::new(vec![GS, b'V', m])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init() {
        assert_eq!(Control.init().into_bytes(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(Control.feed_lines(0).into_bytes(), vec![0x1B, 0x64, 0x00]);
        assert_eq!(Control.feed_lines(255).into_bytes(), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_feed_dots() {
        assert_eq!(Control.feed_dots(24).into_bytes(), vec![0x1B, 0x4A, 24]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(Control.cut(CutMode::Full).into_bytes(), vec![0x1D, 0x56, 0]);
        assert_eq!(Control.cut(CutMode::Partial).into_bytes(), vec![0x1D, 0x56, 1]);
    }

    #[test]
    fn test_feed_and_cut() {
        assert_eq!(
            Control.feed_and_cut(CutMode::Full, 3).into_bytes(),
            vec![0x1D, 0x56, 65, 3]
        );
        assert_eq!(
            Control.feed_and_cut(CutMode::Partial, 0).into_bytes(),
            vec![0x1D, 0x56, 66, 0]
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Control.kind(), CapabilityKind::Control);
        assert_eq!(Control.name(), "Control");
    }
}
