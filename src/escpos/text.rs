//! # Text Style Commands
//!
//! Character emphasis, size, font and alignment. All settings are modal: they
//! stay in effect until changed or until `ESC @` resets the printer.
//!
//! | Command | Bytes | Effect |
//! |---------|-------|--------|
//! | Emphasis | `ESC E n` | bold on (1) / off (0) |
//! | Underline | `ESC - n` | 0 off, 1 single, 2 double |
//! | Double-strike | `ESC G n` | overprint each line |
//! | Font | `ESC M n` | 0 Font A, 1 Font B |
//! | Size | `GS ! n` | width and height multipliers |
//! | Alignment | `ESC a n` | 0 left, 1 center, 2 right |
//! | Reverse | `GS B n` | white on black |
//! | Upside-down | `ESC { n` | rotate 180° |

use crate::capability::{Alignment, Capability, CapabilityKind, Font, TextStyleCommands, Underline};
use crate::codec::{ESC, GS};
use crate::command::Command;
use crate::validate::Bounds;

/// Character magnification, both axes.
pub const MAGNIFICATION: Bounds = Bounds::clamp("character magnification", 1, 8);

/// ESC/POS text style capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle;

impl TextStyle {
    /// Double-strike mode (ESC G n). Visually close to bold on most
    /// thermal heads.
    pub fn double_strike(&self, on: bool) -> Command {
        Command::new(vec![ESC, b'G', on as u8])
    }

    /// Upside-down mode (ESC { n). Only takes effect at the start of a line.
    pub fn upside_down(&self, on: bool) -> Command {
        Command::new(vec![ESC, b'{', on as u8])
    }
}

impl Capability for TextStyle {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::TextStyle
    }
}

impl TextStyleCommands for TextStyle {
    fn bold(&self, on: bool) -> Command {
        Command::new(vec![ESC, b'E', on as u8])
    }

    fn underline(&self, mode: Underline) -> Command {
        let n = match mode {
            Underline::Off => 0,
            Underline::Single => 1,
            Underline::Double => 2,
        };
        Command::new(vec![ESC, b'-', n])
    }

    fn align(&self, alignment: Alignment) -> Command {
        let n = match alignment {
            Alignment::Left => 0,
            Alignment::Center => 1,
            Alignment::Right => 2,
        };
        Command::new(vec![ESC, b'a', n])
    }

    /// # Select Character Size (GS ! n)
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes    |
    /// |---------|----------|
    /// | ASCII   | GS ! n   |
    /// | Hex     | 1D 21 n  |
    ///
    /// - Bits 4-7: width multiplier minus one
    /// - Bits 0-3: height multiplier minus one
    ///
    /// Both multipliers clamp to 1..=8, so `size(0, 0)` is normal size and
    /// `size(9, 9)` is 8×8.
    fn size(&self, width: u8, height: u8) -> Command {
        let w = MAGNIFICATION.normalize_u8(width.into()) - 1;
        let h = MAGNIFICATION.normalize_u8(height.into()) - 1;
        Command::new(vec![GS, b'!', (w << 4) | h])
    }

    fn font(&self, font: Font) -> Command {
        let n = match font {
            Font::A => 0,
            Font::B => 1,
        };
        Command::new(vec![ESC, b'M', n])
    }

    /// White-on-black printing (GS B n).
    fn invert(&self, on: bool) -> Command {
        Command::new(vec![GS, b'B', on as u8])
    }
}
