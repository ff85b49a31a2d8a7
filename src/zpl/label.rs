//! # Label Format Commands
//!
//! Every ZPL label is framed by `^XA` ... `^XZ`. Inside the frame, `^FO` sets
//! where the next field is drawn, relative to the label home set by `^LH`.
//!
//! Coordinates and dimensions are dots (203 dpi: 8 dots/mm) and clamp to the
//! printer's accepted range instead of failing.

use crate::capability::{Capability, CapabilityKind, LabelCommands};
use crate::command::Command;
use crate::validate::Bounds;

pub const COORDINATE: Bounds = Bounds::clamp("label coordinate", 0, 32000);
pub const PRINT_WIDTH: Bounds = Bounds::clamp("print width", 2, 32000);
pub const LABEL_LENGTH: Bounds = Bounds::clamp("label length", 1, 32000);
pub const QUANTITY: Bounds = Bounds::clamp("label quantity", 1, 99_999_999);

/// ZPL label capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Label;

impl Label {
    /// # Label Home (^LHx,y)
    ///
    /// Shifts the origin of every following `^FO`.
    pub fn home(&self, x: u16, y: u16) -> Command {
        let x = COORDINATE.normalize(x.into());
        let y = COORDINATE.normalize(y.into());
        Command::new(format!("^LH{},{}", x, y))
    }

    /// # Label Length (^LLn)
    ///
    /// Only needed for continuous media; gap and mark media are measured by
    /// the printer.
    pub fn label_length(&self, dots: u16) -> Command {
        Command::new(format!("^LL{}", LABEL_LENGTH.normalize(dots.into())))
    }
}

impl Capability for Label {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::Label
    }
}

impl LabelCommands for Label {
    fn start(&self) -> Command {
        Command::new("^XA")
    }

    fn end(&self) -> Command {
        Command::new("^XZ")
    }

    fn field_origin(&self, x: u16, y: u16) -> Command {
        let x = COORDINATE.normalize(x.into());
        let y = COORDINATE.normalize(y.into());
        Command::new(format!("^FO{},{}", x, y))
    }

    fn print_width(&self, dots: u16) -> Command {
        Command::new(format!("^PW{}", PRINT_WIDTH.normalize(dots.into())))
    }

    /// # Print Quantity (^PQn)
    ///
    /// Number of copies of this label. Clamped to 1..=99,999,999.
    fn quantity(&self, copies: u32) -> Command {
        Command::new(format!("^PQ{}", QUANTITY.normalize(copies)))
    }
}
