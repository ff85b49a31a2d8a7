//! # Character Code Table (ESC t n)
//!
//! Common pages: 0 = PC437 (USA), 2 = PC850, 16 = WPC1252, 17 = PC866.
//! Table numbers are printer-specific; unknown values are ignored by the
//! printer, so `n` is passed through unchecked.

use crate::capability::{Capability, CapabilityKind, CodePageCommands};
use crate::codec::ESC;
use crate::command::Command;

#[derive(Debug, Clone, Copy, Default)]
pub struct CodePage;

impl Capability for CodePage {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::CodePage
    }
}

impl CodePageCommands for CodePage {
    fn select(&self, page: u8) -> Command {
        Command::new(vec![ESC, b't', page])
    }
}
