//! # Change International Font/Encoding (^CIn)
//!
//! `^CI28` selects UTF-8, which matches how field data is sent. Values clamp
//! to the documented range 0..=36.

use crate::capability::{Capability, CapabilityKind, CodePageCommands};
use crate::command::Command;
use crate::validate::Bounds;

pub const ENCODING: Bounds = Bounds::clamp("character encoding", 0, 36);

/// UTF-8 encoding selector.
pub const UTF8: u8 = 28;

#[derive(Debug, Clone, Copy, Default)]
pub struct CodePage;

impl Capability for CodePage {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::CodePage
    }
}

impl CodePageCommands for CodePage {
    fn select(&self, page: u8) -> Command {
        Command::new(format!("^CI{}", ENCODING.normalize(page.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(CodePage.select(UTF8).into_bytes(), b"^CI28".to_vec());
        assert_eq!(CodePage.select(200).into_bytes(), b"^CI36".to_vec());
    }
}
