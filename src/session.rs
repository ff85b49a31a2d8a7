//! # Printer Session
//!
//! Tracks the modal settings a printer holds while a job runs. Capability
//! modules are stateless; whoever needs to know the current bold or barcode
//! width state keeps a `Session` next to the job and feeds it every op.
//!
//! A fresh session knows nothing: every setting is `None` until an op sets it
//! or [`Op::Init`] restores the power-on defaults. Unknown never compares
//! equal to a requested value, so nothing is dropped before the state is
//! known.

use crate::capability::{Alignment, Underline};
use crate::job::Op;

/// Line spacing setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    Default,
    Dots(u16),
}

/// Current modal settings, `None` where unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub bold: Option<bool>,
    pub underline: Option<Underline>,
    pub alignment: Option<Alignment>,
    /// (width, height) multipliers
    pub size: Option<(u8, u8)>,
    pub line_spacing: Option<Spacing>,
    pub code_page: Option<u8>,
    pub barcode_height: Option<u16>,
    pub barcode_width: Option<u8>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// State right after a printer reset.
    ///
    /// Code page and barcode geometry are printer-configurable defaults and
    /// stay unknown.
    pub fn after_init() -> Self {
        Self {
            bold: Some(false),
            underline: Some(Underline::Off),
            alignment: Some(Alignment::Left),
            size: Some((1, 1)),
            line_spacing: Some(Spacing::Default),
            ..Self::default()
        }
    }

    /// True if `op` would not change any tracked setting.
    pub fn is_redundant(&self, op: &Op) -> bool {
        match op {
            Op::Bold { on } => self.bold == Some(*on),
            Op::Underline { mode } => self.underline == Some(*mode),
            Op::Align { alignment } => self.alignment == Some(*alignment),
            Op::Size { width, height } => self.size == Some((*width, *height)),
            Op::LineSpacing { dots } => self.line_spacing == Some(Spacing::Dots(*dots)),
            Op::DefaultLineSpacing => self.line_spacing == Some(Spacing::Default),
            Op::CodePage { page } => self.code_page == Some(*page),
            Op::BarcodeHeight { dots } => self.barcode_height == Some(*dots),
            Op::BarcodeWidth { module } => self.barcode_width == Some(*module),
            _ => false,
        }
    }

    /// Record the effect of `op`.
    ///
    /// Returns `false` if the op was redundant; the session is unchanged in
    /// that case.
    pub fn apply(&mut self, op: &Op) -> bool {
        if self.is_redundant(op) {
            return false;
        }
        match op {
            Op::Init => *self = Self::after_init(),
            Op::Raw { .. } => *self = Self::new(),
            Op::Bold { on } => self.bold = Some(*on),
            Op::Underline { mode } => self.underline = Some(*mode),
            Op::Align { alignment } => self.alignment = Some(*alignment),
            Op::Size { width, height } => self.size = Some((*width, *height)),
            Op::LineSpacing { dots } => self.line_spacing = Some(Spacing::Dots(*dots)),
            Op::DefaultLineSpacing => self.line_spacing = Some(Spacing::Default),
            Op::CodePage { page } => self.code_page = Some(*page),
            // ZPL carries both in one ^BY command; a partial ^BY may reset
            // the other parameter, so each forgets the other.
            Op::BarcodeHeight { dots } => {
                self.barcode_height = Some(*dots);
                self.barcode_width = None;
            }
            Op::BarcodeWidth { module } => {
                self.barcode_width = Some(*module);
                self.barcode_height = None;
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_drops_nothing() {
        let session = Session::new();
        assert!(!session.is_redundant(&Op::Bold { on: false }));
        assert!(!session.is_redundant(&Op::Align {
            alignment: Alignment::Left
        }));
    }

    #[test]
    fn test_init_restores_defaults() {
        let mut session = Session::new();
        assert!(session.apply(&Op::Bold { on: true }));
        assert!(session.apply(&Op::Init));
        assert_eq!(session, Session::after_init());
        assert!(session.is_redundant(&Op::Bold { on: false }));
        assert!(session.is_redundant(&Op::Size {
            width: 1,
            height: 1
        }));
    }

    #[test]
    fn test_repeated_setting_is_redundant() {
        let mut session = Session::new();
        assert!(session.apply(&Op::CodePage { page: 16 }));
        assert!(!session.apply(&Op::CodePage { page: 16 }));
        assert!(session.apply(&Op::CodePage { page: 0 }));
    }

    #[test]
    fn test_raw_forgets_everything() {
        let mut session = Session::after_init();
        assert!(session.apply(&Op::Raw { bytes: vec![0x1B, 0x45, 1] }));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_barcode_geometry_invalidates_counterpart() {
        let mut session = Session::new();
        session.apply(&Op::BarcodeHeight { dots: 80 });
        session.apply(&Op::BarcodeWidth { module: 3 });
        assert!(!session.is_redundant(&Op::BarcodeHeight { dots: 80 }));
        assert!(session.is_redundant(&Op::BarcodeWidth { module: 3 }));
    }

    #[test]
    fn test_content_ops_always_apply() {
        let mut session = Session::after_init();
        assert!(session.apply(&Op::text("hello")));
        assert!(session.apply(&Op::text("hello")));
    }
}
