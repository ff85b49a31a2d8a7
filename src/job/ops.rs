//! # Job Opcodes
//!
//! Protocol-neutral operations. Each op maps to exactly one capability call,
//! so a program compiles against any protocol carrying the capabilities it
//! uses.
//!
//! Ops serialize as internally tagged JSON objects:
//!
//! ```json
//! [
//!   {"op": "init"},
//!   {"op": "align", "alignment": "center"},
//!   {"op": "barcode", "data": "4006381333931", "symbology": "ean13"},
//!   {"op": "cut", "partial": true}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::capability::{Alignment, CapabilityKind, DrawerPin, QrOptions, Underline};
use crate::symbology::Symbology;

fn default_on_ms() -> u16 {
    100
}

fn default_off_ms() -> u16 {
    500
}

/// One job operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    // ========== Control ==========
    /// Reset printer state (ESC/POS `ESC @`).
    Init,

    /// Feed `lines` lines.
    Feed { lines: u8 },

    /// Cut paper. `partial: true` leaves a small hinge.
    Cut {
        #[serde(default)]
        partial: bool,
    },

    // ========== Content ==========
    /// Text without line termination.
    Text { text: String },

    /// One terminated line.
    Line { text: String },

    // ========== Style ==========
    Bold { on: bool },
    Underline { mode: Underline },
    Align { alignment: Alignment },
    Size { width: u8, height: u8 },
    LineSpacing { dots: u16 },
    DefaultLineSpacing,
    CodePage { page: u8 },

    // ========== Barcodes ==========
    BarcodeHeight { dots: u16 },
    BarcodeWidth { module: u8 },
    Barcode { data: String, symbology: Symbology },
    Qr {
        data: String,
        #[serde(default)]
        options: QrOptions,
    },

    // ========== Peripherals ==========
    OpenDrawer {
        #[serde(default)]
        pin: DrawerPin,
        #[serde(default = "default_on_ms")]
        on_ms: u16,
        #[serde(default = "default_off_ms")]
        off_ms: u16,
    },

    // ========== Labels ==========
    LabelStart,
    LabelEnd,
    FieldOrigin { x: u16, y: u16 },
    PrintWidth { dots: u16 },
    Quantity { copies: u32 },

    /// Bytes passed to the printer unchanged. Invalidates all tracked
    /// settings in the optimizer.
    Raw { bytes: Vec<u8> },
}

impl Op {
    /// Capability this op is encoded by, or `None` for [`Op::Raw`].
    pub fn capability(&self) -> Option<CapabilityKind> {
        let kind = match self {
            Op::Init | Op::Feed { .. } | Op::Cut { .. } => CapabilityKind::Control,
            Op::Text { .. } | Op::Line { .. } => CapabilityKind::Print,
            Op::Bold { .. } | Op::Underline { .. } | Op::Align { .. } | Op::Size { .. } => {
                CapabilityKind::TextStyle
            }
            Op::LineSpacing { .. } | Op::DefaultLineSpacing => CapabilityKind::LineSpacing,
            Op::CodePage { .. } => CapabilityKind::CodePage,
            Op::BarcodeHeight { .. } | Op::BarcodeWidth { .. } | Op::Barcode { .. } => {
                CapabilityKind::Barcode
            }
            Op::Qr { .. } => CapabilityKind::QrCode,
            Op::OpenDrawer { .. } => CapabilityKind::CashDrawer,
            Op::LabelStart
            | Op::LabelEnd
            | Op::FieldOrigin { .. }
            | Op::PrintWidth { .. }
            | Op::Quantity { .. } => CapabilityKind::Label,
            Op::Raw { .. } => return None,
        };
        Some(kind)
    }

    /// True for ops that only change a modal setting tracked by
    /// [`Session`](crate::session::Session).
    pub fn is_setting(&self) -> bool {
        matches!(
            self,
            Op::Bold { .. }
                | Op::Underline { .. }
                | Op::Align { .. }
                | Op::Size { .. }
                | Op::LineSpacing { .. }
                | Op::DefaultLineSpacing
                | Op::CodePage { .. }
                | Op::BarcodeHeight { .. }
                | Op::BarcodeWidth { .. }
        )
    }

    pub fn text(text: impl Into<String>) -> Self {
        Op::Text { text: text.into() }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Op::Line { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tagged_json() {
        let op: Op = serde_json::from_str(
            r#"{"op": "barcode", "data": "123456789012", "symbology": "ean13"}"#,
        )
        .unwrap();
        assert_eq!(
            op,
            Op::Barcode {
                data: "123456789012".into(),
                symbology: Symbology::Ean13
            }
        );
    }

    #[test]
    fn test_unit_variants() {
        assert_eq!(serde_json::to_string(&Op::Init).unwrap(), r#"{"op":"init"}"#);
        assert_eq!(
            serde_json::from_str::<Op>(r#"{"op": "default_line_spacing"}"#).unwrap(),
            Op::DefaultLineSpacing
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            serde_json::from_str::<Op>(r#"{"op": "cut"}"#).unwrap(),
            Op::Cut { partial: false }
        );
        assert_eq!(
            serde_json::from_str::<Op>(r#"{"op": "open_drawer"}"#).unwrap(),
            Op::OpenDrawer {
                pin: DrawerPin::Pin2,
                on_ms: 100,
                off_ms: 500
            }
        );
        let qr: Op = serde_json::from_str(r#"{"op": "qr", "data": "hi"}"#).unwrap();
        assert_eq!(
            qr,
            Op::Qr {
                data: "hi".into(),
                options: QrOptions::default()
            }
        );
    }

    #[test]
    fn test_unknown_op_rejected() {
        assert!(serde_json::from_str::<Op>(r#"{"op": "teleport"}"#).is_err());
    }

    #[test]
    fn test_capability_mapping() {
        assert_eq!(Op::Init.capability(), Some(CapabilityKind::Control));
        assert_eq!(Op::line("x").capability(), Some(CapabilityKind::Print));
        assert_eq!(Op::LabelEnd.capability(), Some(CapabilityKind::Label));
        assert_eq!(Op::Raw { bytes: vec![] }.capability(), None);
    }

    #[test]
    fn test_is_setting() {
        assert!(Op::Bold { on: true }.is_setting());
        assert!(Op::BarcodeWidth { module: 2 }.is_setting());
        assert!(!Op::Init.is_setting());
        assert!(!Op::text("x").is_setting());
        assert!(!Op::Raw { bytes: vec![] }.is_setting());
    }
}
