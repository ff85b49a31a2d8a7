//! # ESC/POS Protocol
//!
//! Command encoders for ESC/POS receipt printers (Epson TM series and the
//! many compatibles).
//!
//! ## Module Structure
//!
//! - [`control`]: init, feed, cut
//! - [`print`]: text in code page 437
//! - [`line_spacing`]: `ESC 2` / `ESC 3`
//! - [`text`]: emphasis, underline, size, alignment
//! - [`barcode`]: 1D barcodes via `GS k`
//! - [`qr`]: QR codes via `GS ( k`
//! - [`code_page`]: `ESC t`
//! - [`drawer`]: cash drawer kick-out
//! - [`raster`]: `GS v 0` bit images
//!
//! ## Usage Example
//!
//! ```
//! use rollcode::escpos::EscPos;
//! use rollcode::prelude::*;
//!
//! let printer = EscPos::new();
//! let mut data = Vec::new();
//!
//! data.extend(printer.control.init().into_bytes());
//! data.extend(printer.text_style.align(Alignment::Center).into_bytes());
//! data.extend(printer.text_style.bold(true).into_bytes());
//! data.extend(printer.print.line("RECEIPT")?.into_bytes());
//! data.extend(printer.text_style.bold(false).into_bytes());
//! data.extend(printer.control.feed_lines(3).into_bytes());
//! data.extend(printer.control.cut(CutMode::Partial).into_bytes());
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! # Ok::<(), rollcode::error::ValidationError>(())
//! ```

pub mod barcode;
pub mod code_page;
pub mod control;
pub mod drawer;
pub mod line_spacing;
pub mod print;
pub mod qr;
pub mod raster;
pub mod text;

pub use barcode::{Barcode, HriFont, HriPosition};
pub use code_page::CodePage;
pub use control::Control;
pub use drawer::CashDrawer;
pub use line_spacing::LineSpacing;
pub use print::Print;
pub use qr::Qr;
pub use raster::Raster;
pub use text::TextStyle;

use crate::capability::{Capability, CapabilityKind};

/// The complete ESC/POS capability set.
///
/// Fields are public so callers reach each family directly:
/// `printer.barcode.set_width(3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscPos {
    pub control: Control,
    pub print: Print,
    pub line_spacing: LineSpacing,
    pub text_style: TextStyle,
    pub barcode: Barcode,
    pub qr: Qr,
    pub code_page: CodePage,
    pub cash_drawer: CashDrawer,
    pub raster: Raster,
}

impl EscPos {
    /// Capabilities carried by this aggregator.
    pub const CAPABILITIES: &'static [CapabilityKind] = &[
        CapabilityKind::Control,
        CapabilityKind::Print,
        CapabilityKind::LineSpacing,
        CapabilityKind::TextStyle,
        CapabilityKind::Barcode,
        CapabilityKind::QrCode,
        CapabilityKind::CodePage,
        CapabilityKind::CashDrawer,
        CapabilityKind::Raster,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a capability module by kind.
    pub fn capability(&self, kind: CapabilityKind) -> Option<&dyn Capability> {
        match kind {
            CapabilityKind::Control => Some(&self.control),
            CapabilityKind::Print => Some(&self.print),
            CapabilityKind::LineSpacing => Some(&self.line_spacing),
            CapabilityKind::TextStyle => Some(&self.text_style),
            CapabilityKind::Barcode => Some(&self.barcode),
            CapabilityKind::QrCode => Some(&self.qr),
            CapabilityKind::CodePage => Some(&self.code_page),
            CapabilityKind::CashDrawer => Some(&self.cash_drawer),
            CapabilityKind::Raster => Some(&self.raster),
            CapabilityKind::Label => None,
        }
    }
}
