//! # Capability Contracts
//!
//! A capability is one family of printer instructions. Each family is a trait;
//! every protocol ships one canonical implementation per capability it
//! supports, and test doubles implement the same traits.
//!
//! | Capability | Trait | ESC/POS | ZPL |
//! |------------|-------|---------|-----|
//! | Control | [`ControlCommands`] | yes | - |
//! | Print | [`PrintCommands`] | yes | yes |
//! | LineSpacing | [`LineSpacingCommands`] | yes | - |
//! | TextStyle | [`TextStyleCommands`] | yes | - |
//! | Barcode | [`BarcodeCommands`] | yes | yes |
//! | QrCode | [`QrCommands`] | yes | yes |
//! | CodePage | [`CodePageCommands`] | yes | yes |
//! | CashDrawer | [`CashDrawerCommands`] | yes | - |
//! | Raster | [`RasterCommands`] | yes | - |
//! | Label | [`LabelCommands`] | - | yes |
//!
//! Operations returning a bare [`Command`] clamp their numeric parameters and
//! cannot fail. Operations returning `Result` validate their input and return
//! no bytes on error.
//!
//! Implementations hold no mutable state; they are `Send + Sync` and can be
//! shared across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::ValidationError;
use crate::symbology::Symbology;

/// Identity of a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapabilityKind {
    Control,
    Print,
    LineSpacing,
    TextStyle,
    Barcode,
    QrCode,
    CodePage,
    CashDrawer,
    Raster,
    Label,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 10] = [
        CapabilityKind::Control,
        CapabilityKind::Print,
        CapabilityKind::LineSpacing,
        CapabilityKind::TextStyle,
        CapabilityKind::Barcode,
        CapabilityKind::QrCode,
        CapabilityKind::CodePage,
        CapabilityKind::CashDrawer,
        CapabilityKind::Raster,
        CapabilityKind::Label,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CapabilityKind::Control => "Control",
            CapabilityKind::Print => "Print",
            CapabilityKind::LineSpacing => "LineSpacing",
            CapabilityKind::TextStyle => "TextStyle",
            CapabilityKind::Barcode => "Barcode",
            CapabilityKind::QrCode => "QrCode",
            CapabilityKind::CodePage => "CodePage",
            CapabilityKind::CashDrawer => "CashDrawer",
            CapabilityKind::Raster => "Raster",
            CapabilityKind::Label => "Label",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common supertrait of every capability module.
pub trait Capability: Send + Sync {
    fn kind(&self) -> CapabilityKind;

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

// ============================================================================
// PARAMETER TYPES
// ============================================================================

/// Paper cut style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    #[default]
    Full,
    /// Leaves a small hinge so the receipt does not drop.
    Partial,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Underline thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Underline {
    #[default]
    Off,
    /// 1 dot
    Single,
    /// 2 dots
    Double,
}

/// Resident character font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Font {
    /// 12×24 dots
    #[default]
    A,
    /// 9×17 dots
    B,
}

/// Cash drawer kick-out connector pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerPin {
    #[default]
    Pin2,
    Pin5,
}

/// QR error correction level.
///
/// | Level | Recovery |
/// |-------|----------|
/// | L | ~7% |
/// | M | ~15% |
/// | Q | ~25% |
/// | H | ~30% |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QrErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl fmt::Display for QrErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            QrErrorCorrection::L => "L",
            QrErrorCorrection::M => "M",
            QrErrorCorrection::Q => "Q",
            QrErrorCorrection::H => "H",
        };
        f.write_str(letter)
    }
}

/// QR symbol options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Module (cell) size in dots; ZPL calls this magnification. Clamped per protocol.
    pub module_size: u8,
    pub error_correction: QrErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            module_size: 4,
            error_correction: QrErrorCorrection::M,
        }
    }
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Printer reset, paper feed and cutter.
pub trait ControlCommands: Capability {
    fn init(&self) -> Command;
    fn feed_lines(&self, lines: u8) -> Command;
    fn cut(&self, mode: CutMode) -> Command;
}

/// Literal text.
pub trait PrintCommands: Capability {
    /// Text without line termination.
    fn text(&self, text: &str) -> Result<Command, ValidationError>;

    /// Text terminated as one printed line.
    fn line(&self, text: &str) -> Result<Command, ValidationError>;
}

/// Distance between printed lines.
pub trait LineSpacingCommands: Capability {
    fn default_spacing(&self) -> Command;
    fn set_spacing(&self, dots: u16) -> Command;
}

/// Character emphasis, size and placement.
pub trait TextStyleCommands: Capability {
    fn bold(&self, on: bool) -> Command;
    fn underline(&self, mode: Underline) -> Command;
    fn align(&self, alignment: Alignment) -> Command;
    /// Width and height multipliers.
    fn size(&self, width: u8, height: u8) -> Command;
    fn font(&self, font: Font) -> Command;
    fn invert(&self, on: bool) -> Command;
}

/// 1D barcodes.
pub trait BarcodeCommands: Capability {
    fn set_height(&self, dots: u16) -> Command;
    fn set_width(&self, module: u8) -> Command;
    fn print_barcode(&self, data: &[u8], symbology: Symbology) -> Result<Command, ValidationError>;
}

/// QR codes, emitted as one complete sequence (configure, store, print).
pub trait QrCommands: Capability {
    fn print_qr(&self, data: &[u8], options: QrOptions) -> Result<Command, ValidationError>;
}

/// Character code table selection.
pub trait CodePageCommands: Capability {
    fn select(&self, page: u8) -> Command;
}

/// Cash drawer kick-out pulse.
pub trait CashDrawerCommands: Capability {
    fn pulse(&self, pin: DrawerPin, on_ms: u16, off_ms: u16) -> Command;
}

/// Pre-packed 1-bit raster images (MSB = leftmost dot, 1 = black).
pub trait RasterCommands: Capability {
    fn image(&self, width_bytes: u16, height: u16, data: &[u8]) -> Result<Command, ValidationError>;
}

/// Label format framing and field placement.
pub trait LabelCommands: Capability {
    fn start(&self) -> Command;
    fn end(&self) -> Command;
    fn field_origin(&self, x: u16, y: u16) -> Command;
    fn print_width(&self, dots: u16) -> Command;
    fn quantity(&self, copies: u32) -> Command;
}
