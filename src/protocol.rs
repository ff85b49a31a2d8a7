//! # Protocols and Aggregators
//!
//! [`Aggregator`] is the registry's unit: one value per wire protocol, bundling
//! every capability module that protocol supports. Callers that know their
//! protocol at compile time use [`EscPos`] or [`Zpl`] directly; callers that
//! pick a protocol from configuration go through an `Aggregator` and its
//! fallible accessors:
//!
//! ```
//! use rollcode::{Aggregator, ProtocolId, RollcodeError};
//!
//! let zpl = Aggregator::new(ProtocolId::Zpl);
//! assert!(zpl.barcode().is_ok());
//! assert!(matches!(
//!     zpl.cash_drawer(),
//!     Err(RollcodeError::UnknownCapability { .. })
//! ));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::{
    BarcodeCommands, Capability, CapabilityKind, CashDrawerCommands, CodePageCommands,
    ControlCommands, LabelCommands, LineSpacingCommands, PrintCommands, QrCommands,
    RasterCommands, TextStyleCommands,
};
use crate::error::{Result, RollcodeError};
use crate::escpos::EscPos;
use crate::zpl::Zpl;

/// Wire protocol identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolId {
    EscPos,
    Zpl,
}

impl ProtocolId {
    pub const ALL: [ProtocolId; 2] = [ProtocolId::EscPos, ProtocolId::Zpl];

    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolId::EscPos => "escpos",
            ProtocolId::Zpl => "zpl",
        }
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolId {
    type Err = RollcodeError;

    /// Accepts `escpos`, `esc/pos`, `esc-pos` and `zpl`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "escpos" | "esc/pos" | "esc-pos" => Ok(ProtocolId::EscPos),
            "zpl" => Ok(ProtocolId::Zpl),
            _ => Err(RollcodeError::UnknownProtocol(s.to_string())),
        }
    }
}

/// One protocol's complete capability set.
#[derive(Debug, Clone, Copy)]
pub enum Aggregator {
    EscPos(EscPos),
    Zpl(Zpl),
}

impl Aggregator {
    pub fn new(id: ProtocolId) -> Self {
        match id {
            ProtocolId::EscPos => Aggregator::EscPos(EscPos::new()),
            ProtocolId::Zpl => Aggregator::Zpl(Zpl::new()),
        }
    }

    pub fn id(&self) -> ProtocolId {
        match self {
            Aggregator::EscPos(_) => ProtocolId::EscPos,
            Aggregator::Zpl(_) => ProtocolId::Zpl,
        }
    }

    /// Declared capability set.
    pub fn capabilities(&self) -> &'static [CapabilityKind] {
        match self {
            Aggregator::EscPos(_) => EscPos::CAPABILITIES,
            Aggregator::Zpl(_) => Zpl::CAPABILITIES,
        }
    }

    pub fn supports(&self, kind: CapabilityKind) -> bool {
        self.capabilities().contains(&kind)
    }

    pub fn capability(&self, kind: CapabilityKind) -> Result<&dyn Capability> {
        let module = match self {
            Aggregator::EscPos(p) => p.capability(kind),
            Aggregator::Zpl(p) => p.capability(kind),
        };
        module.ok_or_else(|| self.missing(kind))
    }

    fn missing(&self, capability: CapabilityKind) -> RollcodeError {
        RollcodeError::UnknownCapability {
            protocol: self.id(),
            capability,
        }
    }

    pub fn as_escpos(&self) -> Option<&EscPos> {
        match self {
            Aggregator::EscPos(p) => Some(p),
            Aggregator::Zpl(_) => None,
        }
    }

    pub fn as_zpl(&self) -> Option<&Zpl> {
        match self {
            Aggregator::Zpl(p) => Some(p),
            Aggregator::EscPos(_) => None,
        }
    }

    // ========================================================================
    // TYPED ACCESSORS
    // ========================================================================

    pub fn control(&self) -> Result<&dyn ControlCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.control),
            Aggregator::Zpl(_) => Err(self.missing(CapabilityKind::Control)),
        }
    }

    pub fn print(&self) -> Result<&dyn PrintCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.print),
            Aggregator::Zpl(p) => Ok(&p.print),
        }
    }

    pub fn line_spacing(&self) -> Result<&dyn LineSpacingCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.line_spacing),
            Aggregator::Zpl(_) => Err(self.missing(CapabilityKind::LineSpacing)),
        }
    }

    pub fn text_style(&self) -> Result<&dyn TextStyleCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.text_style),
            Aggregator::Zpl(_) => Err(self.missing(CapabilityKind::TextStyle)),
        }
    }

    pub fn barcode(&self) -> Result<&dyn BarcodeCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.barcode),
            Aggregator::Zpl(p) => Ok(&p.barcode),
        }
    }

    pub fn qr(&self) -> Result<&dyn QrCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.qr),
            Aggregator::Zpl(p) => Ok(&p.qr),
        }
    }

    pub fn code_page(&self) -> Result<&dyn CodePageCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.code_page),
            Aggregator::Zpl(p) => Ok(&p.code_page),
        }
    }

    pub fn cash_drawer(&self) -> Result<&dyn CashDrawerCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.cash_drawer),
            Aggregator::Zpl(_) => Err(self.missing(CapabilityKind::CashDrawer)),
        }
    }

    pub fn raster(&self) -> Result<&dyn RasterCommands> {
        match self {
            Aggregator::EscPos(p) => Ok(&p.raster),
            Aggregator::Zpl(_) => Err(self.missing(CapabilityKind::Raster)),
        }
    }

    pub fn label(&self) -> Result<&dyn LabelCommands> {
        match self {
            Aggregator::Zpl(p) => Ok(&p.label),
            Aggregator::EscPos(_) => Err(self.missing(CapabilityKind::Label)),
        }
    }
}

impl From<EscPos> for Aggregator {
    fn from(p: EscPos) -> Self {
        Aggregator::EscPos(p)
    }
}

impl From<Zpl> for Aggregator {
    fn from(p: Zpl) -> Self {
        Aggregator::Zpl(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_id_parse() {
        for s in ["escpos", "ESC/POS", "esc-pos", "EscPos"] {
            assert_eq!(s.parse::<ProtocolId>().unwrap(), ProtocolId::EscPos, "{}", s);
        }
        assert_eq!("ZPL".parse::<ProtocolId>().unwrap(), ProtocolId::Zpl);
        assert!(matches!(
            "starprnt".parse::<ProtocolId>(),
            Err(RollcodeError::UnknownProtocol(s)) if s == "starprnt"
        ));
    }

    #[test]
    fn test_protocol_id_display_round_trips() {
        for id in ProtocolId::ALL {
            assert_eq!(id.to_string().parse::<ProtocolId>().unwrap(), id);
        }
    }

    #[test]
    fn test_protocol_id_serde() {
        assert_eq!(serde_json::to_string(&ProtocolId::EscPos).unwrap(), "\"escpos\"");
        assert_eq!(
            serde_json::from_str::<ProtocolId>("\"zpl\"").unwrap(),
            ProtocolId::Zpl
        );
    }

    /// The typed accessors and `capability()` must agree with the declared set.
    fn typed_accessor_ok(agg: &Aggregator, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::Control => agg.control().is_ok(),
            CapabilityKind::Print => agg.print().is_ok(),
            CapabilityKind::LineSpacing => agg.line_spacing().is_ok(),
            CapabilityKind::TextStyle => agg.text_style().is_ok(),
            CapabilityKind::Barcode => agg.barcode().is_ok(),
            CapabilityKind::QrCode => agg.qr().is_ok(),
            CapabilityKind::CodePage => agg.code_page().is_ok(),
            CapabilityKind::CashDrawer => agg.cash_drawer().is_ok(),
            CapabilityKind::Raster => agg.raster().is_ok(),
            CapabilityKind::Label => agg.label().is_ok(),
        }
    }

    #[test]
    fn test_accessors_agree_with_declared_capabilities() {
        for id in ProtocolId::ALL {
            let agg = Aggregator::new(id);
            assert_eq!(agg.id(), id);
            for kind in CapabilityKind::ALL {
                let declared = agg.supports(kind);
                assert_eq!(typed_accessor_ok(&agg, kind), declared, "{} {}", id, kind);
                assert_eq!(agg.capability(kind).is_ok(), declared, "{} {}", id, kind);
            }
        }
    }

    #[test]
    fn test_missing_capability_error() {
        let agg = Aggregator::new(ProtocolId::EscPos);
        match agg.label() {
            Err(RollcodeError::UnknownCapability {
                protocol,
                capability,
            }) => {
                assert_eq!(protocol, ProtocolId::EscPos);
                assert_eq!(capability, CapabilityKind::Label);
            }
            _ => panic!("expected UnknownCapability"),
        }
    }

    #[test]
    fn test_downcasts() {
        assert!(Aggregator::new(ProtocolId::EscPos).as_escpos().is_some());
        assert!(Aggregator::new(ProtocolId::EscPos).as_zpl().is_none());
        assert!(Aggregator::from(Zpl::new()).as_zpl().is_some());
    }
}
