//! # Printer Profiles
//!
//! A profile names a physical printer and the facts needed to drive it: which
//! protocol it speaks, how wide its print head is, and its resolution.
//!
//! ## Built-in Profiles
//!
//! | Key | Model | Protocol | Width (dots) | Resolution |
//! |-----|-------|----------|--------------|------------|
//! | `tm-t20` | Epson TM-T20III | ESC/POS | 576 | 203 DPI |
//! | `zd421` | Zebra ZD421 | ZPL | 832 | 203 DPI |
//!
//! ## Loading From JSON
//!
//! ```
//! use rollcode::config::ProfileSet;
//!
//! let set = ProfileSet::from_json(r#"{
//!     "profiles": [
//!         {"name": "Front counter", "protocol": "escpos", "width_dots": 576, "dpi": 203},
//!         {"name": "Shipping", "protocol": "zpl", "width_dots": 812, "dpi": 203, "code_page": 28}
//!     ]
//! }"#)?;
//!
//! let shipping = set.get("Shipping")?;
//! assert_eq!(shipping.mm_to_dots(25.4), 203);
//! # Ok::<(), rollcode::RollcodeError>(())
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RollcodeError};
use crate::job::{Op, Program};
use crate::protocol::{Aggregator, ProtocolId};
use crate::registry::Registry;

/// # Printer Profile
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For TM-T20III:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 576 / 8 = 72mm
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterProfile {
    /// Human-readable name (e.g. "Epson TM-T20III")
    pub name: String,

    pub protocol: ProtocolId,

    /// Printable width in dots
    pub width_dots: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Code page selected at the start of every job, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_page: Option<u8>,
}

impl PrinterProfile {
    /// # Epson TM-T20III
    ///
    /// 80mm receipt printer, 72mm (576 dots) printable.
    pub fn tm_t20() -> Self {
        Self {
            name: "Epson TM-T20III".to_string(),
            protocol: ProtocolId::EscPos,
            width_dots: 576,
            dpi: 203,
            code_page: None,
        }
    }

    /// # Zebra ZD421
    ///
    /// 4 inch desktop label printer, 104mm (832 dots) printable.
    pub fn zd421() -> Self {
        Self {
            name: "Zebra ZD421".to_string(),
            protocol: ProtocolId::Zpl,
            width_dots: 832,
            dpi: 203,
            code_page: None,
        }
    }

    /// List all built-in profiles.
    pub fn built_in() -> Vec<Self> {
        vec![Self::tm_t20(), Self::zd421()]
    }

    /// Parse a profile key or a built-in display name.
    ///
    /// Keys: `tm-t20` (also `tm_t20`, `tmt20`), `zd421`.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(profile) = Self::built_in().into_iter().find(|p| p.name == s) {
            return Ok(profile);
        }

        match s.trim().to_lowercase().as_str() {
            "tm-t20" | "tm_t20" | "tmt20" => Ok(Self::tm_t20()),
            "zd421" => Ok(Self::zd421()),
            _ => Err(RollcodeError::Profile(format!(
                "Unknown profile '{}'. Use 'tm-t20' or 'zd421'",
                s
            ))),
        }
    }

    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Convert millimeters to dots, rounding to the nearest dot
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> u16 {
        (mm * self.dots_per_mm()).round() as u16
    }

    /// The aggregator for this printer's protocol.
    pub fn aggregator<'r>(&self, registry: &'r Registry) -> Result<&'r Aggregator> {
        registry.get(self.protocol)
    }

    /// Setup ops every job for this printer starts with.
    ///
    /// - ESC/POS: init, then the code page if set
    /// - ZPL: label start and print width, then the code page if set
    pub fn prologue(&self) -> Program {
        let mut program = Program::new();
        match self.protocol {
            ProtocolId::EscPos => program.push(Op::Init),
            ProtocolId::Zpl => {
                program.push(Op::LabelStart);
                program.push(Op::PrintWidth {
                    dots: self.width_dots,
                });
            }
        }
        if let Some(page) = self.code_page {
            program.push(Op::CodePage { page });
        }
        program
    }

    fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RollcodeError::Profile("profile name is empty".to_string()));
        }
        if self.width_dots == 0 || self.dpi == 0 {
            return Err(RollcodeError::Profile(format!(
                "Profile '{}' needs a non-zero width and resolution",
                self.name
            )));
        }
        Ok(())
    }
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::tm_t20()
    }
}

// ============================================================================
// PROFILE SET
// ============================================================================

/// Named profiles loaded from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSet {
    profiles: Vec<PrinterProfile>,
}

impl ProfileSet {
    /// Parse `{"profiles": [...]}`. Names must be unique and every profile
    /// needs a non-zero width and resolution.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: ProfileSet = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for profile in &set.profiles {
            profile.check()?;
            if !seen.insert(profile.name.as_str()) {
                return Err(RollcodeError::Profile(format!(
                    "Duplicate profile name '{}'",
                    profile.name
                )));
            }
        }
        Ok(set)
    }

    /// The built-in profiles as a set.
    pub fn built_in() -> Self {
        Self {
            profiles: PrinterProfile::built_in(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&PrinterProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RollcodeError::Profile(format!("No profile named '{}'", name)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrinterProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tm_t20_dimensions() {
        let profile = PrinterProfile::tm_t20();
        assert_eq!(profile.width_dots, 576);
        assert_eq!(profile.protocol, ProtocolId::EscPos);
        assert!((profile.dots_per_mm() - 8.0).abs() < 0.1);
        assert!((profile.width_mm() - 72.0).abs() < 1.0);
    }

    #[test]
    fn test_mm_to_dots() {
        let profile = PrinterProfile::zd421();
        assert_eq!(profile.mm_to_dots(0.0), 0);
        assert_eq!(profile.mm_to_dots(10.0), 80);
    }

    #[test]
    fn test_parse_keys_and_names() {
        assert_eq!(PrinterProfile::parse("tm-t20").unwrap(), PrinterProfile::tm_t20());
        assert_eq!(PrinterProfile::parse("ZD421").unwrap(), PrinterProfile::zd421());
        assert_eq!(
            PrinterProfile::parse("Zebra ZD421").unwrap(),
            PrinterProfile::zd421()
        );
        assert!(matches!(
            PrinterProfile::parse("tsp100"),
            Err(RollcodeError::Profile(_))
        ));
    }

    #[test]
    fn test_prologue_escpos() {
        let mut profile = PrinterProfile::tm_t20();
        assert_eq!(profile.prologue().ops, vec![Op::Init]);
        profile.code_page = Some(16);
        assert_eq!(
            profile.prologue().ops,
            vec![Op::Init, Op::CodePage { page: 16 }]
        );
    }

    #[test]
    fn test_prologue_zpl() {
        assert_eq!(
            PrinterProfile::zd421().prologue().ops,
            vec![Op::LabelStart, Op::PrintWidth { dots: 832 }]
        );
    }

    #[test]
    fn test_prologue_compiles_for_its_protocol() {
        let registry = Registry::with_defaults();
        for profile in PrinterProfile::built_in() {
            let printer = profile.aggregator(&registry).unwrap();
            assert!(profile.prologue().compile(printer).is_ok(), "{}", profile.name);
        }
    }

    #[test]
    fn test_profile_set_rejects_duplicates() {
        let json = r#"{"profiles": [
            {"name": "A", "protocol": "zpl", "width_dots": 812, "dpi": 203},
            {"name": "A", "protocol": "escpos", "width_dots": 576, "dpi": 203}
        ]}"#;
        assert!(matches!(
            ProfileSet::from_json(json),
            Err(RollcodeError::Profile(msg)) if msg.contains("Duplicate")
        ));
    }

    #[test]
    fn test_profile_set_rejects_zero_width() {
        let json = r#"{"profiles": [{"name": "A", "protocol": "zpl", "width_dots": 0, "dpi": 203}]}"#;
        assert!(ProfileSet::from_json(json).is_err());
    }

    #[test]
    fn test_profile_set_unknown_protocol_is_json_error() {
        let json = r#"{"profiles": [{"name": "A", "protocol": "starprnt", "width_dots": 576, "dpi": 203}]}"#;
        assert!(matches!(
            ProfileSet::from_json(json),
            Err(RollcodeError::Json(_))
        ));
    }

    #[test]
    fn test_profile_set_lookup() {
        let set = ProfileSet::built_in();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Epson TM-T20III").unwrap().width_dots, 576);
        assert!(set.get("missing").is_err());
        assert_eq!(set.iter().count(), 2);
    }
}
