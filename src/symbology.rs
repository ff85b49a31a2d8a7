//! # Barcode Symbologies
//!
//! Data rules shared by every protocol. A protocol may support fewer
//! symbologies than listed here, but it never accepts data these rules reject.
//!
//! | Symbology | Characters | Length |
//! |-----------|-----------|--------|
//! | UPC-A | digits | 11 or 12 |
//! | UPC-E | digits | 6, 7, 8, 11 or 12 |
//! | EAN-13 | digits | 12 or 13 |
//! | EAN-8 | digits | 7 or 8 |
//! | Code39 | `0-9 A-Z space $ % * + - . /` | 1..=255 |
//! | ITF | digits | even, 2..=254 |
//! | Codabar | `0-9 A-D $ + - . / :` | 1..=255 |
//! | Code93 | ASCII | 1..=255 |
//! | Code128 | any byte | 1..=253 |
//! | Other | any byte | 1..=255 |
//!
//! Checks run in a fixed order: empty, character set, then length. The
//! fixed-length symbologies accept the variant without check digit (the
//! printer computes it) and the variant with one; the check digit itself is
//! passed through unverified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{self, ValidationRule};

/// 1D barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Codabar,
    Code93,
    Code128,
    /// A printer-specific symbology addressed by its raw format byte.
    /// Only the maximum-length check applies.
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Charset {
    Digits,
    Code39,
    Codabar,
    Ascii,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthRule {
    OneOf(&'static [usize]),
    Up(usize),
    Even(usize, usize),
}

impl Symbology {
    /// All named symbologies (excluding [`Symbology::Other`]).
    pub const ALL: [Symbology; 9] = [
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Code39,
        Symbology::Itf,
        Symbology::Codabar,
        Symbology::Code93,
        Symbology::Code128,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Code39 => "Code39",
            Symbology::Itf => "ITF",
            Symbology::Codabar => "Codabar",
            Symbology::Code93 => "Code93",
            Symbology::Code128 => "Code128",
            Symbology::Other(_) => "raw symbology",
        }
    }

    /// True for symbologies with a fixed set of permitted lengths.
    pub fn is_fixed_length(self) -> bool {
        matches!(self.length_rule(), LengthRule::OneOf(_))
    }

    /// Largest payload accepted, in bytes.
    pub fn max_len(self) -> usize {
        match self.length_rule() {
            LengthRule::OneOf(lengths) => lengths.iter().copied().max().unwrap_or(0),
            LengthRule::Up(max) => max,
            LengthRule::Even(_, max) => max,
        }
    }

    fn charset(self) -> Charset {
        match self {
            Symbology::UpcA | Symbology::UpcE | Symbology::Ean13 | Symbology::Ean8 => {
                Charset::Digits
            }
            Symbology::Itf => Charset::Digits,
            Symbology::Code39 => Charset::Code39,
            Symbology::Codabar => Charset::Codabar,
            Symbology::Code93 => Charset::Ascii,
            Symbology::Code128 | Symbology::Other(_) => Charset::Any,
        }
    }

    fn length_rule(self) -> LengthRule {
        match self {
            Symbology::UpcA => LengthRule::OneOf(&[11, 12]),
            Symbology::UpcE => LengthRule::OneOf(&[6, 7, 8, 11, 12]),
            Symbology::Ean13 => LengthRule::OneOf(&[12, 13]),
            Symbology::Ean8 => LengthRule::OneOf(&[7, 8]),
            Symbology::Itf => LengthRule::Even(2, 254),
            Symbology::Code128 => LengthRule::Up(253),
            Symbology::Code39 | Symbology::Codabar | Symbology::Code93 | Symbology::Other(_) => {
                LengthRule::Up(255)
            }
        }
    }

    /// Validate a payload for this symbology.
    ///
    /// ## Example
    ///
    /// ```
    /// use rollcode::Symbology;
    ///
    /// assert!(Symbology::Ean13.validate(b"123456789012").is_ok());
    /// assert!(Symbology::Ean13.validate(b"12345678901A").is_err());
    /// assert!(Symbology::Ean8.validate(b"123").is_err());
    /// ```
    pub fn validate(self, data: &[u8]) -> Result<(), ValidationError> {
        if data.is_empty() {
            return Err(ValidationError::EmptyData);
        }
        self.check_charset(data)?;
        self.check_length(data.len())
    }

    fn check_charset(self, data: &[u8]) -> Result<(), ValidationError> {
        let allowed: fn(u8) -> bool = match self.charset() {
            Charset::Digits => return validate::digits(data),
            Charset::Any => return Ok(()),
            Charset::Ascii => |b: u8| b.is_ascii(),
            Charset::Code39 => {
                |b: u8| b.is_ascii_digit() || b.is_ascii_uppercase() || b" $%*+-./".contains(&b)
            }
            Charset::Codabar => |b: u8| b.is_ascii_digit() || b"ABCD$+-./:".contains(&b),
        };
        match data.iter().position(|&b| !allowed(b)) {
            Some(position) => Err(ValidationError::InvalidCharacter {
                position,
                ch: char::from(data[position]),
                symbology: self,
            }),
            None => Ok(()),
        }
    }

    fn check_length(self, actual: usize) -> Result<(), ValidationError> {
        match self.length_rule() {
            LengthRule::OneOf(allowed) if !allowed.contains(&actual) => {
                Err(ValidationError::WrongLength {
                    symbology: self,
                    actual,
                    allowed,
                })
            }
            LengthRule::OneOf(_) => Ok(()),
            LengthRule::Up(max) | LengthRule::Even(_, max) if actual > max => {
                Err(ValidationError::TooLong { max, actual })
            }
            LengthRule::Even(min, _) if actual < min || actual % 2 != 0 => {
                Err(ValidationError::OddLength {
                    symbology: self,
                    actual,
                })
            }
            LengthRule::Up(_) | LengthRule::Even(..) => Ok(()),
        }
    }
}

impl ValidationRule<[u8]> for Symbology {
    type Normalized = ();

    fn check(&self, value: &[u8]) -> Result<(), ValidationError> {
        self.validate(value)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbology::Other(code) => write!(f, "symbology {}", code),
            other => f.write_str(other.name()),
        }
    }
}
