//! # Code Page 437 Text Encoding
//!
//! ESC/POS printers power up in code page 437 (`ESC t 0`). Text handed to the
//! [`Print`](crate::escpos::Print) capability is converted here.
//!
//! ASCII passes through unchanged. The 128 characters of the CP437 upper half
//! map to single bytes 0x80..=0xFF. Anything else is rejected with
//! [`ValidationError::Unencodable`]; there is no silent `?` substitution.

use crate::error::ValidationError;

/// CP437 upper half, indexed by `byte - 0x80`.
const UPPER_HALF: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Encode `text` as CP437 bytes.
///
/// `position` in the error is the character index (not the byte index) of the
/// first character without a CP437 representation.
///
/// ## Example
///
/// ```
/// use rollcode::codec::cp437;
///
/// assert_eq!(cp437::encode("Café").unwrap(), vec![0x43, 0x61, 0x66, 0x82]);
/// assert!(cp437::encode("★").is_err());
/// ```
pub fn encode(text: &str) -> Result<Vec<u8>, ValidationError> {
    let mut out = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        out.push(encode_char(ch).ok_or(ValidationError::Unencodable { position, ch })?);
    }
    Ok(out)
}

/// Map one character to its CP437 byte.
pub fn encode_char(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return Some(ch as u8);
    }
    UPPER_HALF
        .iter()
        .position(|&c| c == ch)
        .map(|index| 0x80 + index as u8)
}

/// Decode CP437 bytes back to a `String`.
///
/// Total: every byte has a character. Bytes below 0x80 are taken as ASCII,
/// including control codes.
pub fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                UPPER_HALF[(b - 0x80) as usize]
            }
        })
        .collect()
}
