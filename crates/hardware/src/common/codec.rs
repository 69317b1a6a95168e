//! Numeric Codec.
//!
//! Pure conversions between program text, machine words and byte sequences:
//! 1. **Hex Text:** Addresses, sizes, `.byte` values and `.text` byte strings.
//! 2. **Decimal Text:** `.long` values.
//! 3. **Words:** 32-bit little-endian encode/decode used by every multi-byte access.

use super::constants::WORD_SIZE;
use super::error::CodecError;

/// Strips an optional `0x`/`0X` prefix.
fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Parses hexadecimal text into an unsigned 32-bit value.
///
/// Accepts `0-9`, `a-f`, `A-F` and an optional `0x` prefix. Leading zeros are
/// allowed; any other character is an error rather than a silent zero.
///
/// ```
/// use y86_core::common::codec::parse_hex;
///
/// assert_eq!(parse_hex("1f"), Ok(0x1f));
/// assert_eq!(parse_hex("0x0100"), Ok(0x100));
/// assert!(parse_hex("1g").is_err());
/// ```
pub fn parse_hex(text: &str) -> Result<u32, CodecError> {
    let digits = strip_hex_prefix(text);
    if digits.is_empty() {
        return Err(CodecError::Empty);
    }
    let offset = text.len() - digits.len();
    digits
        .char_indices()
        .try_fold(0u32, |acc, (i, ch)| {
            let digit = ch.to_digit(16).ok_or(CodecError::InvalidDigit {
                ch,
                position: offset + i,
            })?;
            acc.checked_mul(16)
                .and_then(|v| v.checked_add(digit))
                .ok_or(CodecError::Overflow)
        })
}

/// Parses hexadecimal text into a single byte.
pub fn parse_hex_byte(text: &str) -> Result<u8, CodecError> {
    let value = parse_hex(text)?;
    u8::try_from(value).map_err(|_| CodecError::Overflow)
}

/// Decodes a string of hex digit pairs into bytes, two characters per byte.
///
/// ```
/// use y86_core::common::codec::decode_hex_bytes;
///
/// assert_eq!(decode_hex_bytes("30f5"), Ok(vec![0x30, 0xf5]));
/// ```
pub fn decode_hex_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    let raw = text.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(CodecError::OddLength { len: raw.len() });
    }
    raw.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = hex_digit(pair[0], i * 2)?;
            let lo = hex_digit(pair[1], i * 2 + 1)?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn hex_digit(byte: u8, position: usize) -> Result<u8, CodecError> {
    char::from(byte)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(CodecError::InvalidDigit {
            ch: char::from(byte),
            position,
        })
}

/// Parses decimal text (optional `+`/`-` sign) into a signed 32-bit value.
pub fn parse_decimal(text: &str) -> Result<i32, CodecError> {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    if unsigned.is_empty() {
        return Err(CodecError::Empty);
    }
    let offset = text.len() - unsigned.len();
    if let Some((i, ch)) = unsigned.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(CodecError::InvalidDigit {
            ch,
            position: offset + i,
        });
    }
    text.parse::<i32>().map_err(|_| CodecError::Overflow)
}

/// Encodes a word as 4 little-endian bytes.
#[inline]
pub const fn encode_word(value: i32) -> [u8; WORD_SIZE as usize] {
    value.to_le_bytes()
}

/// Decodes 4 little-endian bytes into a word.
#[inline]
pub const fn decode_word(bytes: [u8; WORD_SIZE as usize]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Sign-extends a byte to a word (`0x00` fill when bit 7 is clear, `0xFF` fill when set).
#[inline]
pub const fn sign_extend_byte(byte: u8) -> i32 {
    byte as i8 as i32
}
