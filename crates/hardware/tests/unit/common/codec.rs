//! Numeric codec tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use y86_core::common::CodecError;
use y86_core::common::codec::{
    decode_hex_bytes, decode_word, encode_word, parse_decimal, parse_hex, parse_hex_byte,
    sign_extend_byte,
};

#[rstest]
#[case("0", 0)]
#[case("ff", 0xff)]
#[case("FF", 0xff)]
#[case("0x1A", 0x1a)]
#[case("0X1a", 0x1a)]
#[case("00000100", 0x100)]
#[case("ffffffff", u32::MAX)]
#[case("000000000001", 1)]
fn parse_hex_accepts(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(parse_hex(text), Ok(expected));
}

#[test]
fn parse_hex_rejects_empty_and_bare_prefix() {
    assert_eq!(parse_hex(""), Err(CodecError::Empty));
    assert_eq!(parse_hex("0x"), Err(CodecError::Empty));
}

#[test]
fn parse_hex_rejects_non_hex_instead_of_zero() {
    assert_eq!(
        parse_hex("12g4"),
        Err(CodecError::InvalidDigit { ch: 'g', position: 2 })
    );
    assert!(parse_hex("-1").is_err());
}

#[test]
fn parse_hex_rejects_more_than_32_bits() {
    assert_eq!(parse_hex("100000000"), Err(CodecError::Overflow));
}

#[test]
fn parse_hex_byte_range() {
    assert_eq!(parse_hex_byte("7f"), Ok(0x7f));
    assert_eq!(parse_hex_byte("100"), Err(CodecError::Overflow));
}

#[test]
fn decode_hex_bytes_pairs() {
    assert_eq!(decode_hex_bytes("30F5000000001000"), Ok(vec![0x30, 0xf5, 0, 0, 0, 0, 0x10, 0]));
    assert_eq!(decode_hex_bytes(""), Ok(vec![]));
    assert_eq!(decode_hex_bytes("abc"), Err(CodecError::OddLength { len: 3 }));
    assert_eq!(
        decode_hex_bytes("0z"),
        Err(CodecError::InvalidDigit { ch: 'z', position: 1 })
    );
}

#[rstest]
#[case("0", 0)]
#[case("-1", -1)]
#[case("+42", 42)]
#[case("2147483647", i32::MAX)]
#[case("-2147483648", i32::MIN)]
fn parse_decimal_accepts(#[case] text: &str, #[case] expected: i32) {
    assert_eq!(parse_decimal(text), Ok(expected));
}

#[test]
fn parse_decimal_rejects() {
    assert_eq!(parse_decimal("2147483648"), Err(CodecError::Overflow));
    assert_eq!(parse_decimal("-"), Err(CodecError::Empty));
    assert_eq!(
        parse_decimal("12a"),
        Err(CodecError::InvalidDigit { ch: 'a', position: 2 })
    );
}

#[test]
fn words_are_little_endian() {
    assert_eq!(encode_word(0x0403_0201), [1, 2, 3, 4]);
    assert_eq!(decode_word([0xff, 0xff, 0xff, 0xff]), -1);
}

#[test]
fn sign_extension() {
    assert_eq!(sign_extend_byte(0x7f), 127);
    assert_eq!(sign_extend_byte(0x80), -128);
    assert_eq!(sign_extend_byte(0xff), -1);
}

proptest! {
    #[test]
    fn word_encoding_inverts(v in any::<i32>()) {
        prop_assert_eq!(decode_word(encode_word(v)), v);
    }

    #[test]
    fn hex_matches_format(v in any::<u32>()) {
        prop_assert_eq!(parse_hex(&format!("{v:x}")), Ok(v));
        prop_assert_eq!(parse_hex(&format!("{v:#X}").replace("0X", "0x")), Ok(v));
    }

    #[test]
    fn decimal_matches_std(v in any::<i32>()) {
        prop_assert_eq!(parse_decimal(&v.to_string()), Ok(v));
    }
}
