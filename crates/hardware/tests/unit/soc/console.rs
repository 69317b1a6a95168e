//! Stream console.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use y86_core::{Console, StreamConsole};

fn console(input: &str) -> StreamConsole<Cursor<Vec<u8>>, Vec<u8>> {
    StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn bytes_then_eof() {
    let mut c = console("ab");
    assert_eq!(c.read_byte().unwrap(), Some(b'a'));
    assert_eq!(c.read_byte().unwrap(), Some(b'b'));
    assert_eq!(c.read_byte().unwrap(), None);
    assert_eq!(c.read_byte().unwrap(), None);
}

#[test]
fn longs_skip_whitespace_and_accept_signs() {
    let mut c = console("\n\t 12  -7\n+3 -");
    assert_eq!(c.read_long().unwrap(), Some(12));
    assert_eq!(c.read_long().unwrap(), Some(-7));
    assert_eq!(c.read_long().unwrap(), Some(3));
    assert_eq!(c.read_long().unwrap(), None);
    assert_eq!(c.read_long().unwrap(), None);
}

#[test]
fn long_stops_at_first_non_digit() {
    let mut c = console("42abc");
    assert_eq!(c.read_long().unwrap(), Some(42));
    assert_eq!(c.read_byte().unwrap(), Some(b'a'));
}

#[test]
fn extreme_values() {
    let mut c = console("-2147483648 2147483647 2147483648");
    assert_eq!(c.read_long().unwrap(), Some(i32::MIN));
    assert_eq!(c.read_long().unwrap(), Some(i32::MAX));
    assert_eq!(c.read_long().unwrap(), Some(i32::MIN));
}

#[test]
fn writes_are_raw_bytes_and_decimal() {
    let mut c = console("");
    c.write_byte(b'x').unwrap();
    c.write_long(-15).unwrap();
    c.write_byte(b'\n').unwrap();
    c.flush().unwrap();
    let (_, out) = c.into_parts();
    assert_eq!(out, b"x-15\n");
}
