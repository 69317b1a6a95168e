//! Loading programs into memory.

use std::io::Write as _;

use pretty_assertions::assert_eq;

use y86_core::common::LoadError;
use y86_core::config::Config;
use y86_core::{load_program, load_program_file};

fn load(src: &str) -> Result<y86_core::LoadedProgram, LoadError> {
    load_program(src, &Config::default())
}

#[test]
fn minimal_program() {
    let prog = load(".size 100\n.text 0 30f500000000\n10").unwrap();
    assert_eq!(prog.entry_point, 0);
    assert_eq!(prog.text_len, 7);
    assert_eq!(prog.memory.capacity(), 0x100);
    assert_eq!(&prog.memory.as_bytes()[..7], &[0x30, 0xf5, 0, 0, 0, 0, 0x10]);
    assert!(prog.memory.as_bytes()[7..].iter().all(|&b| b == 0));
}

#[test]
fn text_chunks_are_concatenated_up_to_next_directive() {
    let prog = load(".size 10\n.text 2 0010 20\n.byte 0 1").unwrap();
    assert_eq!(prog.text_len, 3);
    assert_eq!(&prog.memory.as_bytes()[..5], &[1, 0, 0, 0x10, 0x20]);
    assert!(matches!(
        load(".size 10\n.text 0 10 abc"),
        Err(LoadError::InvalidNumber { .. })
    ));
}

#[test]
fn string_has_no_terminator() {
    let prog = load(".size 20\n.text 0 10\n.string 10 \"AB\"").unwrap();
    assert_eq!(&prog.memory.as_bytes()[0x10..0x13], &[0x41, 0x42, 0]);
}

#[test]
fn string_keeps_inner_quotes_up_to_last_on_line() {
    let prog = load(".size 20\n.text 0 10\n.string 10 \"say \"hi\" ok\"\n.byte 1f 7").unwrap();
    assert_eq!(&prog.memory.as_bytes()[0x10..0x1b], b"say \"hi\" ok");
    assert_eq!(prog.memory.read_u8(0x1f), Ok(7));
}

#[test]
fn long_is_little_endian() {
    let prog = load(".size 20\n.text 0 10\n.long 4 -2").unwrap();
    assert_eq!(prog.memory.read_word(4), Ok(-2));
    assert_eq!(&prog.memory.as_bytes()[4..8], &[0xfe, 0xff, 0xff, 0xff]);
}

#[test]
fn size_may_come_last() {
    let prog = load(".byte 3 7f\n.text 8 10\n.size 10").unwrap();
    assert_eq!(prog.entry_point, 8);
    assert_eq!(prog.memory.read_u8(3), Ok(0x7f));
}

#[test]
fn later_directives_overwrite_earlier_ones() {
    let prog = load(".size 10\n.text 0 00000010\n.byte 1 aa").unwrap();
    assert_eq!(&prog.memory.as_bytes()[..4], &[0, 0xaa, 0, 0x10]);
}

#[test]
fn size_must_appear_exactly_once() {
    assert!(matches!(load(".text 0 10"), Err(LoadError::MissingSize)));
    assert!(matches!(
        load(".size 10\n.text 0 10\n.size 20"),
        Err(LoadError::DuplicateSize { line: 3 })
    ));
}

#[test]
fn text_must_appear_exactly_once() {
    assert!(matches!(load(".size 10\n.byte 0 1"), Err(LoadError::MissingText)));
    assert!(matches!(
        load(".size 10\n.text 0 10\n.text 4 10"),
        Err(LoadError::DuplicateText { line: 3 })
    ));
}

#[test]
fn writes_outside_capacity_are_rejected() {
    match load(".size 8\n.text 0 10\n.long 6 1") {
        Err(LoadError::OutOfBounds {
            directive,
            addr,
            len,
            capacity,
            ..
        }) => {
            assert_eq!((directive, addr, len, capacity), (".long", 6, 4, 8));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        load(".size 8\n.text 7 1010"),
        Err(LoadError::OutOfBounds { directive: ".text", .. })
    ));
    assert!(matches!(
        load(".size 8\n.text 0 10\n.string 7 \"ab\""),
        Err(LoadError::OutOfBounds { directive: ".string", .. })
    ));
}

#[test]
fn capacity_limit_comes_from_config() {
    let mut config = Config::default();
    config.memory.max_capacity = 0x100;
    assert!(load_program(".size 100\n.text 0 10", &config).is_ok());
    assert!(matches!(
        load_program(".size 101\n.text 0 10", &config),
        Err(LoadError::CapacityTooLarge { requested: 0x101, max: 0x100 })
    ));
}

#[test]
fn default_limit_is_host_policy_and_can_be_lifted() {
    let src = ".size 1000001\n.text 0 10";
    assert!(matches!(
        load_program(src, &Config::default()),
        Err(LoadError::CapacityTooLarge { requested: 0x100_0001, max: 0x100_0000 })
    ));

    let mut config = Config::default();
    config.memory.max_capacity = u32::MAX;
    let prog = load_program(src, &config).unwrap();
    assert_eq!(prog.memory.capacity(), 0x100_0001);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::Builder::new().suffix(".y86").tempfile().unwrap();
    writeln!(file, ".size\t20").unwrap();
    writeln!(file, ".text\t0\t30f00a00000010").unwrap();
    let prog = load_program_file(file.path(), &Config::default()).unwrap();
    assert_eq!(prog.text_len, 7);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.y86");
    match load_program_file(&path, &Config::default()) {
        Err(err @ LoadError::Io { .. }) => assert!(err.to_string().contains("absent.y86")),
        other => panic!("unexpected {other:?}"),
    }
}
