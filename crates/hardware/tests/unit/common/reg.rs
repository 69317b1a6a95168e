//! Register naming and the register file.

use pretty_assertions::assert_eq;

use y86_core::common::{Register, RegisterFile};

#[test]
fn nibbles_map_to_registers_in_encoding_order() {
    let names: Vec<String> = (0..8)
        .map(|n| Register::from_nibble(n).unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["%eax", "%ecx", "%edx", "%ebx", "%esp", "%ebp", "%esi", "%edi"]
    );
}

#[test]
fn no_register_nibbles() {
    for n in 0x8..=0xF {
        assert_eq!(Register::from_nibble(n), None);
    }
}

#[test]
fn register_file_starts_zeroed() {
    assert_eq!(RegisterFile::new().as_array(), &[0; 8]);
}

#[test]
fn writes_are_isolated() {
    let mut regs = RegisterFile::new();
    regs.write(Register::Esp, -4);
    assert_eq!(regs.read(Register::Esp), -4);
    assert_eq!(regs.read(Register::Ebp), 0);
}

#[test]
fn dump_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(Register::Edi, -1);
    let dump = regs.dump();
    assert_eq!(dump.lines().count(), 2);
    assert!(dump.contains("%edi=-1"));
    assert!(dump.contains("0xffffffff"));
}
