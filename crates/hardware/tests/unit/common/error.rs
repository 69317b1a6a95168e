//! Fault classification and error messages.

use pretty_assertions::assert_eq;

use y86_core::common::{AccessType, Fault, LoadError, MemoryFault};
use y86_core::core::arch::Status;

fn mem_fault() -> MemoryFault {
    MemoryFault {
        addr: -4,
        width: 4,
        capacity: 0x100,
        access: AccessType::Write,
    }
}

#[test]
fn faults_map_to_status() {
    let cases = [
        (Fault::Address { pc: 1, fault: mem_fault() }, Status::BadAddress),
        (Fault::ImmediateSource { pc: 2, nibble: 0 }, Status::BadAddress),
        (Fault::IllegalOpcode { pc: 3, opcode: 0xF0 }, Status::BadInstruction),
        (Fault::InvalidRegister { pc: 4, nibble: 9 }, Status::BadInstruction),
    ];
    for (i, (fault, status)) in cases.into_iter().enumerate() {
        assert_eq!(fault.status(), status);
        assert_eq!(fault.pc(), i as u32 + 1);
    }
}

#[test]
fn messages_name_the_offender() {
    let err = LoadError::UnknownDirective {
        token: ".data".to_owned(),
        line: 3,
    };
    assert_eq!(err.to_string(), "line 3: invalid directive '.data'");

    let fault = Fault::IllegalOpcode { pc: 0x10, opcode: 0xF0 };
    assert_eq!(fault.to_string(), "pc 0x10: invalid opcode 0xf0");
}

#[test]
fn address_fault_keeps_source() {
    use std::error::Error as _;
    let fault = Fault::Address { pc: 0, fault: mem_fault() };
    assert!(fault.source().is_some());
    assert!(mem_fault().to_string().starts_with("write of 4 byte(s)"));
}
