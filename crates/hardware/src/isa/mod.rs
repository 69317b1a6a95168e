//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Y86 opcode table, the decoded instruction representation, the
//! decoder that reads instructions out of a memory image, and a disassembler
//! used by tracing and the CLI listing.
//!
//! # Encoding
//!
//! * Byte 0: opcode (high nibble = instruction class, low nibble = function).
//! * Byte 1 (register forms): `rA` in the high nibble, `rB` in the low nibble.
//! * 4-byte little-endian immediate or displacement after the register byte,
//!   or directly after the opcode for jumps and CALL.

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Decoded instruction representation and register-byte field extraction.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;
