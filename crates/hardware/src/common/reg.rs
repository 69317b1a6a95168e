//! Y86 Register File.
//!
//! This module provides the `Register` identifiers and the `RegisterFile` that
//! stores their values. It provides:
//! 1. **Identifiers:** The eight architectural registers and their nibble encoding.
//! 2. **Storage:** Signed 32-bit values, all zero at reset.
//! 3. **Observability:** A formatted dump of the register state.

use std::fmt;
use std::fmt::Write as _;

use super::constants::{REGISTER_COUNT, REGISTERS_PER_DUMP_LINE};

/// Architectural register identifier.
///
/// The discriminant is the 4-bit encoding used in instruction register bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Register {
    /// `%eax`, encoding 0.
    Eax = 0,
    /// `%ecx`, encoding 1.
    Ecx = 1,
    /// `%edx`, encoding 2.
    Edx = 2,
    /// `%ebx`, encoding 3.
    Ebx = 3,
    /// `%esp`, encoding 4. Stack pointer for CALL, RET, PUSHL and POPL.
    Esp = 4,
    /// `%ebp`, encoding 5.
    Ebp = 5,
    /// `%esi`, encoding 6.
    Esi = 6,
    /// `%edi`, encoding 7.
    Edi = 7,
}

impl Register {
    /// All registers in encoding order.
    pub const ALL: [Self; REGISTER_COUNT] = [
        Self::Eax,
        Self::Ecx,
        Self::Edx,
        Self::Ebx,
        Self::Esp,
        Self::Ebp,
        Self::Esi,
        Self::Edi,
    ];

    /// Decodes a register nibble.
    ///
    /// Returns `None` for `0x8..=0xF`, which encode "no register".
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        Self::ALL.get(usize::from(nibble)).copied()
    }

    /// Returns the register file index (the nibble encoding).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the assembler name without the `%` sigil.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eax => "eax",
            Self::Ecx => "ecx",
            Self::Edx => "edx",
            Self::Ebx => "ebx",
            Self::Esp => "esp",
            Self::Ebp => "ebp",
            Self::Esi => "esi",
            Self::Edi => "edi",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.name())
    }
}

/// The eight general-purpose registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Register) -> i32 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Register, val: i32) {
        self.regs[reg.index()] = val;
    }

    /// Returns the raw register values in encoding order.
    pub const fn as_array(&self) -> &[i32; REGISTER_COUNT] {
        &self.regs
    }

    /// Formats all registers, four per line, as signed decimal and hex.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for row in Register::ALL.chunks(REGISTERS_PER_DUMP_LINE) {
            let line: Vec<String> = row
                .iter()
                .map(|&r| {
                    let val = self.read(r);
                    format!("{:>5}={val:<11} ({val:#010x})", r.to_string())
                })
                .collect();
            let _ = writeln!(out, "{}", line.join("  "));
        }
        out
    }
}
