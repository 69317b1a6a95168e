//! Memory Access Types.
//!
//! This module defines the classification of memory accesses. These types are
//! used for the following:
//! 1. **Fault Generation:** Reporting which kind of access left the memory image.
//! 2. **Diagnostics:** Naming the access in log events and fault messages.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when an access is rejected by the memory bound check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the engine reads the opcode and operand bytes at the PC.
    Fetch,

    /// Data read access.
    ///
    /// Occurs for MRMOVL, POPL, RET, WRITEB, WRITEL and MOVSBL.
    Read,

    /// Data write access.
    ///
    /// Occurs for RMMOVL, PUSHL, CALL, READB, READL and loader directives.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
