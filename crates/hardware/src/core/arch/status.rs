//! Program Status.
//!
//! This module defines the program-status state machine. It implements:
//! 1. **States:** One running state and three terminal states.
//! 2. **Reporting:** Short codes and the long descriptions printed by the driver.

use std::fmt;

/// Program status of the emulated machine.
///
/// `Running` is the only initial and continuing state; every other state is
/// terminal and ends the execution loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Executing normally.
    #[default]
    Running,

    /// A HALT instruction was executed.
    Halted,

    /// An access or fetch left the memory image, or IRMOVL named a source register.
    BadAddress,

    /// An unknown opcode or an invalid register encoding was fetched.
    BadInstruction,
}

impl Status {
    /// Returns `true` if execution cannot continue from this status.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns `true` for the two fault states.
    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::BadAddress | Self::BadInstruction)
    }

    /// Returns the three-letter status code (`AOK`, `HLT`, `ADR`, `INS`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "AOK",
            Self::Halted => "HLT",
            Self::BadAddress => "ADR",
            Self::BadInstruction => "INS",
        }
    }

    /// Returns the status line printed after a run.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Running => "AOK, program execution successful!",
            Self::Halted => "HLT, halt instruction encountered.",
            Self::BadAddress => "ADR, invalid address passed to an instruction.",
            Self::BadInstruction => "INS, invalid instruction encountered during execution.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
