//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! architectural state of the Y86 machine. It coordinates the following:
//! 1. **State Management:** Maintains registers, condition flags and the program counter.
//! 2. **Status Machine:** Tracks the program status and the fault that ended the run.
//! 3. **Observability:** Instruction tracing and execution statistics.
//!
//! The memory image and console are owned by the caller and lent to
//! [`Cpu::step`] for the duration of one instruction.

/// Fetch/decode/execute of a single instruction.
pub mod execution;

/// Effective addresses, memory access and stack helpers.
pub mod memory;

use std::fmt::Write as _;

use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::core::arch::{ConditionFlags, Status};
use crate::stats::SimStats;

/// Architectural state of one Y86 processor.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Condition codes.
    pub flags: ConditionFlags,
    /// Program counter.
    pub pc: u32,
    /// Program status. Anything other than `Running` is terminal.
    pub status: Status,
    /// The fault that moved the CPU into a fault status, if any.
    pub fault: Option<Fault>,
    /// Enable per-instruction trace events.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU about to execute the instruction at `entry`.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry point resolved by the loader.
    /// * `config` - Run configuration (instruction tracing).
    pub fn new(entry: u32, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            flags: ConditionFlags::default(),
            pc: entry,
            status: Status::Running,
            fault: None,
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            stats: SimStats::default(),
        }
    }

    /// Moves the CPU into the terminal status of `fault`.
    ///
    /// The PC is left on the faulting instruction.
    pub fn raise(&mut self, fault: Fault) {
        tracing::warn!(pc = %format_args!("{:#x}", fault.pc()), status = %fault.status(), "{fault}");
        self.status = fault.status();
        self.fault = Some(fault);
    }

    /// Renders PC, status, flags and registers for diagnostics.
    pub fn dump_state(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "PC={:#010x} STAT={} {}", self.pc, self.status, self.flags);
        if let Some(fault) = &self.fault {
            let _ = writeln!(out, "FAULT: {fault}");
        }
        out.push_str(&self.regs.dump());
        out
    }
}
