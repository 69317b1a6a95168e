//! Execution statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Throughput:** Retired instructions and host time (instructions per second).
//! 2. **Instruction mix:** Counts by class (control, move, memory, ALU, branch, stack, I/O).
//! 3. **Branches:** Conditional and unconditional jumps taken versus executed.

use std::fmt;
use std::time::Instant;

use crate::isa::instruction::{Instruction, InstructionClass};

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions that completed without faulting.
    pub instructions_retired: u64,

    /// Count of NOP and HALT instructions retired.
    pub inst_control: u64,
    /// Count of RRMOVL, IRMOVL and MOVSBL instructions retired.
    pub inst_move: u64,
    /// Count of RMMOVL and MRMOVL instructions retired.
    pub inst_memory: u64,
    /// Count of OPL instructions retired.
    pub inst_alu: u64,
    /// Count of jump instructions retired.
    pub inst_branch: u64,
    /// Count of CALL, RET, PUSHL and POPL instructions retired.
    pub inst_stack: u64,
    /// Count of READx and WRITEx instructions retired.
    pub inst_io: u64,

    /// Number of jumps whose condition held.
    pub branches_taken: u64,
    /// Number of READB/READL instructions that hit end of input.
    pub reads_exhausted: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_control: 0,
            inst_move: 0,
            inst_memory: 0,
            inst_alu: 0,
            inst_branch: 0,
            inst_stack: 0,
            inst_io: 0,
            branches_taken: 0,
            reads_exhausted: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    pub fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        let counter = match inst.class() {
            InstructionClass::Control => &mut self.inst_control,
            InstructionClass::Move => &mut self.inst_move,
            InstructionClass::Memory => &mut self.inst_memory,
            InstructionClass::Alu => &mut self.inst_alu,
            InstructionClass::Branch => &mut self.inst_branch,
            InstructionClass::Stack => &mut self.inst_stack,
            InstructionClass::Io => &mut self.inst_io,
        };
        *counter += 1;
    }

    /// Returns the number of retired instructions in `class`.
    pub const fn count(&self, class: InstructionClass) -> u64 {
        match class {
            InstructionClass::Control => self.inst_control,
            InstructionClass::Move => self.inst_move,
            InstructionClass::Memory => self.inst_memory,
            InstructionClass::Alu => self.inst_alu,
            InstructionClass::Branch => self.inst_branch,
            InstructionClass::Stack => self.inst_stack,
            InstructionClass::Io => self.inst_io,
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let ips = if seconds > 0.0 {
            self.instructions_retired as f64 / seconds
        } else {
            0.0
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "Y86 EXECUTION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_ips                  {ips:.0}")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.control", self.inst_control),
            ("op.move", self.inst_move),
            ("op.memory", self.inst_memory),
            ("op.alu", self.inst_alu),
            ("op.branch", self.inst_branch),
            ("op.stack", self.inst_stack),
            ("op.io", self.inst_io),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "BRANCHES")?;
        writeln!(f, "  branch.executed        {}", self.inst_branch)?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  io.reads_exhausted     {}", self.reads_exhausted)?;
        write!(f, "==========================================================")
    }
}
