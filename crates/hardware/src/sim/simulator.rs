//! Simulator: owns the CPU and the memory image side-by-side.
//!
//! The CPU borrows memory and the console only for the duration of a step, so
//! callers can inspect either between steps.

use crate::common::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::Status;
use crate::sim::loader::{LoadedProgram, load_program};
use crate::soc::memory::Memory;
use crate::soc::traits::Console;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The CPU reached a terminal status.
    Finished(Status),
    /// The configured instruction budget ran out while still `Running`.
    StepLimit,
}

/// Top-level simulator: CPU architectural state plus memory image.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// The program's memory image.
    pub memory: Memory,
    max_instructions: Option<u64>,
}

impl Simulator {
    /// Creates a simulator positioned at the program's entry point.
    pub fn new(program: LoadedProgram, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(program.entry_point, config),
            memory: program.memory,
            max_instructions: config.general.max_instructions,
        }
    }

    /// Loads `text` and creates a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] of the loader.
    pub fn from_source(text: &str, config: &Config) -> Result<Self, LoadError> {
        Ok(Self::new(load_program(text, config)?, config))
    }

    /// Current program status.
    pub const fn status(&self) -> Status {
        self.cpu.status
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if writing program output fails.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Status, SimError> {
        self.cpu.step(&mut self.memory, console)
    }

    /// Runs until the CPU leaves `Running` or the instruction budget is spent.
    ///
    /// Console output is flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if writing program output fails.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<StopReason, SimError> {
        let reason = loop {
            if self.cpu.status.is_terminal() {
                break StopReason::Finished(self.cpu.status);
            }
            if self
                .max_instructions
                .is_some_and(|max| self.cpu.stats.instructions_retired >= max)
            {
                tracing::debug!(
                    retired = self.cpu.stats.instructions_retired,
                    "instruction budget exhausted"
                );
                break StopReason::StepLimit;
            }
            let _ = self.step(console)?;
        };
        console.flush()?;
        Ok(reason)
    }
}
