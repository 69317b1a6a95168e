//! Main Execution Step.
//!
//! This module implements the fetch/decode/execute cycle of the CPU. It performs the following:
//! 1. **Fetch and Decode:** Bound-checked instruction fetch via [`decode`].
//! 2. **Execute:** Register, ALU, memory, control-flow and console effects.
//! 3. **Status Update:** HALT and faults move the CPU into a terminal status.
//! 4. **Observability:** Trace events and retired-instruction statistics.
//!
//! An instruction either completes entirely or faults without side effects on
//! memory, registers or flags. Host console failures on output are reported as
//! [`SimError`] and leave the CPU on the instruction that failed.

use std::io;

use tracing::{trace, warn};

use super::Cpu;
use crate::common::codec::sign_extend_byte;
use crate::common::{AccessType, Fault, SimError, WORD_SIZE};
use crate::core::arch::{ConditionFlags, Status};
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::memory::Memory;
use crate::soc::traits::Console;

/// Why an instruction did not complete.
#[derive(Debug)]
enum StepError {
    /// An emulated fault; the CPU enters a terminal status.
    Fault(Fault),
    /// The host console failed.
    Host(io::Error),
}

impl From<Fault> for StepError {
    fn from(fault: Fault) -> Self {
        Self::Fault(fault)
    }
}

/// Sets or clears ZF and leaves OF and SF untouched.
const fn with_zf(flags: ConditionFlags, zf: bool) -> ConditionFlags {
    ConditionFlags::new(flags.of, zf, flags.sf)
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// A CPU that has already left `Running` is not advanced; its status is
    /// returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `memory` - The memory image of the program.
    /// * `console` - Input and output for the READx/WRITEx instructions.
    ///
    /// # Returns
    ///
    /// The status after the instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if writing program output fails.
    pub fn step<C: Console + ?Sized>(
        &mut self,
        memory: &mut Memory,
        console: &mut C,
    ) -> Result<Status, SimError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let inst = match decode(memory, self.pc) {
            Ok(inst) => inst,
            Err(fault) => {
                self.raise(fault);
                return Ok(self.status);
            }
        };

        if self.trace {
            trace!(pc = %format_args!("{:#x}", self.pc), "{inst}");
        }

        match self.execute(inst, memory, console) {
            Ok(next_pc) => {
                self.pc = next_pc;
                self.stats.record(&inst);
            }
            Err(StepError::Fault(fault)) => self.raise(fault),
            Err(StepError::Host(err)) => return Err(SimError::Io(err)),
        }
        Ok(self.status)
    }

    /// Applies the effects of `inst` and returns the next PC.
    fn execute<C: Console + ?Sized>(
        &mut self,
        inst: Instruction,
        memory: &mut Memory,
        console: &mut C,
    ) -> Result<u32, StepError> {
        let fallthrough = self.pc.wrapping_add(inst.size());

        match inst {
            Instruction::Nop => {}
            Instruction::Halt => {
                self.status = Status::Halted;
                return Ok(self.pc);
            }
            Instruction::Rrmovl { src, dst } => {
                self.regs.write(dst, self.regs.read(src));
            }
            Instruction::Irmovl { dst, imm } => {
                self.regs.write(dst, imm);
            }
            Instruction::Rmmovl { src, base, disp } => {
                let addr = self.effective_address(base, disp);
                self.store_word(memory, addr, self.regs.read(src))?;
            }
            Instruction::Mrmovl { dst, base, disp } => {
                let addr = self.effective_address(base, disp);
                let val = self.load_word(memory, addr)?;
                self.regs.write(dst, val);
            }
            Instruction::Op { op, src, dst } => {
                let out = Alu::execute(op, self.regs.read(src), self.regs.read(dst));
                self.flags = out.flags;
                if op.writes_back() {
                    self.regs.write(dst, out.value);
                }
            }
            Instruction::Jump { cond, dest } => {
                if cond.evaluate(self.flags) {
                    self.stats.branches_taken += 1;
                    return Ok(dest);
                }
            }
            Instruction::Call { dest } => {
                self.push(memory, fallthrough as i32)?;
                return Ok(dest);
            }
            Instruction::Ret => {
                return Ok(self.pop(memory)? as u32);
            }
            Instruction::Pushl { reg } => {
                self.push(memory, self.regs.read(reg))?;
            }
            Instruction::Popl { reg } => {
                let val = self.pop(memory)?;
                self.regs.write(reg, val);
            }
            Instruction::Readb { base, disp } => {
                let addr = self.effective_address(base, disp);
                let _ = memory
                    .check(addr, 1, AccessType::Write)
                    .map_err(|f| self.address_fault(f))?;
                match Self::console_read(console.read_byte()) {
                    Some(byte) => {
                        self.store_byte(memory, addr, byte)?;
                        self.flags = with_zf(self.flags, false);
                    }
                    None => {
                        self.stats.reads_exhausted += 1;
                        self.flags = with_zf(self.flags, true);
                    }
                }
            }
            Instruction::Readl { base, disp } => {
                let addr = self.effective_address(base, disp);
                let _ = memory
                    .check(addr, WORD_SIZE, AccessType::Write)
                    .map_err(|f| self.address_fault(f))?;
                match Self::console_read(console.read_long()) {
                    Some(val) => {
                        self.store_word(memory, addr, val)?;
                        self.flags = with_zf(self.flags, false);
                    }
                    None => {
                        self.stats.reads_exhausted += 1;
                        self.flags = with_zf(self.flags, true);
                    }
                }
            }
            Instruction::Writeb { base, disp } => {
                let byte = self.load_byte(memory, self.effective_address(base, disp))?;
                console.write_byte(byte).map_err(StepError::Host)?;
            }
            Instruction::Writel { base, disp } => {
                let val = self.load_word(memory, self.effective_address(base, disp))?;
                console.write_long(val).map_err(StepError::Host)?;
            }
            Instruction::Movsbl { base, dst, disp } => {
                let byte = self.load_byte(memory, self.effective_address(base, disp))?;
                self.regs.write(dst, sign_extend_byte(byte));
            }
        }

        Ok(fallthrough)
    }

    /// Folds a console read error into end of input.
    fn console_read<T>(result: io::Result<Option<T>>) -> Option<T> {
        result.unwrap_or_else(|err| {
            warn!(error = %err, "console read failed; treating as end of input");
            None
        })
    }
}
