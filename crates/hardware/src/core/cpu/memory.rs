//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the memory image.
//! It performs the following:
//! 1. **Address Generation:** `base + displacement` without 32-bit wrap.
//! 2. **Fault Mapping:** Converts a rejected access into a PC-tagged [`Fault`].
//! 3. **Stack Discipline:** PUSHL/POPL style moves through `%esp`.

use super::Cpu;
use crate::common::{Fault, MemoryFault, Register, WORD_SIZE};
use crate::soc::memory::Memory;

impl Cpu {
    /// Computes `reg + disp`.
    ///
    /// The sum is widened so that a negative or overflowing result is
    /// rejected by the bound check instead of wrapping into range.
    #[inline]
    pub const fn effective_address(&self, base: Register, disp: i32) -> i64 {
        self.regs.read(base) as i64 + disp as i64
    }

    /// Tags a rejected access with the current PC.
    #[inline]
    pub const fn address_fault(&self, fault: MemoryFault) -> Fault {
        Fault::Address { pc: self.pc, fault }
    }

    /// Reads a word for the current instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the word is outside memory.
    pub fn load_word(&self, memory: &Memory, addr: i64) -> Result<i32, Fault> {
        memory.read_word(addr).map_err(|f| self.address_fault(f))
    }

    /// Reads a byte for the current instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the byte is outside memory.
    pub fn load_byte(&self, memory: &Memory, addr: i64) -> Result<u8, Fault> {
        memory.read_u8(addr).map_err(|f| self.address_fault(f))
    }

    /// Writes a word for the current instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the word is outside memory. Nothing is
    /// written in that case.
    pub fn store_word(&self, memory: &mut Memory, addr: i64, val: i32) -> Result<(), Fault> {
        memory.write_word(addr, val).map_err(|f| self.address_fault(f))
    }

    /// Writes a byte for the current instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the byte is outside memory.
    pub fn store_byte(&self, memory: &mut Memory, addr: i64, val: u8) -> Result<(), Fault> {
        memory.write_u8(addr, val).map_err(|f| self.address_fault(f))
    }

    /// Pushes `val`: `%esp -= 4; mem32[%esp] = val`.
    ///
    /// `%esp` is only updated once the store has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the new top of stack is outside memory.
    pub fn push(&mut self, memory: &mut Memory, val: i32) -> Result<(), Fault> {
        let sp = self.regs.read(Register::Esp).wrapping_sub(WORD_SIZE as i32);
        self.store_word(memory, self.effective_address(Register::Esp, -(WORD_SIZE as i32)), val)?;
        self.regs.write(Register::Esp, sp);
        Ok(())
    }

    /// Pops a word: `val = mem32[%esp]; %esp += 4`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Address`] if the top of stack is outside memory.
    pub fn pop(&mut self, memory: &Memory) -> Result<i32, Fault> {
        let val = self.load_word(memory, self.effective_address(Register::Esp, 0))?;
        let sp = self.regs.read(Register::Esp).wrapping_add(WORD_SIZE as i32);
        self.regs.write(Register::Esp, sp);
        Ok(val)
    }
}
