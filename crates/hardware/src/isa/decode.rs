//! Y86 Instruction Decoder.
//!
//! This module turns the bytes at a PC into a structured [`Instruction`]. It
//! performs the fetch bound check, validates register nibbles, and reads the
//! little-endian immediates and displacements.
//!
//! Fetch order matters for fault reporting:
//! 1. The opcode byte must lie inside memory (`BadAddress`).
//! 2. The opcode must be known (`BadInstruction`).
//! 3. The whole encoding must lie inside memory (`BadAddress`).
//! 4. Register nibbles must be valid (`BadInstruction`), except IRMOVL's
//!    source field which must be "no register" (`BadAddress`).

use crate::common::codec::decode_word;
use crate::common::constants::NO_REGISTER_MIN;
use crate::common::{AccessType, Fault, Register};
use crate::core::units::alu::AluOp;
use crate::core::units::bru::Condition;
use crate::isa::instruction::{Instruction, NIBBLE_MASK, RA_SHIFT, RegisterByte, length_of};
use crate::isa::opcodes::{
    CLASS_JXX, CLASS_OPL, OP_CALL, OP_HALT, OP_IRMOVL, OP_MOVSBL, OP_MRMOVL, OP_NOP, OP_POPL,
    OP_PUSHL, OP_READB, OP_READL, OP_RET, OP_RMMOVL, OP_RRMOVL, OP_WRITEB, OP_WRITEL,
};
use crate::soc::memory::Memory;

/// Offset of the immediate in register-byte forms.
const REG_FORM_IMM_OFFSET: usize = 2;

/// Offset of the destination in jump and call forms.
const DEST_OFFSET: usize = 1;

/// Reads a little-endian word out of an already bounds-checked encoding.
#[inline]
fn word_at(bytes: &[u8], at: usize) -> i32 {
    decode_word([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Decodes the instruction at `pc`.
///
/// # Errors
///
/// Returns the [`Fault`] that the engine must raise if the bytes at `pc` do
/// not form a valid, fully in-bounds instruction.
pub fn decode(memory: &Memory, pc: u32) -> Result<Instruction, Fault> {
    let address_fault = |fault| Fault::Address { pc, fault };
    let reg = |nibble: u8| Register::from_nibble(nibble).ok_or(Fault::InvalidRegister { pc, nibble });

    let opcode = memory
        .read_bytes(i64::from(pc), 1, AccessType::Fetch)
        .map_err(address_fault)?[0];
    let size = length_of(opcode).ok_or(Fault::IllegalOpcode { pc, opcode })?;
    let bytes = memory
        .read_bytes(i64::from(pc), size, AccessType::Fetch)
        .map_err(address_fault)?;

    let regs = bytes.get(1).copied().unwrap_or_default();
    let imm = || word_at(bytes, REG_FORM_IMM_OFFSET);
    let dest = || word_at(bytes, DEST_OFFSET) as u32;

    let inst = match opcode {
        OP_NOP => Instruction::Nop,
        OP_HALT => Instruction::Halt,
        OP_RET => Instruction::Ret,
        OP_RRMOVL => Instruction::Rrmovl {
            src: reg(regs.ra())?,
            dst: reg(regs.rb())?,
        },
        OP_IRMOVL => {
            if regs.ra() < NO_REGISTER_MIN {
                return Err(Fault::ImmediateSource {
                    pc,
                    nibble: regs.ra(),
                });
            }
            Instruction::Irmovl {
                dst: reg(regs.rb())?,
                imm: imm(),
            }
        }
        OP_RMMOVL => Instruction::Rmmovl {
            src: reg(regs.ra())?,
            base: reg(regs.rb())?,
            disp: imm(),
        },
        OP_MRMOVL => Instruction::Mrmovl {
            dst: reg(regs.ra())?,
            base: reg(regs.rb())?,
            disp: imm(),
        },
        op if op >> RA_SHIFT == CLASS_OPL => Instruction::Op {
            op: AluOp::from_function(op & NIBBLE_MASK).ok_or(Fault::IllegalOpcode { pc, opcode })?,
            src: reg(regs.ra())?,
            dst: reg(regs.rb())?,
        },
        op if op >> RA_SHIFT == CLASS_JXX => Instruction::Jump {
            cond: Condition::from_function(op & NIBBLE_MASK)
                .ok_or(Fault::IllegalOpcode { pc, opcode })?,
            dest: dest(),
        },
        OP_CALL => Instruction::Call { dest: dest() },
        OP_PUSHL => Instruction::Pushl {
            reg: reg(regs.ra())?,
        },
        OP_POPL => Instruction::Popl {
            reg: reg(regs.ra())?,
        },
        OP_READB => Instruction::Readb {
            base: reg(regs.ra())?,
            disp: imm(),
        },
        OP_READL => Instruction::Readl {
            base: reg(regs.ra())?,
            disp: imm(),
        },
        OP_WRITEB => Instruction::Writeb {
            base: reg(regs.ra())?,
            disp: imm(),
        },
        OP_WRITEL => Instruction::Writel {
            base: reg(regs.ra())?,
            disp: imm(),
        },
        OP_MOVSBL => Instruction::Movsbl {
            dst: reg(regs.ra())?,
            base: reg(regs.rb())?,
            disp: imm(),
        },
        _ => return Err(Fault::IllegalOpcode { pc, opcode }),
    };
    Ok(inst)
}
