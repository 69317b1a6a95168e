//! Instruction representation and field extraction.
//!
//! Provides the decoded `Instruction` type together with helpers for pulling
//! the two register nibbles out of a register byte.

use crate::common::Register;
use crate::core::units::alu::AluOp;
use crate::core::units::bru::Condition;

use super::opcodes;

/// Bit shift for the `rA` nibble of a register byte.
pub const RA_SHIFT: u8 = 4;
/// Bit mask for a register nibble.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Trait for extracting the register fields of a register byte.
pub trait RegisterByte {
    /// Extracts the first operand nibble (bits 4-7).
    fn ra(&self) -> u8;

    /// Extracts the second operand nibble (bits 0-3).
    fn rb(&self) -> u8;
}

impl RegisterByte for u8 {
    #[inline]
    fn ra(&self) -> u8 {
        (self >> RA_SHIFT) & NIBBLE_MASK
    }

    #[inline]
    fn rb(&self) -> u8 {
        self & NIBBLE_MASK
    }
}

/// Broad instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// NOP and HALT.
    Control,
    /// RRMOVL, IRMOVL, MOVSBL.
    Move,
    /// RMMOVL and MRMOVL.
    Memory,
    /// The OPL group.
    Alu,
    /// Jumps.
    Branch,
    /// CALL, RET, PUSHL, POPL.
    Stack,
    /// READB, READL, WRITEB, WRITEL.
    Io,
}

/// A fully decoded instruction.
///
/// Register operands are already validated; displacements and immediates are
/// the raw little-endian words from the instruction stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `nop`
    Nop,
    /// `halt`
    Halt,
    /// `rrmovl rA, rB`
    Rrmovl {
        /// Source register.
        src: Register,
        /// Destination register.
        dst: Register,
    },
    /// `irmovl $imm, rB`
    Irmovl {
        /// Destination register.
        dst: Register,
        /// Immediate value.
        imm: i32,
    },
    /// `rmmovl rA, disp(rB)`
    Rmmovl {
        /// Register stored to memory.
        src: Register,
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `mrmovl disp(rB), rA`
    Mrmovl {
        /// Register loaded from memory.
        dst: Register,
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `addl`/`subl`/`andl`/`xorl`/`mull`/`cmpl rA, rB`
    Op {
        /// The ALU operation.
        op: AluOp,
        /// First operand.
        src: Register,
        /// Second operand and destination.
        dst: Register,
    },
    /// `jmp`/`jXX dest`
    Jump {
        /// Jump condition.
        cond: Condition,
        /// Absolute target address.
        dest: u32,
    },
    /// `call dest`
    Call {
        /// Absolute target address.
        dest: u32,
    },
    /// `ret`
    Ret,
    /// `pushl rA`
    Pushl {
        /// Register pushed.
        reg: Register,
    },
    /// `popl rA`
    Popl {
        /// Register popped into.
        reg: Register,
    },
    /// `readb disp(rA)`
    Readb {
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `readl disp(rA)`
    Readl {
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `writeb disp(rA)`
    Writeb {
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `writel disp(rA)`
    Writel {
        /// Base register.
        base: Register,
        /// Displacement.
        disp: i32,
    },
    /// `movsbl disp(rB), rA`
    Movsbl {
        /// Base register.
        base: Register,
        /// Destination register.
        dst: Register,
        /// Displacement.
        disp: i32,
    },
}

impl Instruction {
    /// Returns the opcode byte of this instruction.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Nop => opcodes::OP_NOP,
            Self::Halt => opcodes::OP_HALT,
            Self::Rrmovl { .. } => opcodes::OP_RRMOVL,
            Self::Irmovl { .. } => opcodes::OP_IRMOVL,
            Self::Rmmovl { .. } => opcodes::OP_RMMOVL,
            Self::Mrmovl { .. } => opcodes::OP_MRMOVL,
            Self::Op { op, .. } => (opcodes::CLASS_OPL << 4) | op.function(),
            Self::Jump { cond, .. } => (opcodes::CLASS_JXX << 4) | cond.function(),
            Self::Call { .. } => opcodes::OP_CALL,
            Self::Ret => opcodes::OP_RET,
            Self::Pushl { .. } => opcodes::OP_PUSHL,
            Self::Popl { .. } => opcodes::OP_POPL,
            Self::Readb { .. } => opcodes::OP_READB,
            Self::Readl { .. } => opcodes::OP_READL,
            Self::Writeb { .. } => opcodes::OP_WRITEB,
            Self::Writel { .. } => opcodes::OP_WRITEL,
            Self::Movsbl { .. } => opcodes::OP_MOVSBL,
        }
    }

    /// Returns the encoded length in bytes.
    pub const fn size(&self) -> u32 {
        match self {
            Self::Nop | Self::Halt | Self::Ret => 1,
            Self::Rrmovl { .. } | Self::Op { .. } | Self::Pushl { .. } | Self::Popl { .. } => 2,
            Self::Jump { .. } | Self::Call { .. } => 5,
            Self::Irmovl { .. }
            | Self::Rmmovl { .. }
            | Self::Mrmovl { .. }
            | Self::Readb { .. }
            | Self::Readl { .. }
            | Self::Writeb { .. }
            | Self::Writel { .. }
            | Self::Movsbl { .. } => 6,
        }
    }

    /// Returns the statistics category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Nop | Self::Halt => InstructionClass::Control,
            Self::Rrmovl { .. } | Self::Irmovl { .. } | Self::Movsbl { .. } => {
                InstructionClass::Move
            }
            Self::Rmmovl { .. } | Self::Mrmovl { .. } => InstructionClass::Memory,
            Self::Op { .. } => InstructionClass::Alu,
            Self::Jump { .. } => InstructionClass::Branch,
            Self::Call { .. } | Self::Ret | Self::Pushl { .. } | Self::Popl { .. } => {
                InstructionClass::Stack
            }
            Self::Readb { .. } | Self::Readl { .. } | Self::Writeb { .. } | Self::Writel { .. } => {
                InstructionClass::Io
            }
        }
    }
}

/// Returns the encoded length of the instruction with the given opcode byte,
/// or `None` if the opcode is not part of the instruction set.
pub const fn length_of(opcode: u8) -> Option<u32> {
    match opcode {
        opcodes::OP_NOP | opcodes::OP_HALT | opcodes::OP_RET => Some(1),
        opcodes::OP_RRMOVL | opcodes::OP_PUSHL | opcodes::OP_POPL => Some(2),
        0x60..=0x65 => Some(2),
        0x70..=0x76 | opcodes::OP_CALL => Some(5),
        opcodes::OP_IRMOVL
        | opcodes::OP_RMMOVL
        | opcodes::OP_MRMOVL
        | opcodes::OP_READB
        | opcodes::OP_READL
        | opcodes::OP_WRITEB
        | opcodes::OP_WRITEL
        | opcodes::OP_MOVSBL => Some(6),
        _ => None,
    }
}
