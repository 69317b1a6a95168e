//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the OPL instruction group
//! (ADDL, SUBL, ANDL, XORL, MULL, CMPL). Every operation produces both a
//! 32-bit result and the full set of condition codes.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul (and Cmp, which is a Sub without writeback)
//! - [`logic`]:      And, Xor

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, xor).
pub mod logic;

use std::fmt;

use crate::core::arch::ConditionFlags;

/// ALU operation selected by the low nibble of an OPL opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `b + a`
    Add,
    /// `b - a`
    Sub,
    /// `b & a`
    And,
    /// `b ^ a`
    Xor,
    /// `b * a`
    Mul,
    /// Flags of `b - a`; the destination is not written.
    Cmp,
}

impl AluOp {
    /// Decodes the function nibble of an `0x6_` opcode.
    pub const fn from_function(func: u8) -> Option<Self> {
        match func {
            0x0 => Some(Self::Add),
            0x1 => Some(Self::Sub),
            0x2 => Some(Self::And),
            0x3 => Some(Self::Xor),
            0x4 => Some(Self::Mul),
            0x5 => Some(Self::Cmp),
            _ => None,
        }
    }

    /// Returns the function nibble of this operation.
    pub const fn function(self) -> u8 {
        match self {
            Self::Add => 0x0,
            Self::Sub => 0x1,
            Self::And => 0x2,
            Self::Xor => 0x3,
            Self::Mul => 0x4,
            Self::Cmp => 0x5,
        }
    }

    /// Returns `true` if the result is written to the destination register.
    #[inline]
    pub const fn writes_back(self) -> bool {
        !matches!(self, Self::Cmp)
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "addl",
            Self::Sub => "subl",
            Self::And => "andl",
            Self::Xor => "xorl",
            Self::Mul => "mull",
            Self::Cmp => "cmpl",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Result of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// The wrapped 32-bit result.
    pub value: i32,
    /// Condition codes derived from the operation.
    pub flags: ConditionFlags,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// `a` is the first decoded operand (rA) and `b` the second (rB); the
    /// result is always `b op a`. Results wrap on overflow and OF reports
    /// signed 32-bit overflow. AND and XOR always clear OF.
    ///
    /// # Examples
    ///
    /// ```
    /// use y86_core::core::units::alu::{Alu, AluOp};
    ///
    /// let out = Alu::execute(AluOp::Add, 1, i32::MAX);
    /// assert_eq!(out.value, i32::MIN);
    /// assert!(out.flags.of && out.flags.sf && !out.flags.zf);
    ///
    /// let out = Alu::execute(AluOp::Cmp, 5, 5);
    /// assert!(out.flags.zf);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> AluOutput {
        let (value, overflow) = match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Cmp => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Xor => (logic::execute(op, a, b), false),
        };
        AluOutput {
            value,
            flags: ConditionFlags::from_result(value, overflow),
        }
    }
}
