//! Branch Resolution Unit (BRU).
//!
//! Resolves the jump family (`0x70..=0x76`) against the condition codes. Each
//! condition is a pure function of ZF and `SF ^ OF`.

use std::fmt;

use crate::core::arch::ConditionFlags;

/// Jump condition selected by the low nibble of a `0x7_` opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Unconditional (`jmp`).
    Always,
    /// Less or equal: `ZF | (SF ^ OF)`.
    Le,
    /// Less: `!ZF & (SF ^ OF)`.
    L,
    /// Equal: `ZF`.
    E,
    /// Not equal: `!ZF`.
    Ne,
    /// Greater or equal: `!(!ZF & (SF ^ OF))`.
    Ge,
    /// Greater: `!(ZF | (SF ^ OF))`.
    G,
}

impl Condition {
    /// Decodes the function nibble of a `0x7_` opcode.
    pub const fn from_function(func: u8) -> Option<Self> {
        match func {
            0x0 => Some(Self::Always),
            0x1 => Some(Self::Le),
            0x2 => Some(Self::L),
            0x3 => Some(Self::E),
            0x4 => Some(Self::Ne),
            0x5 => Some(Self::Ge),
            0x6 => Some(Self::G),
            _ => None,
        }
    }

    /// Returns the function nibble of this condition.
    pub const fn function(self) -> u8 {
        match self {
            Self::Always => 0x0,
            Self::Le => 0x1,
            Self::L => 0x2,
            Self::E => 0x3,
            Self::Ne => 0x4,
            Self::Ge => 0x5,
            Self::G => 0x6,
        }
    }

    /// Returns `true` if a jump with this condition is taken.
    ///
    /// ```
    /// use y86_core::core::arch::ConditionFlags;
    /// use y86_core::core::units::bru::Condition;
    ///
    /// let equal = ConditionFlags::new(false, true, false);
    /// assert!(Condition::Le.evaluate(equal));
    /// assert!(!Condition::L.evaluate(equal));
    /// ```
    #[inline]
    pub const fn evaluate(self, flags: ConditionFlags) -> bool {
        let zf = flags.zf;
        let less = flags.less();
        match self {
            Self::Always => true,
            Self::Le => zf || less,
            Self::L => !zf && less,
            Self::E => zf,
            Self::Ne => !zf,
            Self::Ge => !(!zf && less),
            Self::G => !(zf || less),
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Always => "jmp",
            Self::Le => "jle",
            Self::L => "jl",
            Self::E => "je",
            Self::Ne => "jne",
            Self::Ge => "jge",
            Self::G => "jg",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
