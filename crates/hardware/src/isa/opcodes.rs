//! Y86 Opcodes.
//!
//! Defines the opcode byte of every instruction. The high nibble selects the
//! instruction class; for OPL and jump classes the low nibble selects the
//! function.

/// No operation.
pub const OP_NOP: u8 = 0x00;

/// Stop execution with status HLT.
pub const OP_HALT: u8 = 0x10;

/// Register to register move.
pub const OP_RRMOVL: u8 = 0x20;

/// Immediate to register move.
pub const OP_IRMOVL: u8 = 0x30;

/// Register to memory move.
pub const OP_RMMOVL: u8 = 0x40;

/// Memory to register move.
pub const OP_MRMOVL: u8 = 0x50;

/// Integer operation class (ADDL..CMPL, function in the low nibble).
pub const CLASS_OPL: u8 = 0x6;

/// Jump class (JMP..JG, condition in the low nibble).
pub const CLASS_JXX: u8 = 0x7;

/// Push return address and jump.
pub const OP_CALL: u8 = 0x80;

/// Pop return address into the PC.
pub const OP_RET: u8 = 0x90;

/// Push register.
pub const OP_PUSHL: u8 = 0xA0;

/// Pop register.
pub const OP_POPL: u8 = 0xB0;

/// Read one byte from the console.
pub const OP_READB: u8 = 0xC0;

/// Read one decimal word from the console.
pub const OP_READL: u8 = 0xC1;

/// Write one byte to the console.
pub const OP_WRITEB: u8 = 0xD0;

/// Write one word to the console in decimal.
pub const OP_WRITEL: u8 = 0xD1;

/// Load a sign-extended byte.
pub const OP_MOVSBL: u8 = 0xE0;
