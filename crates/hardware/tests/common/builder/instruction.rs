//! Instruction encoders.
//!
//! Each function returns the exact byte encoding of one instruction so tests
//! can lay out programs without hand-assembling hex strings. Unused register
//! fields are filled with `F`, the "no register" nibble.

use y86_core::common::Register;
use y86_core::core::units::alu::AluOp;
use y86_core::core::units::bru::Condition;

/// The "no register" nibble.
pub const NONE: u8 = 0xF;

fn regs(ra: u8, rb: u8) -> u8 {
    (ra << 4) | rb
}

fn with_word(head: &[u8], word: i32) -> Vec<u8> {
    let mut out = head.to_vec();
    out.extend_from_slice(&word.to_le_bytes());
    out
}

fn nib(r: Register) -> u8 {
    r.index() as u8
}

pub fn nop() -> Vec<u8> {
    vec![0x00]
}

pub fn halt() -> Vec<u8> {
    vec![0x10]
}

pub fn rrmovl(src: Register, dst: Register) -> Vec<u8> {
    vec![0x20, regs(nib(src), nib(dst))]
}

pub fn irmovl(imm: i32, dst: Register) -> Vec<u8> {
    with_word(&[0x30, regs(NONE, nib(dst))], imm)
}

/// `rmmovl src, disp(base)`
pub fn rmmovl(src: Register, disp: i32, base: Register) -> Vec<u8> {
    with_word(&[0x40, regs(nib(src), nib(base))], disp)
}

/// `mrmovl disp(base), dst`
pub fn mrmovl(disp: i32, base: Register, dst: Register) -> Vec<u8> {
    with_word(&[0x50, regs(nib(dst), nib(base))], disp)
}

pub fn op(op: AluOp, src: Register, dst: Register) -> Vec<u8> {
    vec![0x60 | op.function(), regs(nib(src), nib(dst))]
}

pub fn jump(cond: Condition, dest: u32) -> Vec<u8> {
    with_word(&[0x70 | cond.function()], dest as i32)
}

pub fn call(dest: u32) -> Vec<u8> {
    with_word(&[0x80], dest as i32)
}

pub fn ret() -> Vec<u8> {
    vec![0x90]
}

pub fn pushl(reg: Register) -> Vec<u8> {
    vec![0xA0, regs(nib(reg), NONE)]
}

pub fn popl(reg: Register) -> Vec<u8> {
    vec![0xB0, regs(nib(reg), NONE)]
}

pub fn readb(disp: i32, base: Register) -> Vec<u8> {
    with_word(&[0xC0, regs(nib(base), NONE)], disp)
}

pub fn readl(disp: i32, base: Register) -> Vec<u8> {
    with_word(&[0xC1, regs(nib(base), NONE)], disp)
}

pub fn writeb(disp: i32, base: Register) -> Vec<u8> {
    with_word(&[0xD0, regs(nib(base), NONE)], disp)
}

pub fn writel(disp: i32, base: Register) -> Vec<u8> {
    with_word(&[0xD1, regs(nib(base), NONE)], disp)
}

/// `movsbl disp(base), dst`
pub fn movsbl(disp: i32, base: Register, dst: Register) -> Vec<u8> {
    with_word(&[0xE0, regs(nib(dst), nib(base))], disp)
}

/// Concatenates instruction encodings.
pub fn assemble(parts: &[Vec<u8>]) -> Vec<u8> {
    parts.concat()
}
