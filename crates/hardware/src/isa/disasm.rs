//! Instruction Disassembler for Y86.
//!
//! Converts a decoded [`Instruction`] into AT&T-style assembler text for
//! debug tracing, the CLI listing, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use y86_core::common::Register;
//! use y86_core::isa::disasm::disassemble;
//! use y86_core::isa::instruction::Instruction;
//!
//! let inst = Instruction::Rmmovl { src: Register::Eax, base: Register::Ebp, disp: 8 };
//! assert_eq!(disassemble(&inst), "rmmovl %eax, 8(%ebp)");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::memory::Memory;

/// Formats a `disp(base)` memory operand. A zero displacement is omitted.
fn mem_operand(disp: i32, base: impl fmt::Display) -> String {
    if disp == 0 {
        format!("({base})")
    } else {
        format!("{disp}({base})")
    }
}

/// Disassembles a decoded instruction into a human-readable string.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Nop => "nop".to_owned(),
        Instruction::Halt => "halt".to_owned(),
        Instruction::Ret => "ret".to_owned(),
        Instruction::Rrmovl { src, dst } => format!("rrmovl {src}, {dst}"),
        Instruction::Irmovl { dst, imm } => format!("irmovl ${imm}, {dst}"),
        Instruction::Rmmovl { src, base, disp } => {
            format!("rmmovl {src}, {}", mem_operand(disp, base))
        }
        Instruction::Mrmovl { dst, base, disp } => {
            format!("mrmovl {}, {dst}", mem_operand(disp, base))
        }
        Instruction::Op { op, src, dst } => format!("{op} {src}, {dst}"),
        Instruction::Jump { cond, dest } => format!("{cond} {dest:#x}"),
        Instruction::Call { dest } => format!("call {dest:#x}"),
        Instruction::Pushl { reg } => format!("pushl {reg}"),
        Instruction::Popl { reg } => format!("popl {reg}"),
        Instruction::Readb { base, disp } => format!("readb {}", mem_operand(disp, base)),
        Instruction::Readl { base, disp } => format!("readl {}", mem_operand(disp, base)),
        Instruction::Writeb { base, disp } => format!("writeb {}", mem_operand(disp, base)),
        Instruction::Writel { base, disp } => format!("writel {}", mem_operand(disp, base)),
        Instruction::Movsbl { base, dst, disp } => {
            format!("movsbl {}, {dst}", mem_operand(disp, base))
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&disassemble(self))
    }
}

/// One line of a disassembly listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the first byte.
    pub addr: u32,
    /// Raw encoding.
    pub bytes: Vec<u8>,
    /// Disassembled text, or a `.byte` directive for undecodable bytes.
    pub text: String,
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self.bytes.iter().map(|b| format!("{b:02x}")).collect();
        write!(f, "{:#06x}: {hex:<12} | {}", self.addr, self.text)
    }
}

/// Disassembles `len` bytes of memory starting at `start`.
///
/// Bytes that do not decode are listed one at a time as `.byte` directives so
/// the listing resynchronizes on the next valid opcode.
pub fn listing(memory: &Memory, start: u32, len: u32) -> Vec<ListingLine> {
    let end = start.saturating_add(len).min(memory.capacity());
    let mut lines = Vec::new();
    let mut addr = start;
    while addr < end {
        let line = match decode(memory, addr) {
            Ok(inst) if addr + inst.size() <= end => ListingLine {
                addr,
                bytes: memory.as_bytes()[addr as usize..(addr + inst.size()) as usize].to_vec(),
                text: disassemble(&inst),
            },
            _ => {
                let byte = memory.as_bytes()[addr as usize];
                ListingLine {
                    addr,
                    bytes: vec![byte],
                    text: format!(".byte {byte:#04x}"),
                }
            }
        };
        addr += line.bytes.len() as u32;
        lines.push(line);
    }
    lines
}
