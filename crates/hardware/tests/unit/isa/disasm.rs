//! Disassembler text.

use pretty_assertions::assert_eq;

use y86_core::common::Register::*;
use y86_core::core::units::alu::AluOp;
use y86_core::core::units::bru::Condition;
use y86_core::isa::disasm::{disassemble, listing};
use y86_core::isa::instruction::Instruction;
use y86_core::load_program;

use crate::common::builder::ProgramBuilder;
use crate::common::builder::instruction::*;

#[test]
fn att_style_operands() {
    let cases = [
        (Instruction::Irmovl { dst: Eax, imm: 5 }, "irmovl $5, %eax"),
        (Instruction::Mrmovl { dst: Ecx, base: Esp, disp: 0 }, "mrmovl (%esp), %ecx"),
        (Instruction::Op { op: AluOp::Sub, src: Ebx, dst: Eax }, "subl %ebx, %eax"),
        (Instruction::Jump { cond: Condition::Le, dest: 0x1c }, "jle 0x1c"),
        (Instruction::Movsbl { base: Esi, dst: Edi, disp: -1 }, "movsbl -1(%esi), %edi"),
        (Instruction::Readl { base: Ebx, disp: 4 }, "readl 4(%ebx)"),
    ];
    for (inst, text) in cases {
        assert_eq!(disassemble(&inst), text);
        assert_eq!(inst.to_string(), text);
    }
}

#[test]
fn listing_resynchronizes_after_bad_bytes() {
    let code = assemble(&[irmovl(1, Eax), vec![0xF0], halt()]);
    let src = ProgramBuilder::new().code(&code).build();
    let prog = load_program(&src, &y86_core::Config::default()).unwrap();
    let lines = listing(&prog.memory, prog.entry_point, prog.text_len);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["irmovl $1, %eax", ".byte 0xf0", "halt"]);
    assert_eq!(lines[2].addr, 7);
    assert_eq!(lines[0].to_string(), "0x0000: 30f001000000 | irmovl $1, %eax");
}
