//! ALU logical operations.

use super::AluOp;

/// Executes a bitwise operation. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => b & a,
        AluOp::Xor => b ^ a,
        _ => 0,
    }
}
