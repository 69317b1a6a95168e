//! ALU arithmetic operations.
//!
//! Add, subtract and multiply on signed 32-bit words. Each returns the
//! wrapped result together with the signed-overflow bit, which is exactly the
//! OF condition code.

use super::AluOp;

/// Executes an arithmetic operation, returning `(result, overflow)`.
///
/// CMPL computes the same difference as SUBL. Returns `(0, false)` for
/// non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> (i32, bool) {
    match op {
        AluOp::Add => b.overflowing_add(a),
        AluOp::Sub | AluOp::Cmp => b.overflowing_sub(a),
        AluOp::Mul => b.overflowing_mul(a),
        AluOp::And | AluOp::Xor => (0, false),
    }
}
