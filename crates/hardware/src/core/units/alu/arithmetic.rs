//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 65536; the E20 has no overflow flag.

use crate::isa::AluFunct;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic ops.
pub const fn execute(op: AluFunct, a: u16, b: u16) -> u16 {
    match op {
        AluFunct::Add => a.wrapping_add(b),
        AluFunct::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
