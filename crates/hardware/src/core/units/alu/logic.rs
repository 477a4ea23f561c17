//! ALU logical and comparison operations.
//!
//! `Slt` compares unsigned, for both `slt` and `slti`.

use crate::isa::AluFunct;

/// Executes a logical or comparison operation. Returns `0` for other ops.
pub const fn execute(op: AluFunct, a: u16, b: u16) -> u16 {
    match op {
        AluFunct::Or => a | b,
        AluFunct::And => a & b,
        AluFunct::Slt => (a < b) as u16,
        _ => 0,
    }
}
