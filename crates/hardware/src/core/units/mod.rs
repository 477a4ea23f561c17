//! Execution units.

/// Arithmetic Logic Unit (add, sub, or, and, slt).
pub mod alu;
