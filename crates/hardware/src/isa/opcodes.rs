//! E20 Opcodes and ALU function codes.
//!
//! Defines the major opcodes (bits 15-13) and the function codes (bits 3-0)
//! selecting the register-register operation under opcode `000`.

/// Register-register operations (add, sub, or, and, slt, jr).
pub const OP_REG: u16 = 0b000;

/// Add immediate.
pub const OP_ADDI: u16 = 0b001;

/// Unconditional jump.
pub const OP_J: u16 = 0b010;

/// Jump and link.
pub const OP_JAL: u16 = 0b011;

/// Load word.
pub const OP_LW: u16 = 0b100;

/// Store word.
pub const OP_SW: u16 = 0b101;

/// Jump if equal.
pub const OP_JEQ: u16 = 0b110;

/// Set if less than immediate.
pub const OP_SLTI: u16 = 0b111;

/// `add` function code.
pub const FUNCT_ADD: u16 = 0b0000;

/// `sub` function code.
pub const FUNCT_SUB: u16 = 0b0001;

/// `or` function code.
pub const FUNCT_OR: u16 = 0b0010;

/// `and` function code.
pub const FUNCT_AND: u16 = 0b0011;

/// `slt` function code.
pub const FUNCT_SLT: u16 = 0b0100;

/// `jr` function code.
pub const FUNCT_JR: u16 = 0b1000;
