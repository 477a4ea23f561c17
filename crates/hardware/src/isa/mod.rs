//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 opcodes, function codes, raw field extraction, and the
//! decoder producing a tagged `Instruction` per opcode class.

/// Instruction decoding into per-class variants.
pub mod decode;

/// Instruction encoding layout and bit extraction utilities.
pub mod instruction;

/// Opcode and ALU function code values.
pub mod opcodes;

pub use decode::{AluFunct, AluInst, ControlInst, ImmInst, Instruction, decode};
