//! E20 Instruction Decoder.
//!
//! This module turns a raw 16-bit word into an `Instruction`, a tagged value
//! with one case per opcode class carrying only the fields that class uses.
//! All knowledge of field positions lives here and in `instruction`; the
//! executors never touch raw bits. Decoding cannot fail: every 16-bit pattern
//! is some instruction, and undefined ALU function codes decode to
//! `AluFunct::Undefined`.

use crate::common::constants::{IMM7_SIGN_BIT, IMM7_SIGN_EXTEND};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Register-register operation selected by the function code of opcode `000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluFunct {
    /// `dst = a + b`, wrapping.
    Add,
    /// `dst = a - b`, wrapping.
    Sub,
    /// `dst = a | b`.
    Or,
    /// `dst = a & b`.
    And,
    /// `dst = (a < b) as u16`, unsigned.
    Slt,
    /// `pc = a`.
    Jr,
    /// Any other function code; executes as a no-op.
    Undefined(u16),
}

impl AluFunct {
    /// Maps a 4-bit function code to its operation.
    pub const fn from_code(code: u16) -> Self {
        match code {
            opcodes::FUNCT_ADD => Self::Add,
            opcodes::FUNCT_SUB => Self::Sub,
            opcodes::FUNCT_OR => Self::Or,
            opcodes::FUNCT_AND => Self::And,
            opcodes::FUNCT_SLT => Self::Slt,
            opcodes::FUNCT_JR => Self::Jr,
            other => Self::Undefined(other),
        }
    }
}

/// Opcode class `000`: three register fields and a function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluInst {
    /// Operation to perform.
    pub funct: AluFunct,
    /// First source register (bits 10-12); also the `jr` target register.
    pub src_a: usize,
    /// Second source register (bits 7-9).
    pub src_b: usize,
    /// Destination register (bits 4-6).
    pub dst: usize,
}

/// The five opcodes carrying a 7-bit immediate.
///
/// `imm` is always the sign-extended 16-bit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmInst {
    /// `dst = src + imm`.
    Addi {
        /// Source register (bits 10-12).
        src: usize,
        /// Destination register (bits 7-9).
        dst: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `dst = (src < imm) as u16`, unsigned.
    Slti {
        /// Source register (bits 10-12).
        src: usize,
        /// Destination register (bits 7-9).
        dst: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// Branch to `pc + 1 + imm` when `reg_a == reg_b`.
    Jeq {
        /// First compared register (bits 10-12).
        reg_a: usize,
        /// Second compared register (bits 7-9).
        reg_b: usize,
        /// Sign-extended branch offset.
        imm: u16,
    },
    /// `dst = mem[(base + imm) mod 8192]`.
    Lw {
        /// Base address register (bits 9-11).
        base: usize,
        /// Destination register (bits 6-8).
        dst: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `mem[(base + imm) mod 8192] = src`.
    Sw {
        /// Base address register (bits 9-11).
        base: usize,
        /// Source register (bits 6-8).
        src: usize,
        /// Sign-extended offset.
        imm: u16,
    },
}

/// The two absolute-jump opcodes carrying a 13-bit target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlInst {
    /// `pc = target`. A jump to its own address halts the machine.
    J {
        /// Absolute target address.
        target: u16,
    },
    /// `r7 = pc + 1; pc = target`.
    Jal {
        /// Absolute target address.
        target: u16,
    },
}

/// A decoded E20 instruction, one case per opcode class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Opcode `000`.
    Alu(AluInst),
    /// Opcodes `001`, `100`, `101`, `110`, `111`.
    Imm(ImmInst),
    /// Opcodes `010`, `011`.
    Control(ControlInst),
}

impl Instruction {
    /// Returns the target of a `j` instruction, if this is one.
    pub const fn jump_target(&self) -> Option<u16> {
        match self {
            Self::Control(ControlInst::J { target }) => Some(*target),
            _ => None,
        }
    }
}

/// Decodes a 16-bit E20 instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The decoded `Instruction`, with immediates already sign-extended.
pub fn decode(inst: u16) -> Instruction {
    match inst.opcode() {
        opcodes::OP_REG => Instruction::Alu(AluInst {
            funct: AluFunct::from_code(inst.funct()),
            src_a: inst.reg_a(),
            src_b: inst.reg_b(),
            dst: inst.reg_c(),
        }),
        opcodes::OP_ADDI => Instruction::Imm(ImmInst::Addi {
            src: inst.reg_a(),
            dst: inst.reg_b(),
            imm: sign_extend_imm7(inst.imm7()),
        }),
        opcodes::OP_SLTI => Instruction::Imm(ImmInst::Slti {
            src: inst.reg_a(),
            dst: inst.reg_b(),
            imm: sign_extend_imm7(inst.imm7()),
        }),
        opcodes::OP_JEQ => Instruction::Imm(ImmInst::Jeq {
            reg_a: inst.reg_a(),
            reg_b: inst.reg_b(),
            imm: sign_extend_imm7(inst.imm7()),
        }),
        opcodes::OP_LW => Instruction::Imm(ImmInst::Lw {
            base: inst.mem_base(),
            dst: inst.mem_reg(),
            imm: sign_extend_imm7(inst.imm7()),
        }),
        opcodes::OP_SW => Instruction::Imm(ImmInst::Sw {
            base: inst.mem_base(),
            src: inst.mem_reg(),
            imm: sign_extend_imm7(inst.imm7()),
        }),
        opcodes::OP_J => Instruction::Control(ControlInst::J {
            target: inst.imm13(),
        }),
        // OP_JAL is the only opcode left once the field is masked to 3 bits.
        _ => Instruction::Control(ControlInst::Jal {
            target: inst.imm13(),
        }),
    }
}

/// Sign-extends a 7-bit immediate to a 16-bit two's-complement value.
///
/// Values with bit 6 set land in `0xFFC0..=0xFFFF` (-64 to -1).
#[inline(always)]
pub const fn sign_extend_imm7(imm: u16) -> u16 {
    if imm & IMM7_SIGN_BIT != 0 {
        imm | IMM7_SIGN_EXTEND
    } else {
        imm
    }
}
