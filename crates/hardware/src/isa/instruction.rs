//! Instruction field extraction.
//!
//! Provides the raw bit extraction used by the decoder. Fields by form:
//!
//! ```text
//! opcode 000        op 15-13  regA 12-10  regB 9-7  regC 6-4  funct 3-0
//! addi, slti, jeq   op 15-13  regA 12-10  regB 9-7  imm7 6-0
//! lw, sw            op 15-13  base 11-9   reg  8-6  imm7 6-0
//! j, jal            op 15-13  imm13 12-0
//! ```
//!
//! The `lw`/`sw` register fields sit one bit lower than those of the other
//! immediate forms: bit 12 is ignored and bit 6 is read both as the low bit of
//! the data register and as the sign bit of the immediate.

/// Bit shift of the opcode field.
pub const OPCODE_SHIFT: u16 = 13;
/// Bit mask of the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x7;
/// Bit mask of any 3-bit register field after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit mask of the ALU function code field.
pub const FUNCT_MASK: u16 = 0xF;

/// Bit shift of register field A (bits 10-12).
pub const REG_A_SHIFT: u16 = 10;
/// Bit shift of register field B (bits 7-9).
pub const REG_B_SHIFT: u16 = 7;
/// Bit shift of register field C (bits 4-6).
pub const REG_C_SHIFT: u16 = 4;
/// Bit shift of the `lw`/`sw` base register field (bits 9-11).
pub const MEM_BASE_SHIFT: u16 = 9;
/// Bit shift of the `lw`/`sw` data register field (bits 6-8).
pub const MEM_REG_SHIFT: u16 = 6;

/// Trait for extracting instruction fields from encoded E20 words.
pub trait InstructionBits {
    /// Extracts the opcode (bits 13-15).
    fn opcode(&self) -> u16;

    /// Extracts register field A (bits 10-12).
    fn reg_a(&self) -> usize;

    /// Extracts register field B (bits 7-9).
    fn reg_b(&self) -> usize;

    /// Extracts register field C (bits 4-6).
    fn reg_c(&self) -> usize;

    /// Extracts the ALU function code (bits 0-3).
    fn funct(&self) -> u16;

    /// Extracts the `lw`/`sw` base register (bits 9-11).
    fn mem_base(&self) -> usize;

    /// Extracts the `lw`/`sw` data register (bits 6-8).
    fn mem_reg(&self) -> usize;

    /// Extracts the raw 7-bit immediate (bits 0-6), not sign-extended.
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit jump target (bits 0-12).
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_c(&self) -> usize {
        ((self >> REG_C_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u16 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn mem_base(&self) -> usize {
        ((self >> MEM_BASE_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn mem_reg(&self) -> usize {
        ((self >> MEM_REG_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & crate::common::constants::IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & crate::common::constants::IMM13_MASK
    }
}
