//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the E20 machine. It includes:
//! 1. **Register Constants:** Register count and the link register index.
//! 2. **Memory Constants:** Memory size and the 13-bit address mask.
//! 3. **Immediate Constants:** Widths and masks of the 7-bit and 13-bit immediates.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Register that receives the return address of `jal`.
pub const LINK_REG: usize = 7;

/// Number of address bits used to index memory.
pub const ADDR_BITS: u32 = 13;

/// Number of 16-bit words in memory (8192).
pub const MEM_SIZE: usize = 1 << ADDR_BITS;

/// Mask reducing any 16-bit value to a valid memory address.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Width in bits of the immediate carried by `addi`, `slti`, `jeq`, `lw` and `sw`.
pub const IMM7_BITS: u32 = 7;

/// Mask for extracting the 7-bit immediate field.
pub const IMM7_MASK: u16 = 0x7F;

/// Sign bit of the 7-bit immediate field.
pub const IMM7_SIGN_BIT: u16 = 0x40;

/// Bits OR'd into a negative 7-bit immediate to widen it to 16 bits.
pub const IMM7_SIGN_EXTEND: u16 = 0xFF80;

/// Mask for extracting the 13-bit jump target of `j` and `jal`.
pub const IMM13_MASK: u16 = 0x1FFF;
