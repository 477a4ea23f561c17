//! Word Address type.
//!
//! E20 memory is indexed by 13 bits while registers and the program counter are
//! 16 bits wide. `WordAddr` is the only way into memory and always holds an
//! already-wrapped address, so no access can go out of bounds.

use std::fmt;

use super::constants::ADDR_MASK;

/// A 13-bit memory address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordAddr(u16);

impl WordAddr {
    /// Wraps a raw 16-bit value into the address space (modulo 8192).
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self(raw & ADDR_MASK)
    }

    /// Effective address of a load or store: `(base + offset) mod 8192`.
    ///
    /// # Arguments
    ///
    /// * `base` - Value of the base register.
    /// * `offset` - Sign-extended immediate, as a 16-bit two's-complement value.
    #[inline(always)]
    pub const fn offset(base: u16, offset: u16) -> Self {
        Self::new(base.wrapping_add(offset))
    }

    /// Returns the wrapped address value (0-8191).
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a memory index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for WordAddr {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for WordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
