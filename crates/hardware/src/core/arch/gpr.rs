//! E20 General-Purpose Register File.
//!
//! This module implements the eight 16-bit general-purpose registers. It performs:
//! 1. **Storage:** Maintains registers `$0`-`$7`.
//! 2. **Invariant Enforcement:** Register `$0` is hardwired to zero; writes to it are dropped.
//! 3. **Snapshots:** Copies the register values out for reporting.

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
///
/// Register indices come from 3-bit instruction fields, so every index in
/// `0..8` is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register. `$0` always reads 0.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    #[inline(always)]
    pub const fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `$0` are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 16-bit value to write.
    #[inline(always)]
    pub const fn write(&mut self, idx: usize, val: u16) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all eight registers in index order.
    pub const fn snapshot(&self) -> [u16; NUM_REGS] {
        self.regs
    }
}
