//! Absolute jump executor (`j`, `jal`).
//!
//! The executor owns the next PC outright; there is no trailing increment.
//! A `j` to its own address never gets here because the execution loop halts
//! on it first.

use super::Cpu;
use crate::common::constants::LINK_REG;
use crate::isa::ControlInst;

impl Cpu {
    /// Executes `j` or `jal`.
    pub fn exec_control(&mut self, inst: ControlInst) {
        self.stats.inst_control += 1;

        match inst {
            ControlInst::J { target } => self.pc = target,
            ControlInst::Jal { target } => {
                self.regs.write(LINK_REG, self.pc.wrapping_add(1));
                self.pc = target;
            }
        }
    }
}
