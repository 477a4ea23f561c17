//! Immediate, memory, and branch executor.
//!
//! Handles `addi`, `slti`, `jeq`, `lw`, and `sw`. The decoder has already
//! sign-extended every immediate, so arithmetic here is plain wrapping u16
//! arithmetic. Load and store addresses wrap modulo 8192 through `WordAddr`.

use super::Cpu;
use crate::common::addr::WordAddr;
use crate::core::units::alu::{arithmetic, logic};
use crate::isa::{AluFunct, ImmInst};

impl Cpu {
    /// Executes one of the five immediate-class instructions.
    pub fn exec_immediate(&mut self, inst: ImmInst) {
        self.stats.inst_imm += 1;

        match inst {
            ImmInst::Addi { src, dst, imm } => {
                let a = self.regs.read(src);
                self.regs.write(dst, arithmetic::execute(AluFunct::Add, a, imm));
                self.advance_pc();
            }
            ImmInst::Slti { src, dst, imm } => {
                let a = self.regs.read(src);
                self.regs.write(dst, logic::execute(AluFunct::Slt, a, imm));
                self.advance_pc();
            }
            ImmInst::Jeq { reg_a, reg_b, imm } => {
                if self.regs.read(reg_a) == self.regs.read(reg_b) {
                    self.stats.branches_taken += 1;
                    self.pc = self.pc.wrapping_add(1).wrapping_add(imm);
                } else {
                    self.advance_pc();
                }
            }
            ImmInst::Lw { base, dst, imm } => {
                self.stats.inst_load += 1;
                let addr = WordAddr::offset(self.regs.read(base), imm);
                self.regs.write(dst, self.mem.read(addr));
                self.advance_pc();
            }
            ImmInst::Sw { base, src, imm } => {
                self.stats.inst_store += 1;
                let addr = WordAddr::offset(self.regs.read(base), imm);
                self.mem.write(addr, self.regs.read(src));
                self.advance_pc();
            }
        }
    }
}
