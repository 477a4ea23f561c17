//! Register-register executor (opcode `000`).

use super::Cpu;
use crate::core::units::alu::Alu;
use crate::isa::{AluFunct, AluInst};

impl Cpu {
    /// Executes an opcode-`000` instruction.
    ///
    /// Value-producing operations write `dst` and advance the PC. `jr` sets the
    /// PC to the value of `src_a`. Undefined function codes write nothing and
    /// advance the PC.
    pub fn exec_alu(&mut self, inst: AluInst) {
        self.stats.inst_alu += 1;

        let a = self.regs.read(inst.src_a);
        let b = self.regs.read(inst.src_b);

        match inst.funct {
            AluFunct::Jr => {
                self.pc = a;
                return;
            }
            AluFunct::Undefined(_) => self.stats.undefined_funct += 1,
            op => {
                if let Some(result) = Alu::execute(op, a, b) {
                    self.regs.write(inst.dst, result);
                }
            }
        }

        self.advance_pc();
    }
}
