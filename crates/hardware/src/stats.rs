//! Simulation statistics collection and reporting.
//!
//! This module counts retired instructions for the E20 simulator. It provides:
//! 1. **Totals:** Instructions retired over the run.
//! 2. **Instruction mix:** Counts by class (ALU, immediate, control) and by
//!    memory direction (load, store).
//! 3. **Control flow:** Taken `jeq` branches.
//! 4. **Oddities:** Undefined ALU function codes executed as no-ops.
//!
//! The halting jump is not counted; it never executes.

use std::fmt;

/// Retired-instruction counters for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions executed.
    pub instructions_retired: u64,
    /// Opcode-`000` instructions (add, sub, or, and, slt, jr, undefined).
    pub inst_alu: u64,
    /// Immediate-class instructions (addi, slti, jeq, lw, sw).
    pub inst_imm: u64,
    /// Control-class instructions (j, jal).
    pub inst_control: u64,
    /// `lw` instructions.
    pub inst_load: u64,
    /// `sw` instructions.
    pub inst_store: u64,
    /// `jeq` instructions whose operands were equal.
    pub branches_taken: u64,
    /// Opcode-`000` words with an undefined function code.
    pub undefined_funct: u64,
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "retired={} alu={} imm={} control={} load={} store={} taken={} undefined={}",
            self.instructions_retired,
            self.inst_alu,
            self.inst_imm,
            self.inst_control,
            self.inst_load,
            self.inst_store,
            self.branches_taken,
            self.undefined_funct
        )
    }
}
