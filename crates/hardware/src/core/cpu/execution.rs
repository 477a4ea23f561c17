//! Main Execution Loop.
//!
//! This module implements the fetch, decode, halt-check, and dispatch cycle:
//! 1. **Fetch:** Reads `memory[pc mod 8192]`.
//! 2. **Decode:** Produces a tagged `Instruction`.
//! 3. **Halt Check:** A `j` whose target equals the current PC halts the
//!    machine before anything executes. This is the only halt check.
//! 4. **Dispatch:** Hands the instruction to the executor of its class, which
//!    sets the next PC.

use tracing::debug;

use super::{Cpu, RunState};
use crate::common::addr::WordAddr;
use crate::isa::{Instruction, decode};
use crate::stats::SimStats;

impl Cpu {
    /// Fetches the instruction word at the current PC.
    #[inline(always)]
    pub fn fetch(&self) -> u16 {
        self.mem.read(WordAddr::new(self.pc))
    }

    /// Executes one cycle.
    ///
    /// Does nothing once halted.
    ///
    /// # Returns
    ///
    /// The run state after the cycle.
    pub fn step(&mut self) -> RunState {
        if self.state == RunState::Halted {
            return self.state;
        }

        let inst = decode(self.fetch());

        if inst.jump_target() == Some(self.pc) {
            self.state = RunState::Halted;
            debug!(
                pc = self.pc,
                retired = self.stats.instructions_retired,
                "halted"
            );
            return self.state;
        }

        self.execute(inst);
        self.stats.instructions_retired += 1;
        self.state
    }

    /// Dispatches a decoded instruction to the executor for its class.
    pub fn execute(&mut self, inst: Instruction) {
        match inst {
            Instruction::Alu(i) => self.exec_alu(i),
            Instruction::Imm(i) => self.exec_immediate(i),
            Instruction::Control(i) => self.exec_control(i),
        }
    }

    /// Runs until the halt idiom is reached.
    ///
    /// A program without a jump-to-self never returns.
    ///
    /// # Returns
    ///
    /// The statistics of the completed run.
    pub fn run(&mut self) -> &SimStats {
        while self.step() == RunState::Running {}
        debug!(stats = %self.stats, "run complete");
        &self.stats
    }
}
