//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owner of all
//! E20 architectural state for the duration of a run:
//! 1. **State Management:** Register file, memory, and program counter.
//! 2. **Run State:** Whether the halt idiom has been reached.
//! 3. **Statistics:** Retired-instruction counters.
//!
//! The per-class executors live in sibling modules as further `impl Cpu`
//! blocks; the fetch/decode/dispatch loop is in [`execution`].

/// Register-register executor (opcode `000`).
pub mod alu;

/// Absolute jump executor (`j`, `jal`).
pub mod control;

/// Fetch, decode, halt check, and dispatch.
pub mod execution;

/// Immediate, memory, and branch executor (`addi`, `slti`, `jeq`, `lw`, `sw`).
pub mod immediate;

use crate::common::constants::NUM_REGS;
use crate::config::Config;
use crate::core::arch::{Gpr, Memory};
use crate::stats::SimStats;

/// Execution state of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being executed.
    #[default]
    Running,
    /// A `j` to its own address was fetched. Terminal.
    Halted,
}

/// Main CPU structure containing all E20 architectural state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Main memory.
    pub mem: Memory,
    /// Program counter. Only the low 13 bits address memory.
    pub pc: u16,
    /// Whether the machine has halted.
    pub state: RunState,
    /// Retired-instruction counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU over a loaded memory image.
    ///
    /// Registers start at zero and the PC at `config.general.start_pc`.
    pub fn new(mem: Memory, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            mem,
            pc: config.general.start_pc,
            state: RunState::Running,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` once the halt idiom has been reached.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Advances the PC to the next sequential instruction.
    #[inline(always)]
    pub(crate) const fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Captures the architectural state for reporting.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            pc: self.pc,
            regs: self.regs.snapshot(),
            memory: self.mem.words(),
        }
    }
}

/// Final architectural state: program counter, registers, and memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Program counter.
    pub pc: u16,
    /// Registers `$0`-`$7`.
    pub regs: [u16; NUM_REGS],
    /// All memory words in address order.
    pub memory: &'a [u16],
}
