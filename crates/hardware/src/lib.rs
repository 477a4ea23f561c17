//! E20 instruction-set simulator library.
//!
//! This crate simulates the E20, a 16-bit machine with eight registers and
//! 8192 words of memory:
//! 1. **ISA:** Field extraction and decoding of 16-bit instruction words.
//! 2. **Core:** Register file, memory, and the per-class executors.
//! 3. **Execution:** The fetch/decode/execute loop, halting on a jump to self.
//! 4. **Simulation:** Machine-code loader, final state reporter, configuration, and statistics.
//!
//! ```
//! use e20_core::config::Config;
//! use e20_core::sim::{Simulator, parse_image};
//!
//! let listing = "ram[0] = 16'b0010000010000101;\nram[1] = 16'b0100000000000001;\n";
//! let mut sim = Simulator::new(parse_image(listing).unwrap(), Config::default());
//! let _ = sim.run();
//! assert_eq!(sim.cpu.regs.read(1), 5);
//! assert_eq!(sim.cpu.pc, 1);
//! ```

/// Common types and constants (addresses, machine dimensions, errors).
pub mod common;
/// Simulator configuration (defaults and serde structures).
pub mod config;
/// CPU core (architectural state, execution units, executors, loop).
pub mod core;
/// Instruction set (opcodes, field extraction, decoder).
pub mod isa;
/// Loader, reporter, and the bundled simulator.
pub mod sim;
/// Simulation statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, PC, and stats.
pub use crate::core::Cpu;
/// Loader, CPU, and reporter bundled together.
pub use crate::sim::Simulator;
