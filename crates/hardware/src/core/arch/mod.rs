//! E20 architectural state components.
//!
//! 1. **GPRs:** The eight-entry general-purpose register file.
//! 2. **Memory:** The 8192-word main memory.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Word-addressed main memory.
pub mod memory;

pub use gpr::Gpr;
pub use memory::Memory;
