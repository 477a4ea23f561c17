//! Core processor implementation.
//!
//! This module contains the E20 CPU: its architectural state, the execution
//! units, and the fetch/decode/execute loop.

/// Architectural state components (register file, memory).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunState, Snapshot};
