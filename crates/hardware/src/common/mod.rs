//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Address Types:** A wrapped 13-bit word address.
//! 2. **Constants:** Register count, memory size, and field masks.
//! 3. **Error Handling:** Errors raised while loading a program image.

/// Word address type with built-in 13-bit wraparound.
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::WordAddr;
pub use constants::{MEM_SIZE, NUM_REGS};
pub use error::LoadError;
