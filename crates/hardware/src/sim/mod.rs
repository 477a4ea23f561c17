//! Program loading and state reporting.
//!
//! The I/O on either side of a run: reading a machine-code listing into
//! memory before execution, and rendering the final state afterwards.

/// Machine-code listing loader.
pub mod loader;

/// Final state report formatting.
pub mod report;

/// Loader, CPU, and reporter bundled for front ends.
pub mod simulator;

pub use loader::{load_image, parse_image};
pub use report::StateReport;
pub use simulator::Simulator;
