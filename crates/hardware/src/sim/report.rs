//! Final State Reporter.
//!
//! Renders the program counter, the eight registers, and the head of memory:
//!
//! ```text
//! Final state:
//! 	pc=    1
//! 	$0=    0
//! 	...
//! 2085 4001 0000 0000 0000 0000 0000 0000
//! ```
//!
//! Register values are right-aligned decimal in a 5-character field; memory
//! words are lowercase 4-digit hex, each followed by one space.

use std::fmt;

use crate::config::ReportConfig;
use crate::core::Snapshot;

/// Formats a [`Snapshot`] as the final state report.
#[derive(Debug)]
pub struct StateReport<'a> {
    snapshot: Snapshot<'a>,
    config: &'a ReportConfig,
}

impl<'a> StateReport<'a> {
    /// Creates a report over `snapshot` with the layout in `config`.
    pub const fn new(snapshot: Snapshot<'a>, config: &'a ReportConfig) -> Self {
        Self { snapshot, config }
    }
}

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final state:")?;
        writeln!(f, "\tpc={:5}", self.snapshot.pc)?;
        for (idx, val) in self.snapshot.regs.iter().enumerate() {
            writeln!(f, "\t${idx}={val:5}")?;
        }

        let per_line = self.config.words_per_line.max(1);
        let count = self.config.memory_words.min(self.snapshot.memory.len());
        for line in self.snapshot.memory[..count].chunks(per_line) {
            for word in line {
                write!(f, "{word:04x} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
