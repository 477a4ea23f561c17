//! Simulator: owns the CPU together with the run configuration.
//!
//! Ties the loader, the execution loop, and the reporter into one value so a
//! front end only has to load, run, and print.

use std::path::Path;

use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::Memory;
use crate::sim::loader;
use crate::sim::report::StateReport;
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + configuration.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator over an already-loaded memory image.
    pub fn new(mem: Memory, config: Config) -> Self {
        let cpu = Cpu::new(mem, &config);
        Self { cpu, config }
    }

    /// Loads a machine-code listing from `path` and creates a simulator over it.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] raised while reading or parsing the listing.
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Result<Self, LoadError> {
        let mem = loader::load_image(path)?;
        Ok(Self::new(mem, config))
    }

    /// Runs the program to the halt idiom.
    pub fn run(&mut self) -> &SimStats {
        self.cpu.run()
    }

    /// Returns the final state report for the current CPU state.
    pub fn report(&self) -> StateReport<'_> {
        StateReport::new(self.cpu.snapshot(), &self.config.report)
    }
}
