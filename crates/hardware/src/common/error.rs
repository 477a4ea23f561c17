//! Load Error definitions.
//!
//! Execution itself cannot fail on the E20: every bit pattern decodes and every
//! address wraps into range. The only failures are those of getting a program
//! into memory, collected here. The `Display` text of each variant is the
//! diagnostic printed by the command-line front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a machine-code image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("Can't open file {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line does not have the form `ram[<addr>] = 16'b<bits>;`.
    #[error("Can't parse line: {line}")]
    Parse {
        /// One-based line number.
        line_no: usize,
        /// The offending line, verbatim.
        line: String,
    },

    /// A line names an address other than the next one in sequence.
    #[error("Memory addresses encountered out of sequence: {addr}")]
    OutOfSequence {
        /// Address found on the line.
        addr: usize,
        /// Address that was expected.
        expected: usize,
    },

    /// The image has more words than memory holds.
    #[error("Program too big for memory")]
    TooBig {
        /// First address that does not fit.
        addr: usize,
    },
}
