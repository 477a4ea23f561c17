//! Machine-Code Image Loader.
//!
//! This module reads E20 machine-code listings into memory. It performs:
//! 1. **File reading:** Pulls the listing from disk.
//! 2. **Line parsing:** Accepts `ram[<addr>] = 16'b<bits>;` lines, with any
//!    trailing text after the semicolon ignored.
//! 3. **Validation:** Addresses must run 0, 1, 2, ... without gaps and stay
//!    below 8192. The first bad line aborts the load.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::common::constants::MEM_SIZE;
use crate::common::error::LoadError;
use crate::core::arch::Memory;

/// One listing line: decimal address, then exactly 16 binary digits.
#[allow(clippy::expect_used)]
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ram\[(\d+)\] = 16'b([01]{16});.*$").expect("listing line pattern is valid")
});

/// Loads a machine-code listing from disk.
///
/// # Arguments
///
/// * `path` - Path to the listing, typically with a `.bin` suffix.
///
/// # Errors
///
/// `LoadError::Io` if the file cannot be read, otherwise any error of
/// [`parse_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<Memory, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_image(&String::from_utf8_lossy(&bytes))
}

/// Parses a machine-code listing into a memory image.
///
/// Addresses not named in the listing are zero.
///
/// # Errors
///
/// Per line, in this order: `Parse` if the line does not match,
/// `OutOfSequence` if the address is not the next one, `TooBig` if the
/// address does not fit in memory.
pub fn parse_image(text: &str) -> Result<Memory, LoadError> {
    let mut words = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let (addr, word) = parse_line(idx + 1, line)?;

        if addr != words.len() {
            return Err(LoadError::OutOfSequence {
                addr,
                expected: words.len(),
            });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::TooBig { addr });
        }
        words.push(word);
    }

    debug!(words = words.len(), "image loaded");
    Ok(Memory::from_words(&words))
}

/// Splits one listing line into its address and instruction word.
fn parse_line(line_no: usize, line: &str) -> Result<(usize, u16), LoadError> {
    let bad_line = || LoadError::Parse {
        line_no,
        line: line.to_string(),
    };

    let caps = LINE_RE.captures(line).ok_or_else(bad_line)?;
    let addr = caps[1].parse::<usize>().map_err(|_| bad_line())?;
    let word = u16::from_str_radix(&caps[2], 2).map_err(|_| bad_line())?;
    Ok((addr, word))
}
