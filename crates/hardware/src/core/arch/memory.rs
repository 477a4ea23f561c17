//! E20 Main Memory.
//!
//! 8192 words of 16 bits. Every access goes through `WordAddr`, which has
//! already reduced the address modulo 8192.

use crate::common::addr::WordAddr;
use crate::common::constants::MEM_SIZE;

/// Word-addressed main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Creates a memory whose first words are `image`; the rest are zero.
    ///
    /// Words past the end of memory are dropped; the loader rejects such
    /// images before they get here.
    pub fn from_words(image: &[u16]) -> Self {
        let mut mem = Self::new();
        let n = image.len().min(MEM_SIZE);
        mem.words[..n].copy_from_slice(&image[..n]);
        mem
    }

    /// Reads the word at `addr`.
    #[inline(always)]
    pub fn read(&self, addr: WordAddr) -> u16 {
        self.words[addr.index()]
    }

    /// Writes `val` to the word at `addr`.
    #[inline(always)]
    pub fn write(&mut self, addr: WordAddr, val: u16) {
        self.words[addr.index()] = val;
    }

    /// All 8192 words in address order.
    pub fn words(&self) -> &[u16] {
        &self.words
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &self.words.len())
            .field("used", &used)
            .finish()
    }
}
