//! Flat addressable memory.
//!
//! The LS-8 address space is a single zero-initialized array of 256 byte
//! cells, allocated once at CPU construction. The program image is written
//! at the bottom at load time; the stack grows down from [`STACK_TOP`]
//! during execution.
//!
//! [`STACK_TOP`]: crate::common::constants::STACK_TOP

use super::constants::MEMORY_SIZE;
use super::error::Fault;

/// The 256-byte flat memory with bounds-checked access.
///
/// Addresses are `usize` so that overruns past the last cell are
/// representable and reported as [`Fault::OutOfBounds`] rather than
/// silently wrapping.
#[derive(Debug, Clone)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a new memory with every cell zeroed.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Fault::OutOfBounds { addr })
    }

    /// Writes `value` to the cell at `addr`.
    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), Fault> {
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::OutOfBounds { addr }),
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
