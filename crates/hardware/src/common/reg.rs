//! LS-8 Register File.
//!
//! This module implements the eight-slot general-purpose register file.
//! It performs the following:
//! 1. **Storage:** Maintains eight 8-bit registers (`r0`-`r7`), zero-initialized.
//! 2. **Stack Pointer Convention:** Slot 7 holds the stack pointer, reset to
//!    the top of the reserved stack region.
//! 3. **Bounds Enforcement:** Rejects accesses outside the valid index range.

use super::constants::{NUM_REGISTERS, SP, STACK_TOP};
use super::error::Fault;

/// The general-purpose register file.
///
/// Register values wrap at 8 bits per the ALU's unsigned integer domain.
/// The stack pointer lives in slot [`SP`] and is accessed through the same
/// indexed interface; the dedicated accessors below are conveniences for the
/// stack instructions.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with all slots zeroed except the stack
    /// pointer, which starts at [`STACK_TOP`].
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = STACK_TOP;
        Self { regs }
    }

    /// Reads the register at `idx`.
    pub fn get(&self, idx: usize) -> Result<u8, Fault> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Fault::InvalidRegister { idx })
    }

    /// Writes `value` to the register at `idx`.
    pub fn set(&mut self, idx: usize, value: u8) -> Result<(), Fault> {
        match self.regs.get_mut(idx) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Fault::InvalidRegister { idx }),
        }
    }

    /// Returns the current stack pointer.
    pub fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP] = value;
    }

    /// Returns a copy of all register values, for tracing and diagnostics.
    pub fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
