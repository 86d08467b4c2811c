//! Common components shared across the simulator.
//!
//! This module provides the leaf building blocks the execution engine is
//! composed from. It includes:
//! 1. **Constants:** Machine geometry (memory size, register count, stack region).
//! 2. **Error Handling:** The load-time and execution-time error taxonomies.
//! 3. **Memory:** The flat bounds-checked 256-byte RAM.
//! 4. **Registers:** The eight-slot register file with its stack-pointer convention.

/// Machine geometry constants.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

/// Flat addressable memory.
pub mod mem;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, STACK_TOP};
pub use error::{Fault, LoadError};
pub use mem::Ram;
pub use reg::RegisterFile;
