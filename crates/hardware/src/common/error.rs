//! Error taxonomies for the simulator.
//!
//! Two distinct classes exist:
//! 1. **[`LoadError`]:** Failures while reading or parsing a program file.
//!    These abort before execution begins.
//! 2. **[`Fault`]:** Failures raised by the execution engine. All faults are
//!    terminal: the fetch-decode loop stops and the fault surfaces to the
//!    caller with the failing address or opcode.
//!
//! No error in either class is retried; execution is local and deterministic,
//! so there is no transient-failure category.

use thiserror::Error;

/// A terminal execution fault.
///
/// Raising a fault moves the CPU to the `Faulted` state; no further
/// instructions execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A memory access outside the valid address range.
    #[error("memory access out of bounds at address {addr:#05x}")]
    OutOfBounds {
        /// The offending address.
        addr: usize,
    },

    /// A register access outside the valid index range.
    #[error("invalid register index {idx}")]
    InvalidRegister {
        /// The offending register index.
        idx: usize,
    },

    /// An opcode byte with no entry in the instruction set.
    #[error("invalid instruction {opcode:#010b} at pc {pc:#04x}")]
    InvalidOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Program counter at the time of the fetch.
        pc: usize,
    },

    /// A push attempted with the stack pointer already at address 0.
    #[error("stack overflow: push with sp at {sp:#04x}")]
    StackOverflow {
        /// Stack pointer value at the time of the push.
        sp: u8,
    },

    /// A pop attempted with the stack pointer at the end of memory.
    #[error("stack underflow: pop with sp at {sp:#04x}")]
    StackUnderflow {
        /// Stack pointer value at the time of the pop.
        sp: u8,
    },
}

/// A failure while loading a program file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("program file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: String,
    },

    /// The program file exists but could not be read.
    #[error("failed to read program file {path}: {source}")]
    Io {
        /// Path that was requested.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line contains non-binary content before any comment marker.
    #[error("malformed instruction literal on line {line}: {text:?}")]
    MalformedLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending text, comment stripped.
        text: String,
    },

    /// The decoded program does not fit in memory.
    #[error("program of {len} bytes exceeds memory capacity of {cap} bytes")]
    TooLarge {
        /// Decoded program length in bytes.
        len: usize,
        /// Memory capacity in bytes.
        cap: usize,
    },
}
