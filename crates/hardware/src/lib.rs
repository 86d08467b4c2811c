//! LS-8 stored-program computer simulator core.
//!
//! This crate implements the LS-8: an 8-bit machine with 256 bytes of flat
//! memory, eight general-purpose registers, and a fetch-decode-execute
//! engine. It provides:
//! 1. **Memory and Registers:** Bounds-checked leaf components ([`common`]).
//! 2. **ISA:** Opcode encodings, instruction decoding, and a disassembler ([`isa`]).
//! 3. **Execution Engine:** The CPU state container and its dispatch loop ([`core`]).
//! 4. **Program Loading:** The `.ls8` binary-text program format ([`sim`]).
//! 5. **Observability:** Per-instruction tracing and run statistics ([`stats`]).

/// Shared leaf components: constants, errors, memory, and registers.
pub mod common;

/// Run configuration.
pub mod config;

/// CPU core: architectural state and the execution engine.
pub mod core;

/// Instruction Set Architecture definitions and decoding.
pub mod isa;

/// Program loading utilities.
pub mod sim;

/// Execution statistics collection and reporting.
pub mod stats;
