//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the LS-8 opcode encodings, the decoder that turns memory bytes
//! into structured instructions, and a disassembler for trace output.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Decoded instruction representation and the decoder.
pub mod instruction;

/// Opcode encodings and per-opcode metadata.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::Opcode;
