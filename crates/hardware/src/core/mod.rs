//! CPU core: architectural state and the execution engine.

/// The CPU state container and its execution logic.
pub mod cpu;

pub use cpu::{Cpu, CpuState};
pub use cpu::execution::Control;
