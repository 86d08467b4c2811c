//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! whole machine state. It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter, and run state.
//! 2. **Program Loading:** Writing a program image into memory from address 0.
//! 3. **Observability:** TRACE output and fault-time state dumps.
//!
//! The fetch-decode-execute loop itself lives in [`execution`]; the ALU in
//! [`alu`].

/// ALU operations on register values.
pub mod alu;

/// The fetch-decode-execute loop.
pub mod execution;

use std::io::{self, Write};

use crate::common::{Fault, Ram, RegisterFile};
use crate::config::Config;
use crate::isa::Instruction;
use crate::isa::disasm;
use crate::stats::SimStats;

/// Execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /// Fetching and executing instructions.
    Running,
    /// Stopped by `HLT`; terminal.
    Halted,
    /// Stopped by a [`Fault`]; terminal.
    Faulted,
}

/// The LS-8 CPU.
///
/// Each instance exclusively owns its memory and register file; multiple
/// instances are fully independent. Execution is single-threaded and
/// synchronous: each instruction runs to completion before the next fetch.
pub struct Cpu {
    /// Flat 256-byte memory.
    pub ram: Ram,
    /// General-purpose registers, stack pointer in slot 7.
    pub regs: RegisterFile,
    /// Address of the next instruction to fetch.
    pub pc: usize,
    /// Current run state.
    pub state: CpuState,
    /// Execution statistics.
    pub stats: SimStats,
    /// Emit a TRACE line before each executed instruction.
    pub trace: bool,
    /// Sink for `PRN` output.
    pub(crate) output: Box<dyn Write>,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers, writing `PRN` output
    /// to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, Box::new(io::stdout()))
    }

    /// Creates a CPU writing `PRN` output to the given sink.
    ///
    /// Tests inject a capturing sink here; the CLI uses [`Cpu::new`].
    pub fn with_output(config: &Config, output: Box<dyn Write>) -> Self {
        Self {
            ram: Ram::new(),
            regs: RegisterFile::new(),
            pc: 0,
            state: CpuState::Running,
            stats: SimStats::new(),
            trace: config.trace_instructions,
            output,
        }
    }

    /// Writes a program image into memory at consecutive addresses from 0.
    ///
    /// Fails with [`Fault::OutOfBounds`] if the image exceeds memory.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Fault> {
        for (addr, &byte) in program.iter().enumerate() {
            self.ram.write(addr, byte)?;
        }
        Ok(())
    }

    /// Dumps the program counter, run state, and registers to stderr.
    ///
    /// Called by drivers when a fault surfaces, so the diagnostic names the
    /// failing location alongside the machine state.
    pub fn dump_state(&self) {
        eprintln!("  pc={:#04x} state={:?}", self.pc, self.state);
        let regs = self.regs.snapshot();
        let formatted: Vec<String> = regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("r{i}={v:02X}"))
            .collect();
        eprintln!("  {}", formatted.join(" "));
    }

    /// Prints a TRACE line for the instruction about to execute.
    ///
    /// Mirrors the classic LS-8 trace format: program counter, the raw
    /// 3-byte window at the program counter, every register in hex, and the
    /// disassembled mnemonic. Window bytes past the end of memory render
    /// as zero.
    pub(crate) fn trace_instruction(&self, inst: Instruction) {
        let mut window = [0u8; 3];
        for (offset, slot) in window.iter_mut().enumerate() {
            *slot = self.ram.read(self.pc + offset).unwrap_or(0);
        }
        let regs = self.regs.snapshot();
        let formatted: Vec<String> = regs.iter().map(|v| format!("{v:02X}")).collect();
        println!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {} | {}",
            self.pc,
            window[0],
            window[1],
            window[2],
            formatted.join(" "),
            disasm::disassemble(inst)
        );
    }
}
