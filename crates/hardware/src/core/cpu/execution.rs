//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the
//! following:
//! 1. **Fetch/Decode:** Reads the opcode at the program counter and exactly
//!    the operand bytes its width requires.
//! 2. **Dispatch:** A match over the decoded instruction replaces the
//!    original opcode-to-handler table.
//! 3. **Program Counter Contract:** Every instruction yields a [`Control`]
//!    value and the engine applies the advancement uniformly; no handler
//!    touches the program counter itself.
//! 4. **Termination:** The loop ends on `HLT`, an unrecognized opcode, or a
//!    bounds fault. Nothing is retried.

use std::io::Write as _;

use super::alu::AluOp;
use super::{Cpu, CpuState};
use crate::common::Fault;
use crate::isa::Instruction;

/// Program-counter effect of an executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Advance the program counter by the instruction's width in bytes.
    Advance(usize),
    /// Redirect the program counter to an absolute address.
    ///
    /// No instruction in the current set jumps; the variant keeps the loop
    /// contract ready for control-flow extensions.
    Jump(usize),
    /// Stop execution.
    Halt,
}

impl Cpu {
    /// Executes a single instruction at the current program counter.
    ///
    /// On success the program counter has been advanced (or redirected) and
    /// the returned [`Control`] reports what happened. On error the CPU has
    /// transitioned to [`CpuState::Faulted`] and no state beyond the
    /// faulting instruction's partial effects has changed.
    pub fn step(&mut self) -> Result<Control, Fault> {
        let result = self.fetch_execute();
        if result.is_err() {
            self.state = CpuState::Faulted;
        }
        result
    }

    /// Runs the fetch-decode-execute loop until halt or fault.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.state == CpuState::Running {
            let _ = self.step()?;
        }
        Ok(())
    }

    fn fetch_execute(&mut self) -> Result<Control, Fault> {
        let inst = Instruction::decode(&self.ram, self.pc)?;
        if self.trace {
            self.trace_instruction(inst);
        }
        let control = self.execute(inst)?;
        match control {
            Control::Advance(width) => self.pc += width,
            Control::Jump(target) => self.pc = target,
            Control::Halt => self.state = CpuState::Halted,
        }
        self.stats.instructions_retired += 1;
        Ok(control)
    }

    /// Dispatches one decoded instruction.
    fn execute(&mut self, inst: Instruction) -> Result<Control, Fault> {
        let control = match inst {
            Instruction::Ldi { reg, value } => {
                self.regs.set(reg as usize, value)?;
                self.stats.inst_load_imm += 1;
                Control::Advance(inst.width())
            }
            Instruction::Prn { reg } => {
                let value = self.regs.get(reg as usize)?;
                // Sink write failures are a host concern, not a machine fault.
                let _ = writeln!(self.output, "{value}");
                self.stats.inst_io += 1;
                Control::Advance(inst.width())
            }
            Instruction::Hlt => Control::Halt,
            Instruction::Mul { ra, rb } => {
                self.alu(AluOp::Mul, ra, rb)?;
                self.stats.inst_alu += 1;
                Control::Advance(inst.width())
            }
            Instruction::Push { reg } => {
                self.push(reg)?;
                self.stats.inst_stack += 1;
                Control::Advance(inst.width())
            }
            Instruction::Pop { reg } => {
                self.pop(reg)?;
                self.stats.inst_stack += 1;
                Control::Advance(inst.width())
            }
        };
        Ok(control)
    }

    /// Decrements the stack pointer, then stores the register at the new top.
    ///
    /// A push with the stack pointer already at address 0 would leave the
    /// address space, so it faults instead of wrapping.
    fn push(&mut self, reg: u8) -> Result<(), Fault> {
        let value = self.regs.get(reg as usize)?;
        let sp = self.regs.sp();
        let new_sp = sp.checked_sub(1).ok_or(Fault::StackOverflow { sp })?;
        self.ram.write(new_sp as usize, value)?;
        self.regs.set_sp(new_sp);
        Ok(())
    }

    /// Loads the register from the stack top, then increments the stack
    /// pointer.
    ///
    /// A pop with the stack pointer at the last memory cell cannot
    /// increment without leaving the address space, so it faults before any
    /// register or stack-pointer mutation.
    fn pop(&mut self, reg: u8) -> Result<(), Fault> {
        let sp = self.regs.sp();
        let value = self.ram.read(sp as usize)?;
        let new_sp = sp.checked_add(1).ok_or(Fault::StackUnderflow { sp })?;
        self.regs.set(reg as usize, value)?;
        self.regs.set_sp(new_sp);
        Ok(())
    }
}
