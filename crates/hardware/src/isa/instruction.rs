//! Instruction decoding.
//!
//! Turns raw memory bytes at the program counter into a structured
//! [`Instruction`] carrying its operands. Dispatch over the decoded variants
//! replaces the original opcode-to-handler table: adding an instruction
//! means adding a variant and an arm, with no indirect calls.

use crate::common::{Fault, Ram};

use super::opcode::Opcode;

/// A decoded LS-8 instruction with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `LDI reg, value` — load an immediate into a register.
    Ldi {
        /// Destination register index.
        reg: u8,
        /// Immediate value.
        value: u8,
    },
    /// `PRN reg` — print a register as a decimal integer plus newline.
    Prn {
        /// Source register index.
        reg: u8,
    },
    /// `HLT` — stop execution.
    Hlt,
    /// `MUL ra, rb` — multiply into `ra`, truncated to 8 bits.
    Mul {
        /// Destination and first source register index.
        ra: u8,
        /// Second source register index.
        rb: u8,
    },
    /// `PUSH reg` — decrement the stack pointer, then store the register.
    Push {
        /// Source register index.
        reg: u8,
    },
    /// `POP reg` — load the register from the stack top, then increment
    /// the stack pointer.
    Pop {
        /// Destination register index.
        reg: u8,
    },
}

impl Instruction {
    /// Decodes the instruction starting at `pc`.
    ///
    /// Only the operand bytes the opcode's declared width requires are
    /// fetched, so a 1-byte instruction at the last memory cell decodes
    /// without a spurious bounds fault. An unrecognized opcode byte yields
    /// [`Fault::InvalidOpcode`]; an instruction whose operands run past the
    /// end of memory yields [`Fault::OutOfBounds`].
    pub fn decode(ram: &Ram, pc: usize) -> Result<Self, Fault> {
        let byte = ram.read(pc)?;
        let opcode = Opcode::from_byte(byte).ok_or(Fault::InvalidOpcode { opcode: byte, pc })?;

        let inst = match opcode {
            Opcode::Hlt => Self::Hlt,
            Opcode::Ldi => Self::Ldi {
                reg: ram.read(pc + 1)?,
                value: ram.read(pc + 2)?,
            },
            Opcode::Mul => Self::Mul {
                ra: ram.read(pc + 1)?,
                rb: ram.read(pc + 2)?,
            },
            Opcode::Push => Self::Push {
                reg: ram.read(pc + 1)?,
            },
            Opcode::Pop => Self::Pop {
                reg: ram.read(pc + 1)?,
            },
            Opcode::Prn => Self::Prn {
                reg: ram.read(pc + 1)?,
            },
        };
        Ok(inst)
    }

    /// The opcode of this instruction.
    pub fn opcode(self) -> Opcode {
        match self {
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Prn { .. } => Opcode::Prn,
            Self::Hlt => Opcode::Hlt,
            Self::Mul { .. } => Opcode::Mul,
            Self::Push { .. } => Opcode::Push,
            Self::Pop { .. } => Opcode::Pop,
        }
    }

    /// Total width in bytes, opcode included.
    pub fn width(self) -> usize {
        self.opcode().width()
    }
}
