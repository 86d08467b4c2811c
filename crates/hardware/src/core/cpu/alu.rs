//! ALU operations on register values.
//!
//! The ALU applies an arithmetic operation to a pair of registers in place:
//! both operands are read before the write, and the result is stored into
//! the first register truncated to the 8-bit register width.

use super::Cpu;
use crate::common::Fault;

/// An arithmetic operation the ALU supports.
///
/// The operation set is closed by the type: an unsupported operation is
/// unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Addition, wrapping at 8 bits.
    Add,
    /// Multiplication, wrapping at 8 bits.
    Mul,
}

impl Cpu {
    /// Applies `op` to registers `ra` and `rb`, storing the result in `ra`.
    pub fn alu(&mut self, op: AluOp, ra: u8, rb: u8) -> Result<(), Fault> {
        let a = self.regs.get(ra as usize)?;
        let b = self.regs.get(rb as usize)?;
        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        };
        self.regs.set(ra as usize, result)
    }
}
