//! Instruction disassembler.
//!
//! Converts a decoded [`Instruction`] into a human-readable mnemonic string
//! for trace output and test diagnostics.

use super::instruction::Instruction;

/// Renders an instruction as assembly text.
pub fn disassemble(inst: Instruction) -> String {
    let mnemonic = inst.opcode().mnemonic();
    match inst {
        Instruction::Ldi { reg, value } => format!("{mnemonic} r{reg}, {value}"),
        Instruction::Mul { ra, rb } => format!("{mnemonic} r{ra}, r{rb}"),
        Instruction::Prn { reg } | Instruction::Push { reg } | Instruction::Pop { reg } => {
            format!("{mnemonic} r{reg}")
        }
        Instruction::Hlt => mnemonic.to_string(),
    }
}
