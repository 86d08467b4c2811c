//! LS-8 Opcodes.
//!
//! Defines the opcode byte encodings and the metadata the engine needs to
//! fetch each instruction: its total width in bytes, which also determines
//! how many operand bytes follow the opcode.

/// An LS-8 opcode.
///
/// The discriminants are the architectural byte encodings. The encoding
/// packs metadata into the byte (the top two bits are the operand count),
/// but decoding goes through [`Opcode::from_byte`] so unlisted byte values
/// are rejected rather than field-extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Halt execution.
    Hlt = 0b0000_0001,
    /// Load an immediate value into a register.
    Ldi = 0b1000_0010,
    /// Multiply two registers, storing into the first.
    Mul = 0b1010_0010,
    /// Push a register value onto the stack.
    Push = 0b0100_0101,
    /// Pop the top of the stack into a register.
    Pop = 0b0100_0110,
    /// Print a register value as a decimal integer.
    Prn = 0b0100_0111,
}

impl Opcode {
    /// Decodes an opcode byte, returning `None` for bytes with no entry in
    /// the instruction set.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0b0000_0001 => Some(Self::Hlt),
            0b1000_0010 => Some(Self::Ldi),
            0b1010_0010 => Some(Self::Mul),
            0b0100_0101 => Some(Self::Push),
            0b0100_0110 => Some(Self::Pop),
            0b0100_0111 => Some(Self::Prn),
            _ => None,
        }
    }

    /// Total instruction width in bytes, opcode included.
    ///
    /// The engine advances the program counter by this amount after a
    /// non-jumping instruction, and fetches exactly `width() - 1` operand
    /// bytes during decode.
    pub fn width(self) -> usize {
        match self {
            Self::Hlt => 1,
            Self::Push | Self::Pop | Self::Prn => 2,
            Self::Ldi | Self::Mul => 3,
        }
    }

    /// The assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "hlt",
            Self::Ldi => "ldi",
            Self::Mul => "mul",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Prn => "prn",
        }
    }
}
