//! Machine geometry constants for the LS-8.

/// Total size of addressable memory in bytes.
///
/// Every memory access must satisfy `address < MEMORY_SIZE`; accesses at or
/// beyond this limit fault.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose register slots.
pub const NUM_REGISTERS: usize = 8;

/// Register slot holding the stack pointer, by convention.
///
/// The slot has no special type; `LDI` can retarget it like any other
/// register.
pub const SP: usize = 7;

/// Initial stack pointer value: the top of the reserved stack region,
/// distinct from the program/data region at the bottom of memory.
pub const STACK_TOP: u8 = 0xF4;
