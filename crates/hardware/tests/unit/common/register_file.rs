//! Register file tests: initialization, round trips, bounds, and the
//! stack-pointer convention.

use ls8_core::common::constants::{NUM_REGISTERS, SP, STACK_TOP};
use ls8_core::common::{Fault, RegisterFile};
use pretty_assertions::assert_eq;

/// All general-purpose slots start at zero; the stack pointer starts at the
/// top of the reserved stack region.
#[test]
fn initial_values() {
    let regs = RegisterFile::new();
    for idx in 0..NUM_REGISTERS {
        let expected = if idx == SP { STACK_TOP } else { 0 };
        assert_eq!(regs.get(idx).unwrap(), expected, "r{idx}");
    }
}

/// A written value reads back from the same slot.
#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new();
    regs.set(3, 42).unwrap();
    assert_eq!(regs.get(3).unwrap(), 42);
}

/// Slots hold independent values.
#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::new();
    for idx in 0..NUM_REGISTERS {
        regs.set(idx, (idx as u8) * 10).unwrap();
    }
    for idx in 0..NUM_REGISTERS {
        assert_eq!(regs.get(idx).unwrap(), (idx as u8) * 10);
    }
}

/// An index past the last slot is rejected on read and write.
#[test]
fn out_of_range_index_rejected() {
    let mut regs = RegisterFile::new();
    assert_eq!(
        regs.get(NUM_REGISTERS),
        Err(Fault::InvalidRegister { idx: NUM_REGISTERS })
    );
    assert_eq!(
        regs.set(200, 1),
        Err(Fault::InvalidRegister { idx: 200 })
    );
}

/// The stack pointer is reachable through the indexed interface and the
/// dedicated accessors alike.
#[test]
fn stack_pointer_is_plain_register() {
    let mut regs = RegisterFile::new();
    assert_eq!(regs.sp(), STACK_TOP);
    regs.set(SP, 0x80).unwrap();
    assert_eq!(regs.sp(), 0x80);
    regs.set_sp(0x7F);
    assert_eq!(regs.get(SP).unwrap(), 0x7F);
}

/// The snapshot reflects current contents in slot order.
#[test]
fn snapshot_matches_contents() {
    let mut regs = RegisterFile::new();
    regs.set(0, 5).unwrap();
    regs.set(6, 9).unwrap();
    let snap = regs.snapshot();
    assert_eq!(snap[0], 5);
    assert_eq!(snap[6], 9);
    assert_eq!(snap[SP], STACK_TOP);
}
