//! Statistics tests: retirement counts and the instruction mix.

use crate::common::{asm, cpu_with_program};
use pretty_assertions::assert_eq;

/// The multiply demo retires five instructions with the expected mix.
#[test]
fn multiply_program_mix() {
    let program = [
        asm::ldi(0, 8),
        asm::ldi(1, 9),
        asm::mul(0, 1),
        asm::prn(0),
        asm::hlt(),
    ]
    .concat();
    let (mut cpu, _out) = cpu_with_program(&program);
    cpu.run().unwrap();
    assert_eq!(cpu.stats.instructions_retired, 5);
    assert_eq!(cpu.stats.inst_load_imm, 2);
    assert_eq!(cpu.stats.inst_alu, 1);
    assert_eq!(cpu.stats.inst_io, 1);
    assert_eq!(cpu.stats.inst_stack, 0);
}

/// Stack instructions count under the stack category.
#[test]
fn stack_program_mix() {
    let program = [
        asm::ldi(0, 1),
        asm::push(0),
        asm::pop(1),
        asm::hlt(),
    ]
    .concat();
    let (mut cpu, _out) = cpu_with_program(&program);
    cpu.run().unwrap();
    assert_eq!(cpu.stats.instructions_retired, 4);
    assert_eq!(cpu.stats.inst_stack, 2);
}

/// A faulting instruction does not retire.
#[test]
fn faulting_instruction_does_not_retire() {
    let mut program = asm::ldi(0, 1);
    program.push(0xFF);
    let (mut cpu, _out) = cpu_with_program(&program);
    let _ = cpu.run().unwrap_err();
    assert_eq!(cpu.stats.instructions_retired, 1);
}
