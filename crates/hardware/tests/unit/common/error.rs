//! Error display tests: diagnostics must name the failing address, opcode,
//! or line.

use ls8_core::common::{Fault, LoadError};

#[test]
fn out_of_bounds_names_address() {
    let fault = Fault::OutOfBounds { addr: 256 };
    assert_eq!(
        fault.to_string(),
        "memory access out of bounds at address 0x100"
    );
}

#[test]
fn invalid_register_names_index() {
    let fault = Fault::InvalidRegister { idx: 9 };
    assert_eq!(fault.to_string(), "invalid register index 9");
}

#[test]
fn invalid_opcode_names_byte_and_pc() {
    let fault = Fault::InvalidOpcode { opcode: 0xFF, pc: 3 };
    assert_eq!(
        fault.to_string(),
        "invalid instruction 0b11111111 at pc 0x03"
    );
}

#[test]
fn stack_faults_name_pointer() {
    assert_eq!(
        Fault::StackOverflow { sp: 0 }.to_string(),
        "stack overflow: push with sp at 0x00"
    );
    assert_eq!(
        Fault::StackUnderflow { sp: 0xFF }.to_string(),
        "stack underflow: pop with sp at 0xff"
    );
}

#[test]
fn malformed_line_names_line_and_text() {
    let err = LoadError::MalformedLine {
        line: 4,
        text: "abc".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "malformed instruction literal on line 4: \"abc\""
    );
}

#[test]
fn too_large_names_sizes() {
    let err = LoadError::TooLarge { len: 300, cap: 256 };
    assert_eq!(
        err.to_string(),
        "program of 300 bytes exceeds memory capacity of 256 bytes"
    );
}
