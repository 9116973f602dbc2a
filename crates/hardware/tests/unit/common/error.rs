//! # Error and Fault Tests
//!
//! Display formatting and classification of core errors.

use std::error::Error as _;

use ls8_core::common::{CpuError, Fault};

#[test]
fn test_unknown_instruction_display_shows_binary_opcode() {
    let err = CpuError::UnknownInstruction { opcode: 0xFF };
    assert_eq!(err.to_string(), "unknown instruction 0b11111111");
}

#[test]
fn test_invalid_address_display() {
    let err = CpuError::InvalidAddress { address: 256 };
    assert_eq!(err.to_string(), "invalid memory address 0x100");
}

#[test]
fn test_invalid_register_display() {
    let err = CpuError::InvalidRegister { index: 9 };
    assert_eq!(err.to_string(), "invalid register R9");
}

#[test]
fn test_stack_underflow_display() {
    let err = CpuError::StackUnderflow { sp: 0xF4 };
    assert_eq!(err.to_string(), "stack underflow (SP=0xf4)");
}

#[test]
fn test_unsupported_operation_display() {
    let err = CpuError::UnsupportedOperation { mnemonic: "PRN" };
    assert_eq!(err.to_string(), "unsupported ALU operation PRN");
}

#[test]
fn test_fault_display_includes_pc_and_instruction() {
    let fault = Fault {
        pc: 3,
        instruction: 0xFF,
        source: CpuError::UnknownInstruction { opcode: 0xFF },
    };
    assert_eq!(
        fault.to_string(),
        "unknown instruction 0b11111111 at PC 0x03 (IR 0b11111111)"
    );
    assert!(fault.is_unknown_instruction());
}

#[test]
fn test_fault_source_is_cpu_error() {
    let fault = Fault {
        pc: 6,
        instruction: 0b1010_0011,
        source: CpuError::DivisionByZero,
    };
    assert!(!fault.is_unknown_instruction());
    let source = fault.source().unwrap();
    assert_eq!(source.to_string(), "division by zero");
}

#[test]
fn test_io_error_converts_to_output() {
    let err: CpuError = std::io::Error::other("closed").into();
    assert!(matches!(err, CpuError::Output(_)));
}
