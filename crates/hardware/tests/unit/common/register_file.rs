//! # Register File Tests
//!
//! Tests for the eight-entry LS-8 register file.

use ls8_core::common::{CpuError, RegisterFile, SP};
use proptest::prelude::*;

#[test]
fn test_register_file_new_initializes_to_zero() {
    let regs = RegisterFile::new();
    for i in 0..8 {
        assert_eq!(regs.read(i).unwrap(), 0);
    }
}

#[test]
fn test_with_stack_pointer_only_sets_r7() {
    let regs = RegisterFile::with_stack_pointer(0xF4);
    assert_eq!(regs.sp(), 0xF4);
    assert_eq!(regs.read(SP).unwrap(), 0xF4);
    for i in 0..7 {
        assert_eq!(regs.read(i).unwrap(), 0);
    }
}

#[test]
fn test_sp_is_r7() {
    let mut regs = RegisterFile::new();
    regs.write(7, 0x42).unwrap();
    assert_eq!(regs.sp(), 0x42);

    regs.set_sp(0x10);
    assert_eq!(regs.read(7).unwrap(), 0x10);
}

#[test]
fn test_register_independence() {
    let mut regs = RegisterFile::new();
    regs.write(1, 111).unwrap();
    regs.write(2, 222).unwrap();
    regs.write(3, 33).unwrap();

    assert_eq!(regs.read(1).unwrap(), 111);
    assert_eq!(regs.read(2).unwrap(), 222);
    assert_eq!(regs.read(3).unwrap(), 33);
    assert_eq!(regs.values(), &[0, 111, 222, 33, 0, 0, 0, 0]);
}

#[test]
fn test_read_out_of_range_register() {
    let regs = RegisterFile::new();
    assert!(matches!(
        regs.read(8),
        Err(CpuError::InvalidRegister { index: 8 })
    ));
}

#[test]
fn test_write_out_of_range_register_leaves_file_unchanged() {
    let mut regs = RegisterFile::new();
    let before = regs.clone();
    assert!(matches!(
        regs.write(200, 1),
        Err(CpuError::InvalidRegister { index: 200 })
    ));
    assert_eq!(regs, before);
}

#[test]
fn test_dump_format() {
    let mut regs = RegisterFile::with_stack_pointer(0xF4);
    regs.write(0, 0x0A).unwrap();
    assert_eq!(
        regs.dump(),
        "R0=0A R1=00 R2=00 R3=00 R4=00 R5=00 R6=00 R7=F4"
    );
}

proptest! {
    #[test]
    fn prop_write_then_read_returns_value(reg in 0u8..8, val in any::<u8>()) {
        let mut regs = RegisterFile::new();
        regs.write(reg, val).unwrap();
        prop_assert_eq!(regs.read(reg).unwrap(), val);
    }

    #[test]
    fn prop_invalid_index_always_rejected(reg in 8u8..=255) {
        let regs = RegisterFile::new();
        prop_assert!(regs.read(reg).is_err());
    }
}
