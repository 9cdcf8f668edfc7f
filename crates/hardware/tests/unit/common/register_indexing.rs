//! # Register Indexing Tests
//!
//! This module provides unit tests for the `RegisterFile` structure, covering
//! reset values, read/write consistency, index masking, and the stack pointer.

use ls8_core::common::RegisterFile;
use ls8_core::common::constants::{SP, SP_INIT};

/// Ensures that `R0`-`R6` start at zero and `R7` holds the initial stack pointer.
#[test]
fn reset_values() {
    let regs = RegisterFile::new();
    for i in 0..SP {
        assert_eq!(regs.read(i), 0, "R{i} should be 0 initially");
    }
    assert_eq!(regs.read(SP), SP_INIT);
    assert_eq!(regs.sp(), 0xF4);
}

#[test]
fn with_sp_sets_only_r7() {
    let regs = RegisterFile::with_sp(0x80);
    assert_eq!(regs.snapshot(), [0, 0, 0, 0, 0, 0, 0, 0x80]);
}

#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new();
    regs.write(1, 42);
    assert_eq!(regs.read(1), 42);
    regs.write(1, 200);
    assert_eq!(regs.read(1), 200);
}

/// Verifies that all eight registers hold independent values.
#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::new();
    for i in 0..8 {
        regs.write(i, i as u8 * 10);
    }
    assert_eq!(regs.snapshot(), [0, 10, 20, 30, 40, 50, 60, 70]);
}

/// Register indices are taken from the low three bits, like an operand byte's register field.
#[test]
fn index_is_masked_to_three_bits() {
    let mut regs = RegisterFile::new();
    regs.write(9, 5);
    assert_eq!(regs.read(1), 5);
    assert_eq!(regs.read(0xF9), 5);
}

/// `R7` is an ordinary register; writing it moves the stack pointer.
#[test]
fn sp_is_r7() {
    let mut regs = RegisterFile::new();
    regs.set_sp(0x10);
    assert_eq!(regs.read(7), 0x10);
    regs.write(7, 0x20);
    assert_eq!(regs.sp(), 0x20);
}
