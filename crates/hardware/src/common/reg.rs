//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! general-purpose registers. It provides:
//! 1. **Storage:** `R0`-`R7`, with `R7` preset as the stack pointer.
//! 2. **Invariant Enforcement:** Every stored value is a byte and every index is taken modulo 8.
//! 3. **Observability:** Snapshots of the register state for tracing.

use super::constants::{REGISTER_COUNT, REGISTER_INDEX_MASK, SP, SP_INIT};

/// The eight general-purpose registers.
///
/// Register indices are taken modulo 8, matching the 3-bit register field of
/// an operand byte. `R7` holds the stack pointer but is otherwise an ordinary
/// register; nothing stops a program from overwriting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers zero and `SP` at `0xF4`.
    pub const fn new() -> Self {
        Self::with_sp(SP_INIT)
    }

    /// Creates a register file with all registers zero and `SP` at `sp`.
    pub const fn with_sp(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP] = sp;
        Self { regs }
    }

    /// Reads register `idx`.
    #[inline]
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[Self::slot(idx)]
    }

    /// Writes `val` to register `idx`.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u8) {
        self.regs[Self::slot(idx)] = val;
    }

    /// Current stack pointer.
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer.
    #[inline]
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs[SP] = sp;
    }

    /// Copy of all eight registers, `R0` first.
    pub const fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    #[inline]
    const fn slot(idx: usize) -> usize {
        idx & REGISTER_INDEX_MASK as usize
    }
}
