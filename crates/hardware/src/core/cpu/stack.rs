//! Stack Access Helpers.
//!
//! The stack lives in main memory and grows down from the address held in
//! `R7`. `SP` arithmetic wraps modulo 256 like any other register write, so
//! every stack address is inside memory. All `SP` movement goes through
//! [`Cpu::grow_stack`] and [`Cpu::shrink_stack`].

use super::Cpu;
use crate::common::error::Fault;

impl Cpu {
    /// Address of the current top of stack.
    #[inline]
    pub(crate) fn stack_top(&self) -> usize {
        usize::from(self.regs.sp())
    }

    /// Decrements `SP` and returns the new top-of-stack address.
    pub(crate) fn grow_stack(&mut self) -> usize {
        self.regs.set_sp(self.regs.sp().wrapping_sub(1));
        self.stack_top()
    }

    /// Increments `SP`.
    pub(crate) fn shrink_stack(&mut self) {
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
    }

    /// Decrements `SP` and stores `value` at the new top of stack.
    pub(crate) fn push_byte(&mut self, value: u8) -> Result<(), Fault> {
        let top = self.grow_stack();
        self.memory.write(top, value)
    }

    /// Reads the top of stack and increments `SP`.
    pub(crate) fn pop_byte(&mut self) -> Result<u8, Fault> {
        let value = self.memory.read(self.stack_top())?;
        self.shrink_stack();
        Ok(value)
    }
}
